use serde::Deserialize;
use tracing::debug;

use crate::domain::{AggregatorStory, SourceKind, TrendRecord};
use crate::errors::TrendingResult;
use crate::sources::http::{HttpClient, HttpRequest};
use crate::sources::traits::TrendSource;

pub const HN_API_ROOT: &str = "https://hacker-news.firebaseio.com/v0";
pub const HN_ITEM_PAGE: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Deserialize)]
struct HackerNewsItem {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    score: i64,
}

pub fn top_stories_url() -> String {
    format!("{}/topstories.json", HN_API_ROOT)
}

pub fn item_url(id: u64) -> String {
    format!("{}/item/{}.json", HN_API_ROOT, id)
}

/// Discussion page used when a story has no external URL
pub fn item_page_url(id: u64) -> String {
    format!("{}{}", HN_ITEM_PAGE, id)
}

/// Top stories from the Hacker News Firebase API.
///
/// Two phases: one request for the ranked id list, then one request per id
/// for the story details, in id order.
pub struct HackerNewsSource {
    count: usize,
}

impl HackerNewsSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    fn top_story_ids(&self, http: &dyn HttpClient) -> TrendingResult<Vec<u64>> {
        let bytes = http.get(&HttpRequest::get(top_stories_url()))?;
        let ids: Vec<u64> = serde_json::from_slice(&bytes)?;
        Ok(ids.into_iter().take(self.count).collect())
    }

    /// `None` when the item was deleted and the API answers `null`
    fn story(&self, http: &dyn HttpClient, id: u64) -> TrendingResult<Option<HackerNewsItem>> {
        let bytes = http.get(&HttpRequest::get(item_url(id)))?;
        let item: Option<HackerNewsItem> = serde_json::from_slice(&bytes)?;
        if item.is_none() {
            debug!(id, "Skipping missing Hacker News item");
        }
        Ok(item)
    }
}

impl TrendSource for HackerNewsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::HackerNews
    }

    fn name(&self) -> String {
        "Hacker News".to_string()
    }

    fn fetch(&self, http: &dyn HttpClient) -> TrendingResult<Vec<TrendRecord>> {
        let ids = self.top_story_ids(http)?;

        let stories = ids
            .into_iter()
            .map(|id| self.story(http, id))
            .collect::<TrendingResult<Vec<_>>>()?;

        Ok(stories
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(i, item)| {
                let link = item
                    .url
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| item_page_url(item.id));

                TrendRecord::from(AggregatorStory {
                    rank: i as u32 + 1,
                    title: item.title.unwrap_or_else(|| "Untitled".to_string()),
                    link,
                    score: item.score,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TrendingError;
    use crate::sources::http::MockHttpClient;

    fn respond(http: &mut MockHttpClient, url: String, body: &'static str) {
        http.expect_get()
            .withf(move |req| req.url == url)
            .times(1)
            .returning(move |_| Ok(body.as_bytes().to_vec()));
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            top_stories_url(),
            "https://hacker-news.firebaseio.com/v0/topstories.json"
        );
        assert_eq!(
            item_url(8863),
            "https://hacker-news.firebaseio.com/v0/item/8863.json"
        );
        assert_eq!(item_page_url(8863), "https://news.ycombinator.com/item?id=8863");
    }

    #[test]
    fn test_fetch_falls_back_to_item_page() {
        let mut http = MockHttpClient::new();
        respond(&mut http, top_stories_url(), "[1, 2]");
        respond(
            &mut http,
            item_url(1),
            r#"{"id": 1, "title": "A", "url": null, "score": 5}"#,
        );
        respond(
            &mut http,
            item_url(2),
            r#"{"id": 2, "title": "B", "url": "http://x", "score": 9}"#,
        );

        let records = HackerNewsSource::new(10).fetch(&http).unwrap();

        assert_eq!(
            records,
            vec![
                TrendRecord::from(AggregatorStory {
                    rank: 1,
                    title: "A".to_string(),
                    link: "https://news.ycombinator.com/item?id=1".to_string(),
                    score: 5,
                }),
                TrendRecord::from(AggregatorStory {
                    rank: 2,
                    title: "B".to_string(),
                    link: "http://x".to_string(),
                    score: 9,
                }),
            ]
        );
    }

    #[test]
    fn test_fetch_only_requests_first_ids() {
        let mut http = MockHttpClient::new();
        respond(&mut http, top_stories_url(), "[30, 20, 10]");
        respond(
            &mut http,
            item_url(30),
            r#"{"id": 30, "title": "Ask HN: Anything", "score": 12, "type": "story"}"#,
        );

        let records = HackerNewsSource::new(1).fetch(&http).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].link(), "https://news.ycombinator.com/item?id=30");
    }

    #[test]
    fn test_fetch_skips_deleted_items_keeping_ranks_contiguous() {
        let mut http = MockHttpClient::new();
        respond(&mut http, top_stories_url(), "[1, 2, 3]");
        respond(
            &mut http,
            item_url(1),
            r#"{"id": 1, "title": "A", "url": "https://a.example", "score": 1}"#,
        );
        respond(&mut http, item_url(2), "null");
        respond(
            &mut http,
            item_url(3),
            r#"{"id": 3, "title": "C", "url": "https://c.example", "score": 3}"#,
        );

        let records = HackerNewsSource::new(10).fetch(&http).unwrap();

        let ranks: Vec<u32> = records.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![1, 2]);
        assert_eq!(records[1].title(), "C");
    }

    #[test]
    fn test_fetch_fails_when_detail_fails() {
        let mut http = MockHttpClient::new();
        respond(&mut http, top_stories_url(), "[1]");
        http.expect_get()
            .withf(|req| req.url == item_url(1))
            .returning(|req| {
                Err(TrendingError::HttpStatus {
                    url: req.url.clone(),
                    status: 500,
                })
            });

        assert!(HackerNewsSource::new(10).fetch(&http).is_err());
    }
}
