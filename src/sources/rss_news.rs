use crate::domain::{FeedArticle, SourceKind, TrendRecord};
use crate::errors::TrendingResult;
use crate::sources::http::{HttpClient, HttpRequest};
use crate::sources::syndication;
use crate::sources::traits::TrendSource;

/// Top stories from a news site's RSS feed, tagged with a display label
pub struct RssNewsSource {
    url: String,
    label: String,
    count: usize,
}

impl RssNewsSource {
    pub fn new(url: &str, label: &str, count: usize) -> Self {
        Self {
            url: url.to_string(),
            label: label.to_string(),
            count,
        }
    }
}

impl TrendSource for RssNewsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Rss
    }

    fn name(&self) -> String {
        self.label.clone()
    }

    fn fetch(&self, http: &dyn HttpClient) -> TrendingResult<Vec<TrendRecord>> {
        let request = HttpRequest::get(self.url.as_str());
        let entries = syndication::fetch_entries(http, &request, self.count)?;

        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                TrendRecord::from(FeedArticle {
                    rank: i as u32 + 1,
                    source: self.label.clone(),
                    title: entry.title,
                    link: entry.link,
                })
            })
            .collect())
    }
}
