use serde::Deserialize;

use crate::domain::{CommunityPost, SourceKind, TrendRecord};
use crate::errors::TrendingResult;
use crate::sources::http::{HttpClient, HttpRequest};
use crate::sources::traits::TrendSource;

pub const REDDIT_API_ROOT: &str = "https://www.reddit.com";
pub const REDDIT_LINK_ROOT: &str = "https://reddit.com";

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    title: String,
    permalink: String,
    #[serde(default)]
    score: i64,
}

/// Hot posts of one subreddit via the public `hot.json` listing
pub struct RedditSource {
    subreddit: String,
    count: usize,
    user_agent: String,
}

impl RedditSource {
    pub fn new(subreddit: &str, count: usize, user_agent: &str) -> Self {
        Self {
            subreddit: subreddit.to_string(),
            count,
            user_agent: user_agent.to_string(),
        }
    }

    pub fn listing_url(&self) -> String {
        format!(
            "{}/r/{}/hot.json?limit={}",
            REDDIT_API_ROOT, self.subreddit, self.count
        )
    }

    /// Join the site root and a post permalink with exactly one separator
    pub fn permalink_url(permalink: &str) -> String {
        format!(
            "{}/{}",
            REDDIT_LINK_ROOT.trim_end_matches('/'),
            permalink.trim_start_matches('/')
        )
    }

    fn records_from_bytes(&self, bytes: &[u8]) -> TrendingResult<Vec<TrendRecord>> {
        let listing: Listing = serde_json::from_slice(bytes)?;

        Ok(listing
            .data
            .children
            .into_iter()
            .take(self.count)
            .enumerate()
            .map(|(i, child)| {
                TrendRecord::from(CommunityPost {
                    rank: i as u32 + 1,
                    title: child.data.title,
                    link: Self::permalink_url(&child.data.permalink),
                    score: child.data.score,
                })
            })
            .collect())
    }
}

impl TrendSource for RedditSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Reddit
    }

    fn name(&self) -> String {
        format!("r/{}", self.subreddit)
    }

    fn fetch(&self, http: &dyn HttpClient) -> TrendingResult<Vec<TrendRecord>> {
        let request = HttpRequest::get(self.listing_url()).with_user_agent(&self.user_agent);
        let bytes = http.get(&request)?;
        self.records_from_bytes(&bytes)
    }
}
