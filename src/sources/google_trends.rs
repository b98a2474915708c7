use url::Url;

use crate::domain::{SearchTrend, SourceKind, TrendRecord};
use crate::errors::{TrendingError, TrendingResult};
use crate::sources::http::{HttpClient, HttpRequest};
use crate::sources::syndication;
use crate::sources::traits::TrendSource;

pub const TRENDS_RSS_URL: &str = "https://trends.google.com/trending/rss";

/// Daily search trends for one region, read from the public trends RSS feed
pub struct GoogleTrendsSource {
    geo: String,
    country: String,
    count: usize,
}

impl GoogleTrendsSource {
    pub fn new(geo: &str, country: &str, count: usize) -> Self {
        Self {
            geo: geo.to_string(),
            country: country.to_string(),
            count,
        }
    }

    pub fn feed_url(&self) -> TrendingResult<String> {
        Url::parse_with_params(TRENDS_RSS_URL, &[("geo", self.geo.as_str())])
            .map(|u| u.to_string())
            .map_err(|e| TrendingError::InvalidUrl(e.to_string()))
    }
}

impl TrendSource for GoogleTrendsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::GoogleTrends
    }

    fn name(&self) -> String {
        format!("Google Trends ({})", self.geo)
    }

    fn fetch(&self, http: &dyn HttpClient) -> TrendingResult<Vec<TrendRecord>> {
        let request = HttpRequest::get(self.feed_url()?);
        let entries = syndication::fetch_entries(http, &request, self.count)?;

        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                TrendRecord::from(SearchTrend {
                    country: self.country.clone(),
                    rank: i as u32 + 1,
                    title: entry.title,
                    link: entry.link,
                })
            })
            .collect())
    }
}
