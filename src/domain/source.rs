use serde::{Deserialize, Serialize};

use crate::errors::{TrendingError, TrendingResult};

pub const DEFAULT_COUNT: usize = 10;

fn default_count() -> usize {
    DEFAULT_COUNT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    GoogleTrends,
    Reddit,
    HackerNews,
    Rss,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::GoogleTrends => "google_trends",
            SourceKind::Reddit => "reddit",
            SourceKind::HackerNews => "hacker_news",
            SourceKind::Rss => "rss",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subreddit names are non-empty runs of ASCII letters, digits and underscores
fn is_subreddit_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A configured source: which adapter to run and with what parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceDescriptor {
    GoogleTrends {
        geo: String,
        country: String,
        #[serde(default = "default_count")]
        count: usize,
    },
    Reddit {
        subreddit: String,
        #[serde(default = "default_count")]
        count: usize,
    },
    HackerNews {
        #[serde(default = "default_count")]
        count: usize,
    },
    Rss {
        url: String,
        label: String,
        #[serde(default = "default_count")]
        count: usize,
    },
}

impl SourceDescriptor {
    pub fn google_trends(geo: &str, country: &str) -> Self {
        SourceDescriptor::GoogleTrends {
            geo: geo.to_string(),
            country: country.to_string(),
            count: DEFAULT_COUNT,
        }
    }

    pub fn reddit(subreddit: &str, count: usize) -> Self {
        SourceDescriptor::Reddit {
            subreddit: subreddit.to_string(),
            count,
        }
    }

    pub fn hacker_news(count: usize) -> Self {
        SourceDescriptor::HackerNews { count }
    }

    pub fn rss(url: &str, label: &str, count: usize) -> Self {
        SourceDescriptor::Rss {
            url: url.to_string(),
            label: label.to_string(),
            count,
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            SourceDescriptor::GoogleTrends { .. } => SourceKind::GoogleTrends,
            SourceDescriptor::Reddit { .. } => SourceKind::Reddit,
            SourceDescriptor::HackerNews { .. } => SourceKind::HackerNews,
            SourceDescriptor::Rss { .. } => SourceKind::Rss,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            SourceDescriptor::GoogleTrends { count, .. }
            | SourceDescriptor::Reddit { count, .. }
            | SourceDescriptor::HackerNews { count }
            | SourceDescriptor::Rss { count, .. } => *count,
        }
    }

    /// Human-readable name used in logs and failure summaries
    pub fn label(&self) -> String {
        match self {
            SourceDescriptor::GoogleTrends { geo, .. } => format!("Google Trends ({})", geo),
            SourceDescriptor::Reddit { subreddit, .. } => format!("r/{}", subreddit),
            SourceDescriptor::HackerNews { .. } => "Hacker News".to_string(),
            SourceDescriptor::Rss { label, .. } => label.clone(),
        }
    }

    pub fn validate(&self) -> TrendingResult<()> {
        if self.count() == 0 {
            return Err(TrendingError::InvalidSource(format!(
                "{}: count must be at least 1",
                self.label()
            )));
        }

        match self {
            SourceDescriptor::GoogleTrends { geo, .. } if geo.trim().is_empty() => Err(
                TrendingError::InvalidSource("google_trends: geo is empty".to_string()),
            ),
            SourceDescriptor::Reddit { subreddit, .. } if !is_subreddit_name(subreddit) => {
                Err(TrendingError::InvalidSource(format!(
                    "reddit: invalid subreddit name {:?}",
                    subreddit
                )))
            }
            SourceDescriptor::Rss { url, .. } => url::Url::parse(url)
                .map(|_| ())
                .map_err(|e| TrendingError::InvalidUrl(format!("{}: {}", url, e))),
            _ => Ok(()),
        }
    }
}

/// Built-in source list, fetched in this order.
pub fn default_sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::google_trends("US", "United States"),
        SourceDescriptor::google_trends("IN", "India"),
        SourceDescriptor::reddit("news", DEFAULT_COUNT),
        SourceDescriptor::reddit("worldnews", DEFAULT_COUNT),
        SourceDescriptor::reddit("india", DEFAULT_COUNT),
        SourceDescriptor::hacker_news(DEFAULT_COUNT),
        SourceDescriptor::rss("http://feeds.bbci.co.uk/news/rss.xml", "BBC", DEFAULT_COUNT),
        SourceDescriptor::rss("https://news.yahoo.com/rss/", "Yahoo News", DEFAULT_COUNT),
        SourceDescriptor::rss(
            "https://news.google.com/rss?hl=en-US&gl=US&ceid=US:en",
            "Google News US",
            DEFAULT_COUNT,
        ),
        SourceDescriptor::rss(
            "https://news.google.com/rss?hl=en-IN&gl=IN&ceid=IN:en",
            "Google News India",
            DEFAULT_COUNT,
        ),
    ]
}
