use feed_rs::parser;
use url::Url;

use crate::errors::{TrendingError, TrendingResult};
use crate::sources::http::{HttpClient, HttpRequest};

/// Title and first link of one syndication feed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
}

/// Fetch an RSS/Atom document and keep the first `count` entries.
pub fn fetch_entries(
    http: &dyn HttpClient,
    request: &HttpRequest,
    count: usize,
) -> TrendingResult<Vec<FeedEntry>> {
    let bytes = http.get(request)?;
    parse_entries(&bytes, count)
}

pub fn parse_entries(bytes: &[u8], count: usize) -> TrendingResult<Vec<FeedEntry>> {
    let parsed = parser::parse(bytes).map_err(|e| TrendingError::FeedParse(e.to_string()))?;

    let entries = parsed
        .entries
        .into_iter()
        .take(count)
        .map(|entry| FeedEntry {
            title: entry_title(entry.title.map(|t| t.content)),
            link: entry_link(entry.links.into_iter().map(|l| l.href), &entry.id),
        })
        .collect();

    Ok(entries)
}

/// Title text as published; blank titles become `Untitled`
fn entry_title(raw: Option<String>) -> String {
    raw.filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// First link, else the entry id when it is an absolute http(s) URL (an RSS permalink guid)
fn entry_link(links: impl IntoIterator<Item = String>, id: &str) -> String {
    if let Some(link) = links.into_iter().next() {
        return link;
    }

    match Url::parse(id) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => id.to_string(),
        _ => String::new(),
    }
}
