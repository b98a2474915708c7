use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrend {
    pub country: String,
    pub rank: u32,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub rank: u32,
    pub title: String,
    pub link: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorStory {
    pub rank: u32,
    pub title: String,
    pub link: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedArticle {
    pub rank: u32,
    pub source: String,
    pub title: String,
    pub link: String,
}

/// One normalized trending item. Every source produces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrendRecord {
    SearchTrend(SearchTrend),
    CommunityPost(CommunityPost),
    AggregatorStory(AggregatorStory),
    FeedArticle(FeedArticle),
}

impl TrendRecord {
    pub fn rank(&self) -> u32 {
        match self {
            TrendRecord::SearchTrend(t) => t.rank,
            TrendRecord::CommunityPost(p) => p.rank,
            TrendRecord::AggregatorStory(s) => s.rank,
            TrendRecord::FeedArticle(a) => a.rank,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TrendRecord::SearchTrend(t) => &t.title,
            TrendRecord::CommunityPost(p) => &p.title,
            TrendRecord::AggregatorStory(s) => &s.title,
            TrendRecord::FeedArticle(a) => &a.title,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            TrendRecord::SearchTrend(t) => &t.link,
            TrendRecord::CommunityPost(p) => &p.link,
            TrendRecord::AggregatorStory(s) => &s.link,
            TrendRecord::FeedArticle(a) => &a.link,
        }
    }

    pub fn score(&self) -> Option<i64> {
        match self {
            TrendRecord::CommunityPost(p) => Some(p.score),
            TrendRecord::AggregatorStory(s) => Some(s.score),
            TrendRecord::SearchTrend(_) | TrendRecord::FeedArticle(_) => None,
        }
    }

    /// Source tag shown in the console report
    pub fn source_name(&self) -> String {
        match self {
            TrendRecord::SearchTrend(t) => format!("Google Trends - {}", t.country),
            TrendRecord::CommunityPost(_) => "Reddit".to_string(),
            TrendRecord::AggregatorStory(_) => "HackerNews".to_string(),
            TrendRecord::FeedArticle(a) => a.source.clone(),
        }
    }
}

impl From<SearchTrend> for TrendRecord {
    fn from(value: SearchTrend) -> Self {
        TrendRecord::SearchTrend(value)
    }
}

impl From<CommunityPost> for TrendRecord {
    fn from(value: CommunityPost) -> Self {
        TrendRecord::CommunityPost(value)
    }
}

impl From<AggregatorStory> for TrendRecord {
    fn from(value: AggregatorStory) -> Self {
        TrendRecord::AggregatorStory(value)
    }
}

impl From<FeedArticle> for TrendRecord {
    fn from(value: FeedArticle) -> Self {
        TrendRecord::FeedArticle(value)
    }
}
