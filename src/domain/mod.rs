pub mod record;
pub mod source;

pub use record::{AggregatorStory, CommunityPost, FeedArticle, SearchTrend, TrendRecord};
pub use source::{default_sources, SourceDescriptor, SourceKind, DEFAULT_COUNT};
