use crate::domain::SourceDescriptor;
use crate::errors::TrendingResult;
use crate::sources::traits::TrendSource;
use crate::sources::{
    google_trends::GoogleTrendsSource, hacker_news::HackerNewsSource, reddit::RedditSource,
    rss_news::RssNewsSource,
};

/// Ordered set of sources for one run. Fetch order is registration order.
pub struct SourceRegistry {
    sources: Vec<Box<dyn TrendSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Build one source per descriptor, preserving descriptor order
    pub fn from_descriptors(
        descriptors: &[SourceDescriptor],
        user_agent: &str,
    ) -> TrendingResult<Self> {
        let mut registry = Self::new();

        for descriptor in descriptors {
            descriptor.validate()?;
            registry.register(Self::build(descriptor, user_agent));
        }

        Ok(registry)
    }

    fn build(descriptor: &SourceDescriptor, user_agent: &str) -> Box<dyn TrendSource> {
        match descriptor {
            SourceDescriptor::GoogleTrends {
                geo,
                country,
                count,
            } => Box::new(GoogleTrendsSource::new(geo, country, *count)),
            SourceDescriptor::Reddit { subreddit, count } => {
                Box::new(RedditSource::new(subreddit, *count, user_agent))
            }
            SourceDescriptor::HackerNews { count } => Box::new(HackerNewsSource::new(*count)),
            SourceDescriptor::Rss { url, label, count } => {
                Box::new(RssNewsSource::new(url, label, *count))
            }
        }
    }

    pub fn register(&mut self, source: Box<dyn TrendSource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> impl Iterator<Item = &dyn TrendSource> {
        self.sources.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
