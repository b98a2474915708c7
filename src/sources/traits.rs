use crate::domain::{SourceKind, TrendRecord};
use crate::errors::TrendingResult;
use crate::sources::http::HttpClient;

pub trait TrendSource: Send + Sync {
    /// Identifies this source type
    fn kind(&self) -> SourceKind;

    /// Name used in logs and failure summaries
    fn name(&self) -> String;

    /// Fetch one batch of records, ranked from 1 in upstream order
    fn fetch(&self, http: &dyn HttpClient) -> TrendingResult<Vec<TrendRecord>>;
}
