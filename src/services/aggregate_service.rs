use tracing::{info, warn};

use crate::domain::TrendRecord;
use crate::errors::{FailureKind, TrendingResult};
use crate::sources::{HttpClient, SourceRegistry};

/// What to do when one source fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log, record the failure and continue with the next source
    #[default]
    Isolate,
    /// Abort the whole run on the first error
    FailFast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Everything collected in one run, in fetch order
#[derive(Debug, Default)]
pub struct Aggregation {
    pub records: Vec<TrendRecord>,
    pub failures: Vec<SourceFailure>,
}

pub struct AggregateService<H: HttpClient> {
    http: H,
    source_registry: SourceRegistry,
    policy: FailurePolicy,
}

impl<H: HttpClient> AggregateService<H> {
    pub fn new(http: H, source_registry: SourceRegistry, policy: FailurePolicy) -> Self {
        Self {
            http,
            source_registry,
            policy,
        }
    }

    /// Fetch every registered source in order and concatenate the results
    pub fn run(&self) -> TrendingResult<Aggregation> {
        let mut aggregation = Aggregation::default();

        for source in self.source_registry.sources() {
            let name = source.name();
            info!(source = %name, kind = %source.kind(), "Fetching");

            match source.fetch(&self.http) {
                Ok(records) if records.is_empty() => {
                    warn!(source = %name, "Source returned no records");
                    aggregation.failures.push(SourceFailure {
                        source: name,
                        kind: FailureKind::EmptyResult,
                        message: "no records returned".to_string(),
                    });
                }
                Ok(records) => {
                    info!(source = %name, count = records.len(), "Fetched");
                    aggregation.records.extend(records);
                }
                Err(e) if self.policy == FailurePolicy::FailFast => return Err(e),
                Err(e) => {
                    warn!(source = %name, error = %e, "Source failed, continuing");
                    aggregation.failures.push(SourceFailure {
                        source: name,
                        kind: e.failure_kind(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(aggregation)
    }
}
