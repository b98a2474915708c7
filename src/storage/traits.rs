use std::path::PathBuf;

use crate::domain::TrendRecord;
use crate::errors::TrendingResult;

/// Paths of the two files written for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

#[cfg_attr(test, mockall::automock)]
pub trait ReportStore: Send + Sync {
    /// Persist the run's records under the given `YYYY-MM-DD` stamp, replacing any earlier run of that day
    fn save(&self, date: &str, records: &[TrendRecord]) -> TrendingResult<SavedReport>;
}
