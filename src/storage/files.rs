use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::TrendRecord;
use crate::errors::TrendingResult;
use crate::storage::csv_report::to_csv;
use crate::storage::json_report::to_json;
use crate::storage::traits::{ReportStore, SavedReport};

/// UTC calendar date used in the report header and file names
pub fn date_stamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

pub fn report_file_name(date: &str, extension: &str) -> String {
    format!("trending_{}.{}", date, extension)
}

/// Writes `trending_<date>.json` and `trending_<date>.csv` into one directory
pub struct FileReportStore {
    dir: PathBuf,
}

impl FileReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportStore for FileReportStore {
    fn save(&self, date: &str, records: &[TrendRecord]) -> TrendingResult<SavedReport> {
        // Both documents are built before either file is written
        let json = to_json(records)?;
        let csv = to_csv(records)?;

        fs::create_dir_all(&self.dir)?;

        let json_path = self.dir.join(report_file_name(date, "json"));
        fs::write(&json_path, json)?;
        info!(path = %json_path.display(), "Wrote JSON");

        let csv_path = self.dir.join(report_file_name(date, "csv"));
        fs::write(&csv_path, csv)?;
        info!(path = %csv_path.display(), "Wrote CSV");

        Ok(SavedReport {
            json_path,
            csv_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    use crate::domain::FeedArticle;

    fn article(rank: u32, title: &str) -> TrendRecord {
        FeedArticle {
            rank,
            source: "BBC".to_string(),
            title: title.to_string(),
            link: format!("https://bbc.co.uk/news/{}", rank),
        }
        .into()
    }

    #[test]
    fn test_date_stamp_is_utc_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 1).unwrap();
        assert_eq!(date_stamp(now), "2024-03-09");
        assert_eq!(report_file_name("2024-03-09", "csv"), "trending_2024-03-09.csv");
    }

    #[test]
    fn test_save_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileReportStore::new(temp_dir.path());

        let saved = store.save("2024-03-09", &[article(1, "One")]).unwrap();

        assert_eq!(saved.json_path, temp_dir.path().join("trending_2024-03-09.json"));
        assert_eq!(saved.csv_path, temp_dir.path().join("trending_2024-03-09.csv"));
        let csv = fs::read_to_string(&saved.csv_path).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_save_overwrites_same_day() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileReportStore::new(temp_dir.path());

        store
            .save("2024-03-09", &[article(1, "One"), article(2, "Two")])
            .unwrap();
        let saved = store.save("2024-03-09", &[article(1, "Only")]).unwrap();

        let json = fs::read_to_string(&saved.json_path).unwrap();
        assert!(json.contains("Only"));
        assert!(!json.contains("Two"));
    }

    #[test]
    fn test_failed_save_writes_neither_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let store = FileReportStore::new(&blocker);

        assert!(store.save("2024-03-09", &[article(1, "One")]).is_err());
        assert!(!temp_dir.path().join("trending_2024-03-09.json").exists());
        assert!(!temp_dir.path().join("trending_2024-03-09.csv").exists());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileReportStore::new(temp_dir.path().join("out/daily"));

        let saved = store.save("2024-03-09", &[]).unwrap();
        assert!(saved.json_path.exists());
        assert_eq!(store.dir(), temp_dir.path().join("out/daily").as_path());
    }
}
