pub mod traits;
pub mod json_report;
pub mod csv_report;
pub mod files;

pub use traits::{ReportStore, SavedReport};
pub use files::{date_stamp, report_file_name, FileReportStore};
pub use json_report::{from_json, to_json};
pub use csv_report::{to_csv, CSV_HEADER};
