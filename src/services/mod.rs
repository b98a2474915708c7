pub mod aggregate_service;
pub mod report_service;

pub use aggregate_service::{AggregateService, Aggregation, FailurePolicy, SourceFailure};
pub use report_service::{render_failures, render_report, ReportService};
