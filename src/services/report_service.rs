use std::io::Write;

use crate::domain::TrendRecord;
use crate::errors::TrendingResult;
use crate::services::aggregate_service::SourceFailure;
use crate::storage::{ReportStore, SavedReport};

/// Write the human-readable report: a dated header, then a tagged title line
/// and a link line per record, in aggregation order.
pub fn render_report<W: Write>(
    out: &mut W,
    date: &str,
    records: &[TrendRecord],
) -> std::io::Result<()> {
    writeln!(
        out,
        "\n================ Trending Topics ({}) ================\n",
        date
    )?;

    for record in records {
        write!(out, "[{}] {}. {}", record.source_name(), record.rank(), record.title())?;
        if let Some(score) = record.score() {
            write!(out, " (Score: {})", score)?;
        }
        writeln!(out)?;
        writeln!(out, "Link: {}\n", record.link())?;
    }

    Ok(())
}

pub fn render_failures<W: Write>(out: &mut W, failures: &[SourceFailure]) -> std::io::Result<()> {
    if failures.is_empty() {
        return Ok(());
    }

    writeln!(out, "{} source(s) contributed no records:", failures.len())?;
    for failure in failures {
        writeln!(out, "  ! {} [{}]: {}", failure.source, failure.kind, failure.message)?;
    }

    Ok(())
}

/// Renders a run to the console and hands it to a [`ReportStore`]
pub struct ReportService<S: ReportStore> {
    store: S,
}

impl<S: ReportStore> ReportService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns `None` on a dry run, when nothing is saved
    pub fn publish<W: Write>(
        &self,
        out: &mut W,
        date: &str,
        records: &[TrendRecord],
        dry_run: bool,
    ) -> TrendingResult<Option<SavedReport>> {
        render_report(out, date, records)?;

        if dry_run {
            return Ok(None);
        }

        let saved = self.store.save(date, records)?;
        Ok(Some(saved))
    }
}
