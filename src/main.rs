use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trending::cli::{Cli, Commands};
use trending::config::Config;
use trending::errors::TrendingResult;
use trending::services::{render_failures, AggregateService, FailurePolicy, ReportService};
use trending::sources::{ReqwestHttpClient, SourceRegistry};
use trending::storage::{date_stamp, FileReportStore};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> TrendingResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Run {
            dry_run,
            fail_fast,
            output_dir,
        } => cmd_run(&config, dry_run, fail_fast, &output_dir),
        Commands::Sources => cmd_sources(&config),
    }
}

fn cmd_run(config: &Config, dry_run: bool, fail_fast: bool, output_dir: &Path) -> TrendingResult<()> {
    let source_registry = SourceRegistry::from_descriptors(&config.sources, &config.user_agent)?;
    let http = ReqwestHttpClient::new(config.timeout)?;

    let policy = if fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::Isolate
    };

    info!(sources = source_registry.len(), ?policy, "Starting run");
    let aggregate_service = AggregateService::new(http, source_registry, policy);
    let aggregation = aggregate_service.run()?;

    let date = date_stamp(Utc::now());
    let report_service = ReportService::new(FileReportStore::new(output_dir));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let saved = report_service.publish(&mut out, &date, &aggregation.records, dry_run)?;
    render_failures(&mut out, &aggregation.failures)?;

    match saved {
        Some(saved) => writeln!(
            out,
            "\nTrending topics saved to JSON: {} and CSV: {}",
            saved.json_path.display(),
            saved.csv_path.display()
        )?,
        None => writeln!(
            out,
            "\nDry run complete. {} records, nothing saved.",
            aggregation.records.len()
        )?,
    }

    Ok(())
}

fn cmd_sources(config: &Config) -> TrendingResult<()> {
    println!("Configured sources:\n");
    for (i, source) in config.sources.iter().enumerate() {
        println!(
            "  {}. {} [{}] (top {})",
            i + 1,
            source.label(),
            source.kind(),
            source.count()
        );
    }

    Ok(())
}
