use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trending")]
#[command(about = "Snapshot today's trending topics from search trends, Reddit, Hacker News and news feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every configured source, print the report and save JSON/CSV files
    Run {
        /// Print the report without writing any files
        #[arg(long)]
        dry_run: bool,

        /// Abort the whole run as soon as one source fails
        #[arg(long)]
        fail_fast: bool,

        /// Directory for trending_<date>.json and trending_<date>.csv
        #[arg(short, long, env = "TRENDING_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,
    },

    /// List the configured sources in fetch order
    Sources,
}
