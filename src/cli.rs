//! CLI argument definitions and parsing structures.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{ScrapeConfig, DEFAULT_TABLE_ID};

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[clap(
    name = "cfb-careers",
    about = "Fetch career college-football stat totals and merge them onto a roster CSV"
)]
pub struct Cli {
    /// Input roster CSV: local path or http(s) URL. Needs a "Player" or
    /// "Name" column.
    pub input: String,

    /// Output CSV path.
    #[clap(long, short, default_value = "stats_with_career.csv")]
    pub output: PathBuf,

    /// Stats table to pull the career row from.
    #[clap(long, default_value = DEFAULT_TABLE_ID)]
    pub table_id: String,

    /// Attempts per page before giving up on a rate-limited response.
    #[clap(long, default_value_t = 3)]
    pub max_attempts: u32,

    /// Seconds to pause between players.
    #[clap(long, default_value_t = 1)]
    pub delay: u64,

    /// Print extracted records as JSON to stdout instead of writing the CSV.
    #[clap(long)]
    pub json: bool,

    /// Skip TLS certificate verification when downloading the input roster.
    /// Scoped to that one download; scrape requests always verify.
    #[clap(long)]
    pub insecure_input: bool,

    /// Enable debug logging.
    #[clap(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig::default()
            .with_table_id(&self.table_id)
            .with_max_attempts(self.max_attempts)
            .with_player_pause(Duration::from_secs(self.delay))
    }
}
