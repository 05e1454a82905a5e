//! Batch orchestration: drive the resolve -> fetch -> locate -> normalize ->
//! extract pipeline across a list of player names, collecting successes and
//! per-player failures without ever aborting the batch.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::fetch::{FetchOutcome, Fetcher, PageTransport};
use crate::resolve;
use crate::sref::{career, locate, table};


/// One player's extracted career stats, ready to merge onto the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player_name: String,
    pub fields: Vec<(String, Option<f64>)>,
}

/// A player that every candidate slug failed for, with a human-readable
/// account of what happened per candidate.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub player_name: String,
    pub reason: String,
}

/// Outcome of one batch run. `records` preserves input order; one entry per
/// unique input name that succeeded.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<PlayerRecord>,
    pub failures: Vec<BatchFailure>,
}

pub struct Orchestrator<T: PageTransport> {
    fetcher: Fetcher<T>,
    config: ScrapeConfig,
}

impl<T: PageTransport> Orchestrator<T> {
    pub fn new(transport: T, config: ScrapeConfig) -> Self {
        Self {
            fetcher: Fetcher::new(transport, &config),
            config,
        }
    }

    /// Process players sequentially, one at a time, pausing between players.
    ///
    /// Duplicate names are fetched once. A player whose every candidate slug
    /// fails is recorded in `failures` and the batch moves on.
    pub async fn run(&self, names: &[String]) -> BatchReport {
        let mut report = BatchReport::default();
        let mut seen = HashSet::new();
        let unique: Vec<&String> = names
            .iter()
            .filter(|n| seen.insert(n.to_ascii_lowercase()))
            .collect();

        for (i, name) in unique.iter().enumerate() {
            if i > 0 {
                // Fixed sequencing rule, not tuning: back-to-back page hits
                // trip the site's anti-scraping defenses.
                tokio::time::sleep(self.config.player_pause).await;
            }
            info!(player = %name, "fetching career stats");
            match self.scrape_player(name).await {
                Ok(record) => report.records.push(record),
                Err(err) => {
                    warn!(player = %name, %err, "player skipped");
                    report.failures.push(BatchFailure {
                        player_name: name.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        report
    }

    /// Try every candidate slug in priority order; first full extraction
    /// wins.
    async fn scrape_player(&self, name: &str) -> crate::Result<PlayerRecord> {
        let mut attempts = Vec::new();
        for slug in resolve::candidates(name) {
            match self.try_candidate(&slug).await {
                Ok(fields) => {
                    debug!(player = name, slug, "candidate matched");
                    return Ok(PlayerRecord {
                        player_name: name.to_string(),
                        fields,
                    });
                }
                Err(err) => attempts.push(format!("{slug}: {err}")),
            }
        }
        Err(ScrapeError::AllCandidatesExhausted {
            name: name.to_string(),
            detail: attempts.join("; "),
        })
    }

    async fn try_candidate(&self, slug: &str) -> crate::Result<Vec<(String, Option<f64>)>> {
        let url = self.config.player_url(slug);
        info!(%url, "GET");
        let body = match self.fetcher.fetch(&url).await? {
            FetchOutcome::Success(body) => body,
            FetchOutcome::Retryable(status) => {
                return Err(ScrapeError::TransientHttp { status })
            }
            FetchOutcome::Failed(status) => return Err(ScrapeError::HardHttp { status }),
        };
        let raw = locate::locate(&body, &self.config.table_id)?;
        let normalized = table::normalize(raw, &self.config.header_junk);
        let row = career::extract(&normalized, &self.config.table_id)?;
        Ok(row.fields)
    }
}
