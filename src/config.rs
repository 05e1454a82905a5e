//! Scrape configuration: URL template, table id, retry pacing, header cleanup.

use std::time::Duration;

/// Base URL for player pages. Candidate slugs are interpolated into
/// `{base}/{slug}.html`.
pub const PLAYER_URL_BASE: &str = "https://www.sports-reference.com/cfb/players";

/// Table the career totals row is pulled from, unless overridden.
pub const DEFAULT_TABLE_ID: &str = "rushing_standard";

/// Static browser-like identification sent with every page request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Knobs for one scrape run.
///
/// The junk character set exists because the source site's headers carry
/// footnote markers and mis-decoded bytes that vary over time; keeping the
/// set here rather than in a regex makes markup drift a config change.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub table_id: String,
    pub user_agent: String,
    /// Total attempts per URL, including the first (minimum 1).
    pub max_attempts: u32,
    /// Linear backoff base: sleep `base * attempt` after a transient failure.
    pub retry_backoff: Duration,
    /// Mandatory pause between players. Part of the design, not tuning:
    /// the source site rate-limits aggressive clients.
    pub player_pause: Duration,
    /// Characters stripped from header cells during normalization.
    pub header_junk: Vec<char>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: PLAYER_URL_BASE.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            user_agent: USER_AGENT.to_string(),
            max_attempts: 3,
            retry_backoff: Duration::from_secs(2),
            player_pause: Duration::from_secs(1),
            header_junk: vec!['*', '#', '\u{00a0}', '\u{00c2}', '\u{fffd}'],
        }
    }
}

impl ScrapeConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_table_id(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = table_id.into();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_player_pause(mut self, pause: Duration) -> Self {
        self.player_pause = pause;
        self
    }

    /// Full page URL for a candidate slug.
    pub fn player_url(&self, slug: &str) -> String {
        format!("{}/{}.html", self.base_url, slug)
    }
}
