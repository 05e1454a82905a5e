//! Page fetching with bounded retries on transient HTTP failures.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::config::ScrapeConfig;
use crate::error::Result;


/// One HTTP response, reduced to what the pipeline inspects.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

/// Terminal outcome of fetching one URL, after retries.
///
/// An explicit sum type rather than an error: the orchestrator inspects it
/// to decide whether to move on to the next candidate slug.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// HTTP 200 with the page body.
    Success(String),
    /// 429/503 persisted past the retry budget.
    Retryable(u16),
    /// Any other non-200 status; the candidate is abandoned immediately.
    Failed(u16),
}

/// Transport seam so tests can substitute a canned-response stub for the
/// real network.
pub trait PageTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<PageResponse>> + Send;
}

/// Real transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }
}

impl PageTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<PageResponse> {
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(PageResponse { status, body })
    }
}

/// Fetches one URL at a time, retrying 429/503 up to `max_attempts` with a
/// linearly growing sleep between attempts.
#[derive(Debug)]
pub struct Fetcher<T: PageTransport> {
    transport: T,
    max_attempts: u32,
    retry_backoff: Duration,
}

impl<T: PageTransport> Fetcher<T> {
    pub fn new(transport: T, config: &ScrapeConfig) -> Self {
        Self {
            transport,
            max_attempts: config.max_attempts.max(1),
            retry_backoff: config.retry_backoff,
        }
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Sleep before retry number `attempt` (1-based): `backoff * attempt`,
    /// so successive waits grow strictly.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.retry_backoff * attempt
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        for attempt in 1..=self.max_attempts {
            debug!(url, attempt, "GET");
            let res = self.transport.get(url).await?;
            match res.status {
                200 => return Ok(FetchOutcome::Success(res.body)),
                status @ (429 | 503) => {
                    if attempt == self.max_attempts {
                        return Ok(FetchOutcome::Retryable(status));
                    }
                    let delay = self.backoff_delay(attempt);
                    warn!(url, status, attempt, ?delay, "transient HTTP status, backing off");
                    tokio::time::sleep(delay).await;
                }
                status => return Ok(FetchOutcome::Failed(status)),
            }
        }
        unreachable!("max_attempts is clamped to >= 1")
    }
}
