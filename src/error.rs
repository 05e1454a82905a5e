//! Error types for the cfb-careers scraper.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;


#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP {status} (transient), retry budget exhausted")]
    TransientHttp { status: u16 },

    #[error("HTTP {status}")]
    HardHttp { status: u16 },

    #[error("no <table id=\"{table_id}\"> found, live or comment-embedded")]
    TableNotFound { table_id: String },

    #[error("table \"{table_id}\" has no Career row")]
    RowNotFound { table_id: String },

    #[error("no page matched for {name}: {detail}")]
    AllCandidatesExhausted { name: String, detail: String },

    #[error("invalid CSS selector: {message}")]
    Selector { message: String },

    #[error("roster error: {message}")]
    Roster { message: String },

    #[error("no career data fetched for any player")]
    NoData,
}

impl From<anyhow::Error> for ScrapeError {
    fn from(err: anyhow::Error) -> Self {
        ScrapeError::Roster {
            message: err.to_string(),
        }
    }
}
