//! cfb-careers: career stat retrieval for college-football players.
//!
//! Resolves a player name to candidate sports-reference.com page slugs,
//! fetches each page with bounded retries, locates the stats table whether
//! it is in the live DOM or hidden inside an HTML comment, isolates the
//! "Career" totals row, and merges the numeric fields onto an input roster
//! CSV.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cfb_careers::{
//!     batch::Orchestrator,
//!     config::ScrapeConfig,
//!     fetch::HttpTransport,
//! };
//!
//! # async fn example() -> cfb_careers::Result<()> {
//! let config = ScrapeConfig::default();
//! let transport = HttpTransport::new(&config.user_agent)?;
//! let orchestrator = Orchestrator::new(transport, config);
//! let report = orchestrator.run(&["Jane Doe".to_string()]).await;
//! for record in &report.records {
//!     println!("{}: {} stats", record.player_name, record.fields.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod resolve;
pub mod roster;
pub mod sref;

// Re-export commonly used types
pub use batch::{BatchReport, Orchestrator, PlayerRecord};
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use fetch::{FetchOutcome, HttpTransport, PageTransport};
pub use roster::Roster;
