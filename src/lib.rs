//! Cricbuzz Cricket Analytics Library
//!
//! Pulls series, teams, venues, matches and scorecards from the Cricbuzz API
//! (via RapidAPI) into a local SQLite database and runs a catalog of canned
//! analytics queries over it.
//!
//! ## Features
//!
//! - **API Client**: Authenticated requests with explicit success/failure outcomes
//! - **Ingestion Pipeline**: Idempotent, dependency-ordered upserts
//! - **Query Catalog**: 25 parameterless analytics queries
//! - **Player Maintenance**: Manual add, update and delete
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricbuzz_stats::{catalog, storage::CricketDatabase};
//!
//! # fn example() -> cricbuzz_stats::Result<()> {
//! let db = CricketDatabase::open(std::path::Path::new("cricket.db"))?;
//! let query = catalog::find_query("Q5")?;
//! let table = catalog::run_query(&db, query)?;
//! println!("{} rows", table.rows.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Network commands need a RapidAPI key:
//! ```bash
//! export RAPIDAPI_KEY=your-key
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod cricbuzz;
pub mod error;
pub mod ingest;
pub mod output;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{MatchFormat, MatchId, PlayerId, PlayerRole, SeriesId, TeamId, TossDecision, VenueId};
pub use error::{CricError, Result};
