//! Command implementations for the cricbuzz-stats CLI
//!
//! Handlers write to any `io::Write` so their output can be checked in tests.

pub mod analytics;
pub mod common;
pub mod fetch;
pub mod home;
pub mod ingest;
pub mod live;
pub mod players;
