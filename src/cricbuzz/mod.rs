//! Cricbuzz API access: endpoint catalog, HTTP client and payload types.

pub mod endpoints;
pub mod http;
pub mod types;

pub use endpoints::Endpoint;
pub use http::{ApiClient, FetchFailure, FetchOutcome};
