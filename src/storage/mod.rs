//! Storage layer for the cricket analytics store
//!
//! This module wraps the SQLite database, organized into:
//! - `models`: Row types for the seven tables
//! - `schema`: Database connection and schema management
//! - `functions`: SQL functions registered on each connection
//! - `queries`: Transactional upserts and player CRUD

pub mod functions;
pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::{CricketDatabase, Table};
