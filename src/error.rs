//! Error types for the Cricbuzz stats CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, CricError>;

#[derive(Error, Debug)]
pub enum CricError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to fetch {label}: {reason}")]
    Fetch { label: String, reason: String },

    #[error("Malformed {context} payload: {message}")]
    Payload { context: String, message: String },

    #[error("Cannot run {stage} stage: no {missing} in the database yet")]
    StageOutOfOrder { stage: String, missing: String },

    #[error("{referenced_by} references unknown {entity} {id}")]
    DanglingReference {
        entity: String,
        id: i64,
        referenced_by: String,
    },

    #[error("Unknown analytics query: {query}")]
    UnknownQuery { query: String },

    #[error("Invalid player role: {role}")]
    InvalidRole { role: String },

    #[error("Invalid ingestion stage: {stage}")]
    InvalidStage { stage: String },

    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Analytics query {query} is not read-only")]
    WriteQuery { query: String },

    #[error("Invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Storage location error: {message}")]
    DataDir { message: String },
}

impl CricError {
    /// Build a payload error for the named API response.
    pub fn payload(context: impl Into<String>, message: impl ToString) -> Self {
        CricError::Payload {
            context: context.into(),
            message: message.to_string(),
        }
    }
}
