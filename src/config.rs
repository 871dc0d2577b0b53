//! Runtime configuration resolved from environment variables.

use crate::error::{CricError, Result};
use std::path::PathBuf;

pub const API_KEY_ENV_VAR: &str = "RAPIDAPI_KEY";
pub const API_HOST_ENV_VAR: &str = "RAPIDAPI_HOST";
pub const BASE_URL_ENV_VAR: &str = "CRICBUZZ_BASE_URL";
pub const DB_PATH_ENV_VAR: &str = "CRICBUZZ_DB_PATH";

pub const DEFAULT_API_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` until a network command needs it; see [`Config::require_api_key`].
    pub api_key: Option<String>,
    pub api_host: String,
    pub base_url: String,
    pub db_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = non_empty_var(API_KEY_ENV_VAR);
        let api_host = non_empty_var(API_HOST_ENV_VAR).unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let base_url = non_empty_var(BASE_URL_ENV_VAR)
            .unwrap_or_else(|| format!("https://{}", api_host))
            .trim_end_matches('/')
            .to_string();
        let db_path = match non_empty_var(DB_PATH_ENV_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        Ok(Self {
            api_key,
            api_host,
            base_url,
            db_path,
        })
    }

    /// Override the database location (the `--db` flag).
    pub fn with_db_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.db_path = p;
        }
        self
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| CricError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `<data dir>/cricbuzz-stats/cricket.db`
pub fn default_database_path() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| CricError::DataDir {
            message: "Could not determine data directory".to_string(),
        })?;
    Ok(base.join("cricbuzz-stats").join("cricket.db"))
}
