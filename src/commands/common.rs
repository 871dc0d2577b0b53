//! Shared state for command handlers.

use crate::{config::Config, cricbuzz::ApiClient, storage::CricketDatabase, Result};
use log::debug;

/// Resources a command needs: configuration and an open store.
///
/// The API client is built on demand so that local-only commands run without
/// an API key.
pub struct CommandContext {
    pub config: Config,
    pub db: CricketDatabase,
}

impl CommandContext {
    pub fn open(config: Config) -> Result<Self> {
        debug!("Opening database at {}", config.db_path.display());
        let db = CricketDatabase::open(&config.db_path)?;
        Ok(Self { config, db })
    }

    #[cfg(test)]
    pub(crate) fn with_database(config: Config, db: CricketDatabase) -> Self {
        Self { config, db }
    }

    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::from_config(&self.config)
    }
}
