//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ADMIN_USER_IDS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL,
};
use crate::domain::AdminAllowList;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Loaded once; never changes for the lifetime of the process
    pub admin_ids: AdminAllowList,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("admin_ids", &self.admin_ids.len())
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_ids = env::var("ADMIN_USER_IDS")
            .unwrap_or_else(|_| DEFAULT_ADMIN_USER_IDS.to_string());

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            admin_ids: AdminAllowList::from_csv(&admin_ids),
        }
    }

    /// Override the database URL (e.g. from a CLI flag).
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            admin_ids: AdminAllowList::from_csv(DEFAULT_ADMIN_USER_IDS),
        }
    }
}
