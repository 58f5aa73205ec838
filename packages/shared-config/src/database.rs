//! Database configuration types

use crate::{get_env_or_default, parse_env, ConfigResult};

/// Store file used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://mydb.sqlite";

/// SQLite store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL (e.g., sqlite://mydb.sqlite or sqlite::memory:)
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load database configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            url: get_env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5)?,
            connect_timeout_secs: parse_env("DATABASE_CONNECT_TIMEOUT", 30)?,
        })
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Private in-memory store.
    ///
    /// Every SQLite memory connection is its own database, so the pool is
    /// capped at a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}
