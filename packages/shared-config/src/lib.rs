//! Shared configuration types for Bookshelf services
//!
//! Every resolver variant is a separate binary; this crate keeps their
//! environment handling identical.

mod database;
mod error;

pub use database::{DatabaseConfig, DEFAULT_DATABASE_URL};
pub use error::{ConfigError, ConfigResult};

use std::env;

/// Settings every variant reads the same way
#[derive(Debug, Clone)]
pub struct CommonConfig {
    pub database: DatabaseConfig,

    /// From `ENVIRONMENT`, development when unset or unrecognised
    pub environment: Environment,

    /// From `RUST_LOG`, then `LOG_LEVEL`, then `info`
    pub log_level: String,
}

/// Deployment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CommonConfig {
    pub fn from_env() -> ConfigResult<Self> {
        let environment = env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let log_level = env::var("RUST_LOG")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            environment,
            log_level,
        })
    }
}

/// `name`, or `default` when unset
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// `name` parsed as `T`, or `default` when unset
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
