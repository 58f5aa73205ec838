//! API server configuration

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use bookshelf_shared_config::{CommonConfig, DatabaseConfig, Environment};

/// Port the GraphQL server listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 4000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Interface to bind (default: 0.0.0.0)
    pub host: IpAddr,

    /// Server port (default: 4000, `0` picks an ephemeral port)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;

        Ok(Self {
            common,

            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()
                .context("Invalid HOST value")?,

            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("Invalid PORT value")?,
        })
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("HOST", None::<&str>),
                ("PORT", None),
                ("ENVIRONMENT", None),
                ("DATABASE_URL", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.port, DEFAULT_PORT);
                assert_eq!(config.bind_addr().to_string(), "0.0.0.0:4000");
                assert_eq!(config.database().url, "sqlite://mydb.sqlite");
                assert_eq!(config.environment(), Environment::Development);
            },
        );
    }

    #[test]
    fn test_ephemeral_port() {
        temp_env::with_vars([("PORT", Some("0")), ("HOST", Some("127.0.0.1"))], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr().to_string(), "127.0.0.1:0");
        });
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_var("PORT", Some("forty"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("Invalid PORT value"));
        });
    }

    #[test]
    fn test_production_keeps_default_store() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("production")),
                ("DATABASE_URL", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment(), Environment::Production);
                assert_eq!(config.database().url, "sqlite://mydb.sqlite");
            },
        );
    }
}
