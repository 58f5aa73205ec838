//! Configuration error types

use thiserror::Error;

/// An environment variable was set but could not be parsed
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
