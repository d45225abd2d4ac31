//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `Config`
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// One or more values are out of range
    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

/// A single rejected configuration value
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("{field} must be greater than zero")]
    ZeroDimension { field: &'static str },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
