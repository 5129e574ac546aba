//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Handoff timeout must be greater than zero")]
    InvalidHandoffTimeout,

    #[error("Topic minimum length must be greater than zero")]
    InvalidTopicMinimum,

    #[error("Topic minimum length {min} exceeds maximum {max}")]
    InvalidTopicBounds { min: usize, max: usize },

    #[error("Context value limit must be greater than 3")]
    InvalidContextValueLimit,

    #[error("New fact preview length must be greater than zero")]
    InvalidNewFactPreview,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
