//! Error types for the viewpoint domain.

use thiserror::Error;

/// The narrow "bad input" classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Message object is missing")]
    MissingMessage,

    #[error("Message content is empty")]
    EmptyContent,
}

/// Failure inside a step handler. Never leaves the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StepError {
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }
}

/// Reasons a captured topic is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("Topic is empty")]
    Empty,

    #[error("Topic has {actual} characters, minimum is {min}")]
    TooShort { actual: usize, min: usize },

    #[error("Topic has {actual} characters, maximum is {max}")]
    TooLong { actual: usize, max: usize },
}
