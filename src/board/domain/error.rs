//! Error types for task board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The point reward is not a positive integer.
    #[error("invalid point value {0}, expected a positive integer")]
    InvalidPoints(u32),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,
}

/// Error returned while parsing task kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task kind: {0}")]
pub struct ParseTaskKindError(pub String);

/// Error returned while parsing completion statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown completion status: {0}")]
pub struct ParseCompletionStatusError(pub String);
