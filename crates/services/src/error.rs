//! Shared error types for the services crate.

use thiserror::Error;

/// Raw answer text that cannot be counted as an attempt.
///
/// Recoverable: the session is left untouched and the user can retype.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInput {
    #[error("please type your answer")]
    Empty,
    #[error("please enter a whole number (got {raw:?})")]
    NotANumber { raw: String },
    #[error("{raw} is too large to be an answer")]
    TooLarge { raw: String },
    #[error("{value} is outside the accepted range of ±{bound}")]
    OutOfRange { value: i64, bound: i64 },
}

/// Errors emitted by the practice workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question is waiting for an answer")]
    NoActiveQuestion,
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

/// Errors emitted while validating `PracticeSettings`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("history limit must be > 0")]
    InvalidHistoryLimit,
    #[error("answer bound must be >= 0 (got {0})")]
    InvalidAnswerBound(i64),
}
