//! Error types for lazy sequence operations.
//!
//! Malformed combinator configuration fails fast at call time; natural
//! exhaustion is a stream terminator, never an error.

use thiserror::Error;

/// Main error type for lazy sequence operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// `islice` was configured with a step of zero
    #[error("islice step must be 1 or greater")]
    ZeroStep,
    /// A reduction required at least one element
    #[error("reduction over an empty sequence")]
    EmptyInput,
    /// Custom error with message
    #[error("sequence error: {0}")]
    Custom(String),
}

/// Result type for lazy sequence operations
pub type SeqResult<T> = Result<T, SeqError>;
