//! Error types for the core crate.
//!
//! Serialization itself is total and has no error type. The only fallible
//! operation here is turning a name into a [`Level`](crate::Level).

use thiserror::Error;

/// Errors raised when parsing severity levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The name is not one of the known levels.
    #[error("invalid log level '{given}', expected one of: error, warn, info, debug, trace")]
    Invalid {
        /// The rejected input
        given: String,
    },
}

/// Result type for level parsing.
pub type LevelResult<T> = Result<T, LevelError>;
