//! Logger error types.

use quill_config::ConfigError;
use quill_core::LevelError;
use thiserror::Error;

/// Errors raised while setting up loggers.
///
/// Logging calls themselves never fail; these only come from configuration.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A category name was empty.
    #[error("invalid logger category: {reason}")]
    InvalidCategory {
        /// Why the category was rejected
        reason: String,
    },

    /// Loading or validating configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A level name did not parse.
    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Result type for logger setup.
pub type LoggerResult<T> = Result<T, LoggerError>;
