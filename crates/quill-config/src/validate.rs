//! Post-merge configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Level names accepted by `logging.level`, most severe first.
pub const KNOWN_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Validate a fully merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_logging(config)?;
    validate_registry(config)?;
    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let level = config.logging.level.to_lowercase();
    if !KNOWN_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: format!(
                "unsupported log level '{}'; expected one of: {}",
                config.logging.level,
                KNOWN_LEVELS.join(", ")
            ),
        });
    }

    if config.logging.separator.contains(['\n', '\r']) {
        return Err(ConfigError::ValidationError {
            field: "logging.separator".to_owned(),
            message: "separator must not contain a line break".to_owned(),
        });
    }

    Ok(())
}

fn validate_registry(config: &Config) -> ConfigResult<()> {
    if config.registry.limit == 0 {
        return Err(ConfigError::ValidationError {
            field: "registry.limit".to_owned(),
            message: "limit must be at least 1".to_owned(),
        });
    }
    Ok(())
}
