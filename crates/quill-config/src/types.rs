//! Configuration types.
//!
//! The types here have no dependency on other Quill crates. Level names are
//! kept as strings and checked by [`validate`](crate::validate); the logger
//! converts them at the boundary. Every struct implements [`Default`] with
//! the same values as the embedded `defaults.toml`, so a bare `[section]`
//! header produces a working configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings shared by every logger.
    pub logging: LoggingSection,
    /// Category logger registry settings.
    pub registry: RegistrySection,
}

/// Logger output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Severity threshold (`"error"`, `"warn"`, `"info"`, `"debug"`,
    /// `"trace"`).
    pub level: String,
    /// Colorize whole lines by level.
    pub colorize: bool,
    /// Render JSON objects instead of text lines.
    pub json: bool,
    /// Capture call sites.
    pub callsites: bool,
    /// Field separator for text lines.
    pub separator: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            colorize: false,
            json: false,
            callsites: true,
            separator: " ".to_owned(),
        }
    }
}

/// Category logger registry settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySection {
    /// Maximum number of stored category loggers.
    pub limit: usize,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self { limit: 100 }
    }
}
