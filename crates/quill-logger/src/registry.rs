//! Bounded registry of category loggers.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use quill_config::Config;
use tracing::debug;

use crate::error::{LoggerError, LoggerResult};
use crate::logger::Logger;
use crate::options::LoggerOptions;
use crate::transport::{StdoutTransport, Transport};

/// Number of loggers kept by default.
pub const DEFAULT_LIMIT: usize = 100;

/// Category → logger store with FIFO eviction.
///
/// New loggers start from the registry's base options and share its
/// transport. When the store is full, the logger created first is dropped
/// from the store; handles already given out keep working.
pub struct Loggers {
    base: LoggerOptions,
    transport: Arc<dyn Transport>,
    limit: usize,
    entries: Mutex<VecDeque<Arc<Logger>>>,
}

impl Loggers {
    /// Registry with default options writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: LoggerOptions::default(),
            transport: Arc::new(StdoutTransport),
            limit: DEFAULT_LIMIT,
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Registry configured from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured level does not parse.
    pub fn from_config(config: &Config) -> LoggerResult<Self> {
        Ok(Self::new()
            .with_options(LoggerOptions::from_config(config)?)
            .with_limit(config.registry.limit))
    }

    /// Registry configured from the layered configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Config`] if a configuration file is malformed,
    /// fails validation, or the home directory cannot be found.
    pub fn load(workspace_root: Option<&Path>) -> LoggerResult<Self> {
        let resolved = Config::load(workspace_root)?;
        Self::from_config(&resolved.config)
    }

    /// [`load`](Self::load) with an explicit home directory.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_home(workspace_root: Option<&Path>, home_dir: &Path) -> LoggerResult<Self> {
        let resolved = Config::load_with_home(workspace_root, home_dir)?;
        Self::from_config(&resolved.config)
    }

    /// Set the base options for loggers created from now on.
    #[must_use]
    pub fn with_options(mut self, options: LoggerOptions) -> Self {
        self.base = options;
        self
    }

    /// Set the transport for loggers created from now on.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Set the capacity. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Stored logger for `category`, or a new one that is stored first.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidCategory`] for an empty category.
    pub fn get(&self, category: &str) -> LoggerResult<Arc<Logger>> {
        if category.trim().is_empty() {
            return Err(LoggerError::InvalidCategory {
                reason: "category must not be empty".to_owned(),
            });
        }

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = entries.iter().find(|l| l.category() == category) {
            return Ok(Arc::clone(logger));
        }

        while entries.len() >= self.limit {
            if let Some(evicted) = entries.pop_front() {
                debug!(category = evicted.category(), "evicting logger");
            }
        }

        let logger = Arc::new(
            Logger::new(category)
                .with_options(self.base.clone())
                .with_transport(Arc::clone(&self.transport)),
        );
        entries.push_back(Arc::clone(&logger));
        Ok(logger)
    }

    /// Whether a logger for `category` is stored.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|l| l.category() == category)
    }

    /// Remove the logger for `category`, returning it.
    pub fn remove(&self, category: &str) -> Option<Arc<Logger>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let index = entries.iter().position(|l| l.category() == category)?;
        entries.remove(index)
    }

    /// Drop every stored logger.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of stored loggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Loggers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Loggers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loggers")
            .field("base", &self.base)
            .field("limit", &self.limit)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use quill_core::Level;

    use super::*;

    #[test]
    fn test_get_returns_stored_logger() {
        let loggers = Loggers::new();
        let a = loggers.get("db").unwrap();
        let b = loggers.get("db").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loggers.len(), 1);
    }

    #[test]
    fn test_empty_category_rejected() {
        let loggers = Loggers::new();
        assert!(matches!(
            loggers.get(""),
            Err(LoggerError::InvalidCategory { .. })
        ));
        assert!(loggers.get("  ").is_err());
        assert!(loggers.is_empty());
    }

    #[test]
    fn test_fifo_eviction() {
        let loggers = Loggers::new().with_limit(2);
        let first = loggers.get("a").unwrap();
        loggers.get("b").unwrap();
        loggers.get("c").unwrap();
        assert_eq!(loggers.len(), 2);
        assert!(!loggers.contains("a"));
        assert!(loggers.contains("b"));
        assert!(loggers.contains("c"));
        // An evicted handle still works.
        assert_eq!(first.category(), "a");
    }

    #[test]
    fn test_new_loggers_use_base_options() {
        let loggers = Loggers::new().with_options(LoggerOptions::default().with_level(Level::Error));
        assert_eq!(loggers.get("x").unwrap().level(), Level::Error);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.registry.limit = 3;
        config.logging.level = "trace".to_owned();
        let loggers = Loggers::from_config(&config).unwrap();
        assert_eq!(loggers.limit(), 3);
        assert_eq!(loggers.get("x").unwrap().level(), Level::Trace);
    }

    #[test]
    fn test_remove_and_clear() {
        let loggers = Loggers::new();
        loggers.get("a").unwrap();
        loggers.get("b").unwrap();
        assert_eq!(loggers.remove("a").map(|l| l.category().to_owned()), Some("a".to_owned()));
        assert!(loggers.remove("a").is_none());
        loggers.clear();
        assert!(loggers.is_empty());
    }
}
