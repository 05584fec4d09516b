//! Category loggers.

use std::panic::Location;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use quill_core::{Callsite, Level, LogRecord, Value, serialize_args};

use crate::color::colorize;
use crate::options::LoggerOptions;
use crate::transport::{StdoutTransport, Transport};

/// A logger for one category.
///
/// Options sit behind a lock so they can be reconfigured while the logger is
/// shared; each call reads one consistent snapshot of them.
pub struct Logger {
    category: String,
    options: RwLock<LoggerOptions>,
    transport: Arc<dyn Transport>,
}

impl Logger {
    /// Logger with default options writing to standard output.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            options: RwLock::new(LoggerOptions::default()),
            transport: Arc::new(StdoutTransport),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(self, options: LoggerOptions) -> Self {
        Self {
            options: RwLock::new(options),
            ..self
        }
    }

    /// Replace the transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    fn read(&self) -> RwLockReadGuard<'_, LoggerOptions> {
        self.options.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current options.
    #[must_use]
    pub fn options(&self) -> LoggerOptions {
        self.read().clone()
    }

    /// Replace the options of a shared logger.
    pub fn configure(&self, options: LoggerOptions) {
        *self.options.write().unwrap_or_else(PoisonError::into_inner) = options;
    }

    /// Change the threshold of a shared logger.
    pub fn set_level(&self, level: Level) {
        self.options
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .level = level;
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.read().level
    }

    /// Whether a call at `level` would be rendered.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.read().level.enables(level)
    }

    /// Log `args` at `level`, capturing the caller's location.
    ///
    /// Returns the rendered (uncolored) line, or `None` when the level is
    /// filtered out.
    #[track_caller]
    pub fn log(&self, level: Level, args: &[Value]) -> Option<String> {
        self.log_at(level, Callsite::from_location(Location::caller()), args)
    }

    /// Log `args` at `level` with an explicit call site.
    pub fn log_at(&self, level: Level, callsite: Callsite, args: &[Value]) -> Option<String> {
        let options = {
            let guard = self.read();
            if !guard.level.enables(level) {
                return None;
            }
            guard.clone()
        };
        // Transforms, format hooks and transports run without the lock held,
        // so they may reconfigure this logger.

        let payload = serialize_args(&options.registry, args);
        let callsite = if options.callsites {
            callsite
        } else {
            Callsite::unknown()
        };
        let record = LogRecord::new(level, payload)
            .with_category(self.category.as_str())
            .with_callsite(callsite);

        let line = options.render(&record);
        let result = if options.colorize {
            self.transport.write(&colorize(level, &line))
        } else {
            self.transport.write(&line)
        };
        if let Err(e) = result {
            tracing::warn!(category = %self.category, error = %e, "failed to write log line");
        }

        Some(line)
    }

    /// Log at `error`.
    #[track_caller]
    pub fn error(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Error, args)
    }

    /// Log at `warn`.
    #[track_caller]
    pub fn warn(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Warn, args)
    }

    /// Log at `info`.
    #[track_caller]
    pub fn info(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Info, args)
    }

    /// Log at `debug`.
    #[track_caller]
    pub fn debug(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Debug, args)
    }

    /// Log at `trace`.
    #[track_caller]
    pub fn trace(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Trace, args)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("options", &*self.read())
            .finish_non_exhaustive()
    }
}
