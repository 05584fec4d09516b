//! Logger options.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use quill_config::Config;
use quill_core::{
    Level, LogRecord, Logline, TransformRegistry, default_json_logline, default_registry,
    separated_logline,
};

use crate::error::LoggerResult;

/// Custom format hook. Replaces the logline entirely when set.
pub type FormatFn = dyn Fn(&LogRecord) -> String + Send + Sync;

/// Everything that decides how a logger renders a call.
#[derive(Clone)]
pub struct LoggerOptions {
    /// Severity threshold.
    pub level: Level,
    /// Wrap lines in level colors.
    pub colorize: bool,
    /// Use the JSON logline when no custom logline is set.
    pub json: bool,
    /// Capture call sites.
    pub callsites: bool,
    /// Separator for the default text logline.
    pub separator: String,
    /// Custom logline; `None` selects a default by `json`.
    pub logline: Option<Logline>,
    /// Transforms applied to every argument.
    pub registry: TransformRegistry,
    /// Custom format hook, checked before the logline.
    pub format: Option<Arc<FormatFn>>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: Level::Info,
            colorize: false,
            json: false,
            callsites: true,
            separator: quill_core::logline::DEFAULT_SEPARATOR.to_owned(),
            logline: None,
            registry: default_registry(),
            format: None,
        }
    }
}

impl LoggerOptions {
    /// Options from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Level`](crate::LoggerError::Level) if the
    /// configured level does not parse. A validated [`Config`] always does.
    pub fn from_config(config: &Config) -> LoggerResult<Self> {
        let logging = &config.logging;
        Ok(Self {
            level: logging.level.parse()?,
            colorize: logging.colorize,
            json: logging.json,
            callsites: logging.callsites,
            separator: logging.separator.clone(),
            ..Self::default()
        })
    }

    /// Set the threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable colors.
    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Enable or disable JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Enable or disable call-site capture.
    #[must_use]
    pub fn with_callsites(mut self, callsites: bool) -> Self {
        self.callsites = callsites;
        self
    }

    /// Set the text separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Use a custom logline.
    #[must_use]
    pub fn with_logline(mut self, logline: Logline) -> Self {
        self.logline = Some(logline);
        self
    }

    /// Use a custom registry.
    #[must_use]
    pub fn with_registry(mut self, registry: TransformRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom format hook.
    #[must_use]
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&LogRecord) -> String + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }

    /// The logline in effect: the custom one, or the default for the mode.
    #[must_use]
    pub fn logline(&self) -> Cow<'_, Logline> {
        match &self.logline {
            Some(logline) => Cow::Borrowed(logline),
            None if self.json => Cow::Owned(default_json_logline()),
            None => Cow::Owned(separated_logline(&self.separator)),
        }
    }

    /// Render a record with the format hook or the logline in effect.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        match &self.format {
            Some(format) => format(record),
            None => self.logline().build(record),
        }
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("level", &self.level)
            .field("colorize", &self.colorize)
            .field("json", &self.json)
            .field("callsites", &self.callsites)
            .field("separator", &self.separator)
            .field("logline", &self.logline)
            .field("registry", &self.registry.len())
            .field("format", &self.format.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use quill_core::{Node, Scalar};

    use super::*;

    fn record() -> LogRecord {
        LogRecord::new(
            Level::Info,
            vec![
                Node::Scalar(Scalar::Text("a".to_owned())),
                Node::Scalar(Scalar::Text("b".to_owned())),
            ],
        )
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.logging.level = "Debug".to_owned();
        config.logging.json = true;
        config.logging.separator = " | ".to_owned();
        let options = LoggerOptions::from_config(&config).unwrap();
        assert_eq!(options.level, Level::Debug);
        assert!(options.json);
        assert!(options.callsites);
        assert_eq!(options.separator, " | ");
    }

    #[test]
    fn test_from_config_bad_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_owned();
        assert!(LoggerOptions::from_config(&config).is_err());
    }

    #[test]
    fn test_default_logline_follows_mode() {
        let options = LoggerOptions::default();
        assert!(!options.logline().is_json());
        assert!(options.with_json(true).logline().is_json());
    }

    #[test]
    fn test_custom_logline_wins_over_mode() {
        let options = LoggerOptions::default()
            .with_json(true)
            .with_logline(Logline::line().add(|r: &LogRecord| r.text("+")));
        assert_eq!(options.render(&record()), "a+b");
    }

    #[test]
    fn test_format_hook_wins_over_logline() {
        let options = LoggerOptions::default()
            .with_logline(Logline::line().add(|_| "ignored"))
            .with_format(|r: &LogRecord| format!("{}:{}", r.level, r.payload.len()));
        assert_eq!(options.render(&record()), "info:2");
    }

    #[test]
    fn test_separator_applies_to_default_line() {
        let options = LoggerOptions::default().with_separator("|");
        let line = options.render(&record());
        assert!(line.starts_with('['));
        assert!(line.contains("]|[INFO]|["));
        assert!(line.ends_with("]|a|b"));
    }
}
