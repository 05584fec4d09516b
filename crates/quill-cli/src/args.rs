//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use quill_core::{Level, Value};
use quill_logger::LoggerOptions;

/// Quill - log values from the command line
#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Severity of the logged line
    pub(crate) level: Level,

    /// Values to log; JSON is parsed, anything else is logged as text
    pub(crate) values: Vec<String>,

    /// Threshold below which lines are dropped (overrides config)
    #[arg(long = "level", value_name = "LEVEL")]
    pub(crate) threshold: Option<Level>,

    /// Emit JSON lines
    #[arg(long)]
    pub(crate) json: bool,

    /// Colorize the line by severity
    #[arg(long)]
    pub(crate) color: bool,

    /// Omit file, function and line from the output
    #[arg(long)]
    pub(crate) no_callsites: bool,

    /// Logger category
    #[arg(short, long, default_value = "quill")]
    pub(crate) category: String,

    /// Separator between payload values
    #[arg(short, long)]
    pub(crate) separator: Option<String>,

    /// Workspace root holding `.quill/config.toml`
    #[arg(short, long, value_name = "DIR")]
    pub(crate) workspace: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of configured options.
    pub(crate) fn apply(&self, mut options: LoggerOptions) -> LoggerOptions {
        if let Some(threshold) = self.threshold {
            options = options.with_level(threshold);
        }
        if self.json {
            options = options.with_json(true);
        }
        if self.color {
            options = options.with_colorize(true);
        }
        if self.no_callsites {
            options = options.with_callsites(false);
        }
        if let Some(separator) = &self.separator {
            options = options.with_separator(separator.as_str());
        }
        options
    }

    /// Positional values converted for logging.
    pub(crate) fn payload(&self) -> Vec<Value> {
        self.values.iter().map(|raw| parse_value(raw)).collect()
    }
}

/// JSON when `raw` parses as JSON, text otherwise.
pub(crate) fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw).map_or_else(|_| Value::text(raw), Value::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["quill", "warn", "hello"]).unwrap();
        assert_eq!(cli.level, Level::Warn);
        assert_eq!(cli.values, vec!["hello"]);
        assert_eq!(cli.category, "quill");
        assert!(cli.threshold.is_none());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let cli = Cli::try_parse_from(["quill", "ERROR"]).unwrap();
        assert_eq!(cli.level, Level::Error);
        assert!(Cli::try_parse_from(["quill", "loud"]).is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "quill",
            "--level",
            "trace",
            "--json",
            "--color",
            "--no-callsites",
            "--separator",
            ",",
            "info",
        ])
        .unwrap();
        let options = cli.apply(LoggerOptions::default());
        assert_eq!(options.level, Level::Trace);
        assert!(options.json);
        assert!(options.colorize);
        assert!(!options.callsites);
        assert_eq!(options.separator, ",");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["quill", "info"]).unwrap();
        let options = cli.apply(LoggerOptions::default().with_json(true));
        assert!(options.json);
        assert_eq!(options.level, Level::Info);
    }

    #[test]
    fn test_values_parse_as_json_or_text() {
        assert_eq!(parse_value("42").as_scalar(), Some(&quill_core::Scalar::Number(42.0)));
        assert_eq!(parse_value("hello").as_text(), Some("hello"));
        assert_eq!(parse_value("\"quoted\"").as_text(), Some("quoted"));
        assert!(parse_value(r#"{"a":[1,2]}"#).as_record().is_some());
    }

    #[test]
    fn test_json_values_keep_key_order() {
        let value = parse_value(r#"{"b":1,"a":2}"#);
        assert_eq!(value.as_record().unwrap().keys(), vec!["b", "a"]);
        let registry = quill_core::TransformRegistry::new();
        assert_eq!(quill_core::to_json(&registry, &value), r#"{"b":1,"a":2}"#);
    }
}
