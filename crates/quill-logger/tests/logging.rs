//! Logger behavior observed through a capturing transport.

use std::collections::HashMap;

use quill_config::loader::load_with_env;
use quill_logger::prelude::*;
use quill_test::{
    CaptureTransport, ConfigDirs, FailingTransport, break_cycle, self_referencing_record,
};

fn capturing(options: LoggerOptions) -> (Logger, CaptureTransport) {
    let capture = CaptureTransport::new();
    let logger = Logger::new("app")
        .with_options(options)
        .with_transport(capture.handle());
    (logger, capture)
}

#[test]
fn test_threshold_filters_lower_severities() {
    let (logger, capture) = capturing(LoggerOptions::default().with_level(Level::Warn));
    logger.debug(&[Value::from("no")]);
    logger.info(&[Value::from("no")]);
    logger.warn(&[Value::from("yes")]);
    logger.error(&[Value::from("yes")]);
    assert_eq!(capture.len(), 2);
    assert!(capture.lines().iter().all(|l| l.ends_with("yes")));
}

#[test]
fn test_default_line_layout() {
    let (logger, capture) = capturing(LoggerOptions::default());
    logger.info(&[Value::from("ready"), Value::from(3)]);
    let line = capture.last().unwrap();
    assert!(line.starts_with('['), "{line}");
    assert!(line.contains("] [INFO] ["), "{line}");
    assert!(line.contains(&format!("[{}]", std::process::id())), "{line}");
    assert!(line.contains("[app]"), "{line}");
    assert!(line.ends_with("ready 3"), "{line}");
}

#[test]
fn test_cyclic_argument_is_logged() {
    let (logger, capture) = capturing(LoggerOptions::default().with_json(true));
    let record = self_referencing_record();
    logger.info(&[Value::from(record.clone())]);
    break_cycle(&record);

    let parsed: serde_json::Value = serde_json::from_str(&capture.last().unwrap()).unwrap();
    assert_eq!(
        parsed["data"],
        serde_json::json!([{"name": "loop", "me": "[REF => .]"}])
    );
}

#[test]
fn test_json_output_fields() {
    let (logger, capture) = capturing(LoggerOptions::default().with_json(true));
    logger.error(&[Value::from("disk"), Value::from(true)]);
    let parsed: serde_json::Value = serde_json::from_str(&capture.last().unwrap()).unwrap();
    assert_eq!(parsed["level"], "error");
    assert_eq!(parsed["category"], "app");
    assert_eq!(parsed["pid"], std::process::id());
    assert_eq!(parsed["data"], serde_json::json!(["disk", true]));
}

#[test]
fn test_colors_reach_transport_only() {
    let (logger, capture) = capturing(
        LoggerOptions::default()
            .with_colorize(true)
            .with_logline(Logline::line().add(|r: &quill_core::LogRecord| r.text(" "))),
    );
    let returned = logger.warn(&[Value::from("careful")]).unwrap();
    assert_eq!(returned, "careful");
    assert_eq!(capture.last().unwrap(), "\x1b[33mcareful\x1b[0m");
}

#[test]
fn test_custom_registry_applies() {
    let registry = TransformRegistry::new().add(
        quill_core::registry::predicates::has_key("password"),
        |_| Value::from("[redacted]"),
    );
    let (logger, capture) = capturing(
        LoggerOptions::default()
            .with_registry(registry)
            .with_logline(Logline::line().add(|r: &quill_core::LogRecord| r.text(" "))),
    );
    logger.info(&[
        Value::from("login"),
        Value::record([("user", "ann"), ("password", "hunter2")]),
    ]);
    assert_eq!(capture.last().unwrap(), "login [redacted]");
}

#[test]
fn test_macros_record_module_and_file() {
    let (logger, capture) = capturing(LoggerOptions::default());
    quill_logger::info!(logger, "from", "macro");
    let line = capture.last().unwrap();
    assert!(line.contains("logging.rs||logging:"), "{line}");
    assert!(line.ends_with("from macro"), "{line}");

    quill_logger::debug!(logger, "filtered");
    assert_eq!(capture.len(), 1);
}

#[test]
fn test_failing_transport_is_tolerated() {
    let logger = Logger::new("app").with_transport(std::sync::Arc::new(FailingTransport));
    assert!(logger.error(&[Value::from("lost")]).is_some());
}

#[test]
fn test_loggers_share_transport_and_options() {
    let capture = CaptureTransport::new();
    let loggers = Loggers::new()
        .with_options(LoggerOptions::default().with_level(Level::Debug))
        .with_transport(capture.handle());
    loggers.get("db").unwrap().debug(&[Value::from("q")]);
    loggers.get("http").unwrap().debug(&[Value::from("r")]);
    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[db]"));
    assert!(lines[1].contains("[http]"));
}

#[test]
fn test_loggers_from_layered_config() {
    let dirs = ConfigDirs::new()
        .with_user_config("[logging]\nlevel = \"error\"\n[registry]\nlimit = 2\n")
        .with_workspace_config("[logging]\njson = true\n");
    let env = HashMap::from([("LOG_LEVEL".to_owned(), "trace".to_owned())]);
    let resolved = load_with_env(Some(dirs.workspace()), Some(dirs.home()), &env).unwrap();

    let capture = CaptureTransport::new();
    let loggers = Loggers::from_config(&resolved.config)
        .unwrap()
        .with_transport(capture.handle());
    assert_eq!(loggers.limit(), 2);

    let logger = loggers.get("cfg").unwrap();
    assert_eq!(logger.level(), Level::Error);
    logger.warn(&[Value::from("hidden")]);
    logger.error(&[Value::from("shown")]);
    assert_eq!(capture.len(), 1);
    assert!(capture.last().unwrap().starts_with('{'));
}

#[test]
fn test_loggers_load_from_files() {
    let dirs = ConfigDirs::new()
        .with_user_config("[logging]\nlevel = \"debug\"\ncallsites = false\n[registry]\nlimit = 4\n");
    let loggers = Loggers::load_with_home(Some(dirs.workspace()), dirs.home()).unwrap();
    assert_eq!(loggers.limit(), 4);
    let logger = loggers.get("files").unwrap();
    assert_eq!(logger.level(), Level::Debug);
    assert!(!logger.options().callsites);
}

#[test]
fn test_loggers_load_reports_config_errors() {
    let dirs = ConfigDirs::new().with_workspace_config("[registry]\nlimit = 0\n");
    let err = Loggers::load_with_home(Some(dirs.workspace()), dirs.home()).unwrap_err();
    assert!(matches!(err, LoggerError::Config(_)), "{err}");

    let dirs = ConfigDirs::new().with_user_config("[logging\nbroken");
    let err = Loggers::load_with_home(None, dirs.home()).unwrap_err();
    assert!(matches!(err, LoggerError::Config(_)), "{err}");
}
