//! Shipped registry and loglines.

use crate::logline::{DEFAULT_SEPARATOR, Logline};
use crate::record::LogRecord;
use crate::registry::{TransformRegistry, predicates};
use crate::value::{ErrorValue, Kind, Object, Value};

/// Placeholder for in-flight asynchronous values.
pub const PENDING_PLACEHOLDER: &str = "<Promise>";

/// Registry used when a logger is not given one.
///
/// Dates render as ISO-8601 text, pending values as `<Promise>`, errors as
/// a property dump (`\nname: value` per property) and buffers as their
/// UTF-8 text, with invalid sequences replaced.
#[must_use]
pub fn default_registry() -> TransformRegistry {
    TransformRegistry::new()
        .add(predicates::kind(Kind::Date), |value| match value {
            Value::Object(Object::Date(at)) => Value::text(
                at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            ),
            other => other.clone(),
        })
        .add(predicates::kind(Kind::Buffer), |value| match value {
            Value::Object(Object::Buffer(bytes)) => {
                Value::text(String::from_utf8_lossy(bytes).into_owned())
            },
            other => other.clone(),
        })
        .add(predicates::kind(Kind::Pending), |_| {
            Value::text(PENDING_PLACEHOLDER)
        })
        .add(predicates::kind(Kind::Error), |value| match value {
            Value::Object(Object::Error(error)) => Value::text(error_dump(error)),
            other => other.clone(),
        })
}

/// Newline-joined property dump of an error.
#[must_use]
pub fn error_dump(error: &ErrorValue) -> String {
    error
        .properties()
        .into_iter()
        .fold(String::new(), |mut acc, (name, value)| {
            acc.push('\n');
            acc.push_str(name);
            acc.push_str(": ");
            acc.push_str(&value);
            acc
        })
}

fn bracket(text: impl std::fmt::Display) -> String {
    format!("[{text}]")
}

/// Text logline:
/// `[timestamp] [LEVEL] [pid] [category] [file||function:line] payload`.
#[must_use]
pub fn default_logline() -> Logline {
    separated_logline(DEFAULT_SEPARATOR)
}

/// [`default_logline`] with `separator` between fields and between payload
/// values.
#[must_use]
pub fn separated_logline(separator: &str) -> Logline {
    let payload_separator = separator.to_owned();
    Logline::line()
        .add(|r: &LogRecord| bracket(r.iso_timestamp()))
        .add(|r: &LogRecord| bracket(r.level.label()))
        .add(|r: &LogRecord| bracket(r.pid))
        .add(|r: &LogRecord| bracket(&r.category))
        .add(|r: &LogRecord| {
            bracket(format!(
                "{}||{}:{}",
                r.callsite.file,
                r.callsite.function_or_dash(),
                r.callsite.line_or_unknown()
            ))
        })
        .add(move |r: &LogRecord| r.text(&payload_separator))
        .with_separator(separator)
}

/// JSON logline merging date, level, pid, category, call site and payload.
#[must_use]
pub fn default_json_logline() -> Logline {
    Logline::json()
        .add(|r: &LogRecord| Value::record([("date", r.iso_timestamp())]))
        .add(|r: &LogRecord| Value::record([("level", r.level.as_str())]))
        .add(|r: &LogRecord| Value::record([("pid", r.pid)]))
        .add(|r: &LogRecord| Value::record([("category", r.category.as_str())]))
        .add(|r: &LogRecord| Value::record([("filename", r.callsite.file.as_str())]))
        .add(|r: &LogRecord| Value::record([("function", r.callsite.function_or_dash())]))
        .add(|r: &LogRecord| Value::record([("line", r.callsite.line_or_unknown())]))
        .add(|r: &LogRecord| Value::record([("data", r.data())]))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::level::Level;
    use crate::node::Node;
    use crate::record::Callsite;
    use crate::serializer::to_json;
    use crate::value::Scalar;

    fn record() -> LogRecord {
        LogRecord::new(
            Level::Warn,
            vec![
                Node::Scalar(Scalar::Text("low disk".to_owned())),
                Node::Scalar(Scalar::Number(5.0)),
            ],
        )
        .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
        .with_pid(42)
        .with_category("storage")
        .with_callsite(Callsite::new("src/disk.rs", 17).with_function("disk::check"))
    }

    #[test]
    fn test_default_line() {
        assert_eq!(
            default_logline().build(&record()),
            "[2024-01-02T03:04:05.000Z] [WARN] [42] [storage] [src/disk.rs||disk::check:17] low disk 5"
        );
    }

    #[test]
    fn test_separator_reaches_payload() {
        assert_eq!(
            separated_logline("|").build(&record()),
            "[2024-01-02T03:04:05.000Z]|[WARN]|[42]|[storage]|[src/disk.rs||disk::check:17]|low disk|5"
        );
    }

    #[test]
    fn test_default_line_unknown_callsite() {
        let rec = record().with_callsite(Callsite::unknown());
        assert!(default_logline().build(&rec).contains("[||-:-1]"));
    }

    #[test]
    fn test_default_json() {
        let out = default_json_logline().build(&record());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "date": "2024-01-02T03:04:05.000Z",
                "level": "warn",
                "pid": 42,
                "category": "storage",
                "filename": "src/disk.rs",
                "function": "disk::check",
                "line": 17,
                "data": ["low disk", 5],
            })
        );
    }

    #[test]
    fn test_registry_dates_and_pending() {
        let registry = default_registry();
        let at = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
        let value = Value::list([Value::date(at), Value::pending()]);
        assert_eq!(
            to_json(&registry, &value),
            r#"["2020-06-01T00:00:00.000Z","<Promise>"]"#
        );
    }

    #[test]
    fn test_registry_buffers() {
        let registry = default_registry();
        assert_eq!(to_json(&registry, &Value::buffer(b"hi".to_vec())), r#""hi""#);
    }

    #[test]
    fn test_registry_errors() {
        let registry = default_registry();
        let error = ErrorValue::new("boom").with_name("TypeError");
        let value = Value::from(error);
        let out = registry.apply(&value);
        assert_eq!(out.as_text(), Some("\nname: TypeError\nmessage: boom"));
    }
}
