//! Formatting pipeline.
//!
//! A [`Logline`] is an ordered list of field extractors. Building a line runs
//! every extractor against the same [`LogRecord`] and then renders the
//! collected fields:
//!
//! - **Line mode**: each field is rendered in text form (scalars via
//!   [`encode_text`], undefined as `undefined`, anything else as JSON) and
//!   the fields are joined with the separator.
//! - **JSON mode**: plain record fields are shallow-merged into one output
//!   record. On a key collision the last write wins and the key keeps the
//!   position of its first occurrence. Any other field is stored under the
//!   positional key `"[ i ]"`. The merged record is then serialized, so
//!   nested field values still get cycle-safe encoding.
//!
//! Field values go through the logline's own [`TransformRegistry`]
//! ([`default_registry`] unless replaced), so a date field renders as
//! ISO-8601 text in both modes. The record payload was already serialized by
//! the logger and holds no exotic objects, so the default registry leaves it
//! untouched.
//!
//! A logline with no extractors renders the record's payload joined by the
//! separator.

use std::fmt;
use std::sync::Arc;

use crate::defaults::default_registry;
use crate::encode::encode_text;
use crate::record::LogRecord;
use crate::registry::TransformRegistry;
use crate::serializer::Serializer;
use crate::value::{Record, Scalar, Value};

/// Field extractor.
pub type Extractor = dyn Fn(&LogRecord) -> Value + Send + Sync;

/// Default field separator.
pub const DEFAULT_SEPARATOR: &str = " ";

/// How a logline renders its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Joined text.
    #[default]
    Line,
    /// Merged JSON object.
    Json,
}

/// Ordered pipeline of field extractors.
#[derive(Clone)]
pub struct Logline {
    fields: Vec<Arc<Extractor>>,
    separator: String,
    mode: OutputMode,
    registry: TransformRegistry,
}

impl Logline {
    /// Empty pipeline in the given mode.
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self {
            fields: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_owned(),
            mode,
            registry: default_registry(),
        }
    }

    /// Empty line-mode pipeline.
    #[must_use]
    pub fn line() -> Self {
        Self::new(OutputMode::Line)
    }

    /// Empty JSON-mode pipeline.
    #[must_use]
    pub fn json() -> Self {
        Self::new(OutputMode::Json)
    }

    /// Append a field extractor.
    #[must_use]
    pub fn add<F, V>(mut self, extractor: F) -> Self
    where
        F: Fn(&LogRecord) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.fields
            .push(Arc::new(move |record: &LogRecord| extractor(record).into()));
        self
    }

    /// Set the separator used in line mode and for the payload fallback.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Alias of [`with_separator`](Self::with_separator).
    #[must_use]
    pub fn join(self, separator: impl Into<String>) -> Self {
        self.with_separator(separator)
    }

    /// Replace the registry applied to field values.
    #[must_use]
    pub fn with_registry(mut self, registry: TransformRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Registry applied to field values.
    #[must_use]
    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Switch the output mode, keeping the extractors.
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Output mode.
    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Whether this pipeline renders JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Separator in use.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of extractors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no extractor was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Run every extractor against `record`, in order.
    #[must_use]
    pub fn fields(&self, record: &LogRecord) -> Vec<Value> {
        self.fields.iter().map(|extract| extract(record)).collect()
    }

    /// Render `record`.
    #[must_use]
    pub fn build(&self, record: &LogRecord) -> String {
        if self.fields.is_empty() {
            return record.text(&self.separator);
        }
        let fields = self.fields(record);
        match self.mode {
            OutputMode::Line => self.build_line(&fields),
            OutputMode::Json => self.build_json(&fields),
        }
    }

    fn build_line(&self, fields: &[Value]) -> String {
        fields
            .iter()
            .map(|field| self.render_field(field))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    fn render_field(&self, value: &Value) -> String {
        match &*self.registry.apply(value) {
            Value::Scalar(Scalar::Undefined) => "undefined".to_owned(),
            Value::Scalar(scalar) => encode_text(scalar).into_owned(),
            _ => Serializer::new(&self.registry).to_json(value),
        }
    }

    fn build_json(&self, fields: &[Value]) -> String {
        let merged: Record = fields
            .iter()
            .enumerate()
            .flat_map(|(index, field)| match field {
                Value::Record(record) => record.entries(),
                other => vec![(format!("[ {index} ]"), other.clone())],
            })
            .collect();
        Serializer::new(&self.registry).to_json(&Value::Record(merged))
    }
}

impl Default for Logline {
    fn default() -> Self {
        Self::line()
    }
}

impl fmt::Debug for Logline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logline")
            .field("fields", &self.fields.len())
            .field("separator", &self.separator)
            .field("mode", &self.mode)
            .field("registry", &self.registry.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::level::Level;
    use crate::value::Kind;
    use crate::node::Node;

    fn record() -> LogRecord {
        LogRecord::new(
            Level::Info,
            vec![
                Node::Scalar(Scalar::Text("hello".to_owned())),
                Node::Scalar(Scalar::Number(2.0)),
            ],
        )
        .with_category("db")
    }

    #[test]
    fn test_line_preserves_field_order() {
        let logline = Logline::line().add(|_| "a").add(|_| "b").add(|_| "c");
        assert_eq!(logline.build(&record()), "a b c");
        assert_eq!(logline.len(), 3);
    }

    #[test]
    fn test_extractors_see_whole_record() {
        let logline = Logline::line()
            .add(|r: &LogRecord| r.level.label())
            .add(|r: &LogRecord| r.category.clone())
            .add(|r: &LogRecord| r.text(" "));
        assert_eq!(logline.build(&record()), "INFO db hello 2");
    }

    #[test]
    fn test_custom_separator() {
        let logline = Logline::line().add(|_| 1).add(|_| 2).join(" | ");
        assert_eq!(logline.build(&record()), "1 | 2");
    }

    #[test]
    fn test_undefined_field_keeps_position() {
        let logline = Logline::line()
            .add(|_| "a")
            .add(|_| Value::undefined())
            .add(|_| "c");
        assert_eq!(logline.build(&record()), "a undefined c");
    }

    #[test]
    fn test_line_composite_field_is_json() {
        let logline = Logline::line().add(|_| Value::record([("k", "v")]));
        assert_eq!(logline.build(&record()), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_json_merges_records() {
        let logline = Logline::json()
            .add(|_| Value::record([("x", 1)]))
            .add(|_| Value::record([("y", 2)]));
        assert_eq!(logline.build(&record()), r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_json_positional_keys() {
        let logline = Logline::json()
            .add(|_| Value::record([("x", 1)]))
            .add(|_| 5);
        assert_eq!(logline.build(&record()), r#"{"x":1,"[ 1 ]":5}"#);
    }

    #[test]
    fn test_json_last_write_wins() {
        let logline = Logline::json()
            .add(|_| Value::record([("a", 1), ("b", 1)]))
            .add(|_| Value::record([("a", 2)]));
        assert_eq!(logline.build(&record()), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn test_json_nested_cycle_is_safe() {
        let logline = Logline::json().add(|_| {
            let looped = Record::new();
            looped.insert("self", looped.clone());
            Value::record([("data", looped)])
        });
        assert_eq!(
            logline.build(&record()),
            r#"{"data":{"self":"[REF => data]"}}"#
        );
    }

    #[test]
    fn test_empty_pipeline_renders_payload() {
        assert_eq!(Logline::line().build(&record()), "hello 2");
        assert_eq!(
            Logline::json().with_separator(",").build(&record()),
            "hello,2"
        );
    }

    #[test]
    fn test_date_field_is_iso_text_in_line_mode() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let logline = Logline::line()
            .add(move |_| Value::date(at))
            .add(move |_| Value::list([Value::date(at)]));
        assert_eq!(
            logline.build(&record()),
            r#"2024-01-02T03:04:05.000Z ["2024-01-02T03:04:05.000Z"]"#
        );
    }

    #[test]
    fn test_date_field_is_iso_text_in_json_mode() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let logline = Logline::json()
            .add(move |_| Value::record([("at", Value::date(at))]))
            .add(move |_| Value::date(at));
        assert_eq!(
            logline.build(&record()),
            r#"{"at":"2024-01-02T03:04:05.000Z","[ 1 ]":"2024-01-02T03:04:05.000Z"}"#
        );
    }

    #[test]
    fn test_custom_field_registry() {
        let registry = TransformRegistry::new()
            .add(crate::registry::predicates::kind(Kind::Buffer), |_| Value::from("<bytes>"));
        let logline = Logline::json()
            .add(|_| Value::record([("body", Value::buffer(b"hi".to_vec()))]))
            .with_registry(registry);
        assert_eq!(logline.registry().len(), 1);
        assert_eq!(logline.build(&record()), r#"{"body":"<bytes>"}"#);
    }

    #[test]
    fn test_mode_switch() {
        let logline = Logline::line().add(|_| Value::record([("x", 1)]));
        assert!(!logline.is_json());
        let logline = logline.with_mode(OutputMode::Json);
        assert!(logline.is_json());
        assert_eq!(logline.build(&record()), r#"{"x":1}"#);
    }
}
