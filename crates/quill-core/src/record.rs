//! Log records.

use std::panic::Location;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::level::Level;
use crate::node::Node;
use crate::value::{List, Value};

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "default";

/// Where a logging call was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callsite {
    /// Source file.
    pub file: String,
    /// Enclosing function or module, when known.
    pub function: Option<String>,
    /// Line number, when known.
    pub line: Option<u32>,
}

impl Callsite {
    /// Call site with nothing known.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            file: String::new(),
            function: None,
            line: None,
        }
    }

    /// Call site at `file:line`.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: None,
            line: Some(line),
        }
    }

    /// Set the enclosing function.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Call site from a captured source location.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// Function name, or `-` when unknown.
    #[must_use]
    pub fn function_or_dash(&self) -> &str {
        self.function.as_deref().unwrap_or("-")
    }

    /// Line number, or `-1` when unknown.
    #[must_use]
    pub fn line_or_unknown(&self) -> i64 {
        self.line.map_or(-1, i64::from)
    }
}

impl Default for Callsite {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Snapshot of one logging call, built once and handed to a logline.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// When the call was made.
    pub timestamp: DateTime<Utc>,
    /// Severity of the call.
    pub level: Level,
    /// Process id.
    pub pid: u32,
    /// Logger category.
    pub category: String,
    /// Where the call was made.
    pub callsite: Callsite,
    /// Serialized arguments, one node per argument.
    pub payload: Vec<Node>,
}

impl LogRecord {
    /// Record stamped now, for the current process, in the default category.
    #[must_use]
    pub fn new(level: Level, payload: Vec<Node>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            pid: std::process::id(),
            category: DEFAULT_CATEGORY.to_owned(),
            callsite: Callsite::unknown(),
            payload,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the call site.
    #[must_use]
    pub fn with_callsite(mut self, callsite: Callsite) -> Self {
        self.callsite = callsite;
        self
    }

    /// Set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the process id.
    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    /// Payload rendered as line fragments joined by `separator`.
    #[must_use]
    pub fn text(&self, separator: &str) -> String {
        self.payload
            .iter()
            .map(Node::to_text)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Payload as a list value, for JSON extractors.
    #[must_use]
    pub fn data(&self) -> Value {
        Value::List(self.payload.iter().map(Value::from).collect::<List>())
    }

    /// Timestamp as ISO-8601 with millisecond precision, e.g.
    /// `2024-05-01T12:00:00.000Z`.
    #[must_use]
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
