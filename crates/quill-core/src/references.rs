//! Cycle guard for one serialization call.

use std::collections::HashMap;

use crate::value::Value;

/// Render the placeholder emitted for an already visited composite.
#[must_use]
pub fn marker(path: &str) -> String {
    let path = if path.is_empty() { "." } else { path };
    format!("[REF => {path}]")
}

/// Maps each visited list or record, by identity, to the path where it was
/// first seen.
///
/// Scalars and exotic objects have no identity and are never recorded.
/// Recorded handles are retained until [`reset`](Self::reset) so that an
/// address cannot be reused by another composite within the same call.
#[derive(Debug, Default)]
pub struct ReferenceTracker {
    paths: HashMap<usize, String>,
    retained: Vec<Value>,
}

impl ReferenceTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path at which `value` was first recorded, if it was.
    #[must_use]
    pub fn seen(&self, value: &Value) -> Option<&str> {
        let id = value.identity()?;
        self.paths.get(&id).map(String::as_str)
    }

    /// Record `value` at `path`. The first recorded path wins.
    pub fn record(&mut self, value: &Value, path: &str) {
        let Some(id) = value.identity() else {
            return;
        };
        self.paths.entry(id).or_insert_with(|| {
            self.retained.push(value.clone());
            path.to_owned()
        });
    }

    /// Look `value` up and record it at `path` if it is new.
    ///
    /// Returns the earlier path for a repeat visit, `None` otherwise.
    pub fn visit(&mut self, value: &Value, path: &str) -> Option<String> {
        if let Some(first) = self.seen(value) {
            return Some(first.to_owned());
        }
        self.record(value, path);
        None
    }

    /// Forget every recorded value.
    pub fn reset(&mut self) {
        self.paths.clear();
        self.retained.clear();
    }

    /// Number of recorded composites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
