//! Exotic objects: values that are neither scalars nor plain composites.
//!
//! The default transform registry turns each of these into text. Without a
//! matching transform the serializer walks their structural view instead.

use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::{List, Record, Value};

/// A captured error with its property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    /// Error type name.
    pub name: String,
    /// Display message.
    pub message: String,
    /// Captured backtrace, if any.
    pub stack: Option<String>,
    /// Messages of the `source()` chain, outermost first.
    pub causes: Vec<String>,
}

impl ErrorValue {
    /// Create an error value with the generic `Error` name.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: "Error".to_owned(),
            message: message.into(),
            stack: None,
            causes: Vec::new(),
        }
    }

    /// Capture a Rust error, walking its `source()` chain.
    #[must_use]
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            causes,
            ..Self::new(error.to_string())
        }
    }

    /// Set the type name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a backtrace.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Properties in enumeration order: `name`, `message`, `stack` when
    /// present, then one `cause` per source.
    #[must_use]
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![("name", self.name.clone()), ("message", self.message.clone())];
        if let Some(stack) = &self.stack {
            props.push(("stack", stack.clone()));
        }
        props.extend(self.causes.iter().map(|c| ("cause", c.clone())));
        props
    }
}

/// Exotic object kinds.
#[derive(Debug, Clone)]
pub enum Object {
    /// Point in time.
    Date(DateTime<Utc>),
    /// Error with properties.
    Error(ErrorValue),
    /// Raw bytes.
    Buffer(Rc<[u8]>),
    /// In-flight asynchronous value whose result is not available.
    Pending,
}

impl Object {
    /// The value the serializer walks when no transform rewrote this object.
    ///
    /// Dates and pending values expose no enumerable fields and walk as an
    /// empty record. Errors walk as a record of their properties (repeated
    /// `cause` keys collapse to the last one), buffers as a list of byte
    /// values.
    #[must_use]
    pub fn structural_view(&self) -> Value {
        match self {
            Self::Date(_) | Self::Pending => Value::Record(Record::new()),
            Self::Error(error) => Value::Record(error.properties().into_iter().collect()),
            Self::Buffer(bytes) => Value::List(bytes.iter().copied().collect::<List>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "outer failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_from_error_walks_sources() {
        let err = Outer(std::io::Error::other("disk gone"));
        let value = ErrorValue::from_error(&err);
        assert_eq!(value.message, "outer failed");
        assert_eq!(value.causes, vec!["disk gone"]);
    }

    #[test]
    fn test_properties_order() {
        let value = ErrorValue::new("boom")
            .with_name("TypeError")
            .with_stack("at main");
        let names: Vec<_> = value.properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["name", "message", "stack"]);
    }

    #[test]
    fn test_structural_views() {
        let date = Object::Date(Utc::now()).structural_view();
        assert!(matches!(date, Value::Record(r) if r.is_empty()));

        let buffer = Object::Buffer(Rc::from(&b"hi"[..])).structural_view();
        assert!(matches!(buffer, Value::List(l) if l.len() == 2));

        let error = Object::Error(ErrorValue::new("x")).structural_view();
        assert!(matches!(error, Value::Record(r) if r.keys() == vec!["name", "message"]));
    }
}
