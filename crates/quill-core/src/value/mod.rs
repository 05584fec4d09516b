//! The dynamic value model for log arguments.
//!
//! Every argument handed to a logger is a [`Value`], classified exactly once
//! into a [`Kind`]. Terminal kinds are encoded directly; composites (lists,
//! records) are walked, and exotic [`Object`]s are either rewritten by the
//! transform registry or walked through their structural view.

mod composite;
mod convert;
mod object;
mod scalar;

use std::rc::Rc;

use chrono::{DateTime, Utc};

pub use composite::{List, Record};
pub use object::{ErrorValue, Object};
pub use scalar::{Callable, CallableKind, Scalar};

/// Closed classification of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absent value.
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool,
    /// Number.
    Number,
    /// Big integer.
    BigInt,
    /// Text.
    Text,
    /// Symbolic atom.
    Symbol,
    /// Function or class.
    Callable,
    /// Ordered list.
    List,
    /// Keyed record.
    Record,
    /// Point in time.
    Date,
    /// Error.
    Error,
    /// Raw bytes.
    Buffer,
    /// In-flight asynchronous value.
    Pending,
}

impl Kind {
    /// The fixed terminal kinds.
    pub const TERMINAL: [Self; 8] = [
        Self::Undefined,
        Self::Null,
        Self::Bool,
        Self::Number,
        Self::BigInt,
        Self::Text,
        Self::Symbol,
        Self::Callable,
    ];

    /// Whether values of this kind are encoded without recursion.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }
}

/// A log argument.
#[derive(Debug, Clone)]
pub enum Value {
    /// Terminal scalar.
    Scalar(Scalar),
    /// Ordered list.
    List(List),
    /// Keyed record.
    Record(Record),
    /// Exotic object.
    Object(Object),
}

impl Value {
    /// The absent value.
    #[must_use]
    pub fn undefined() -> Self {
        Self::Scalar(Scalar::Undefined)
    }

    /// Explicit null.
    #[must_use]
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(text.into()))
    }

    /// Symbolic atom with the given description.
    #[must_use]
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Symbol(description.into()))
    }

    /// Big integer.
    #[must_use]
    pub fn bigint(value: i128) -> Self {
        Self::Scalar(Scalar::BigInt(value))
    }

    /// Named function.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Callable(Callable::function(name)))
    }

    /// Build a list from any iterator of convertible values.
    pub fn list<V: Into<Self>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Build a record from key/value pairs, in the given order.
    pub fn record<K: Into<String>, V: Into<Self>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Record(entries.into_iter().collect())
    }

    /// Point in time.
    #[must_use]
    pub fn date(at: DateTime<Utc>) -> Self {
        Self::Object(Object::Date(at))
    }

    /// Capture a Rust error.
    #[must_use]
    pub fn error(error: &(dyn std::error::Error + 'static)) -> Self {
        Self::Object(Object::Error(ErrorValue::from_error(error)))
    }

    /// Raw bytes.
    #[must_use]
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Object(Object::Buffer(Rc::from(bytes.into())))
    }

    /// In-flight asynchronous value.
    #[must_use]
    pub fn pending() -> Self {
        Self::Object(Object::Pending)
    }

    /// Convert any serde-serializable value.
    ///
    /// This is the only hook through which caller code runs while a value is
    /// built; its error is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the type's `Serialize` implementation.
    pub fn from_serialize<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self::from)
    }

    /// Classify this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar(scalar) => match scalar {
                Scalar::Undefined => Kind::Undefined,
                Scalar::Null => Kind::Null,
                Scalar::Bool(_) => Kind::Bool,
                Scalar::Number(_) => Kind::Number,
                Scalar::BigInt(_) => Kind::BigInt,
                Scalar::Text(_) => Kind::Text,
                Scalar::Symbol(_) => Kind::Symbol,
                Scalar::Callable(_) => Kind::Callable,
            },
            Self::List(_) => Kind::List,
            Self::Record(_) => Kind::Record,
            Self::Object(object) => match object {
                Object::Date(_) => Kind::Date,
                Object::Error(_) => Kind::Error,
                Object::Buffer(_) => Kind::Buffer,
                Object::Pending => Kind::Pending,
            },
        }
    }

    /// Whether this value is a terminal scalar.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// The scalar, if terminal.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The list handle, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The record handle, if this is a record.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Text content, if this is a text scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Identity of a list or record; `None` for every other kind.
    #[must_use]
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::List(list) => Some(list.id()),
            Self::Record(record) => Some(record.id()),
            Self::Scalar(_) | Self::Object(_) => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::undefined()
    }
}
