//! Type transform registry.
//!
//! An ordered list of `(predicate, transform)` entries that rewrites a value
//! before it is serialized. Application is a fold: entries are visited in
//! registry order and every entry whose predicate matches the *current*
//! value transforms it, so the next entry sees the previous entry's output.
//! Independent concerns (redaction, masking, display formatting) therefore
//! compose, provided each transform narrows rather than widens the set of
//! predicates its output matches.
//!
//! Order policy: [`TransformRegistry::add`] appends, so entries run in the
//! order they were added. [`TransformRegistry::prepend`] inserts at the
//! front; a prepended entry runs before everything added earlier.
//!
//! Predicates and transforms are caller code and run unguarded: a panic
//! inside one propagates to the logging call site.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::value::{Kind, Value};

/// Predicate deciding whether an entry applies.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Rewrite applied when the predicate matches.
pub type TransformFn = dyn Fn(&Value) -> Value + Send + Sync;

/// A single registry entry.
#[derive(Clone)]
pub struct Transform {
    predicate: Arc<Predicate>,
    /// `None` is the identity transform.
    transform: Option<Arc<TransformFn>>,
}

impl Transform {
    /// Entry with an explicit transform.
    pub fn new<P, F>(predicate: P, transform: F) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            transform: Some(Arc::new(transform)),
        }
    }

    /// Entry that matches but leaves the value unchanged.
    pub fn identity<P>(predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            transform: None,
        }
    }

    /// Whether this entry applies to `value`.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// Run the transform unconditionally. `None` for the identity transform.
    #[must_use]
    pub fn rewrite(&self, value: &Value) -> Option<Value> {
        self.transform.as_ref().map(|f| f(value))
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("identity", &self.transform.is_none())
            .finish_non_exhaustive()
    }
}

/// Ordered registry of transforms.
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    entries: Vec<Transform>,
}

impl TransformRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    #[must_use]
    pub fn add<P, F>(mut self, predicate: P, transform: F) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.entries.push(Transform::new(predicate, transform));
        self
    }

    /// Append an entry with the identity transform.
    #[must_use]
    pub fn add_identity<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.entries.push(Transform::identity(predicate));
        self
    }

    /// Insert an entry ahead of all existing ones.
    #[must_use]
    pub fn prepend<P, F>(mut self, predicate: P, transform: F) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.entries.insert(0, Transform::new(predicate, transform));
        self
    }

    /// Append a prepared entry.
    pub fn push(&mut self, entry: Transform) {
        self.entries.push(entry);
    }

    /// Fold `value` through every matching entry, in registry order.
    ///
    /// Returns the input unchanged (borrowed) when no transform rewrote it.
    #[must_use]
    pub fn apply<'a>(&self, value: &'a Value) -> Cow<'a, Value> {
        let mut current = Cow::Borrowed(value);
        for entry in &self.entries {
            if !entry.matches(&current) {
                continue;
            }
            if let Some(next) = entry.rewrite(&current) {
                current = Cow::Owned(next);
            }
        }
        current
    }

    /// Whether `value` is terminal. Independent of the registered entries.
    #[must_use]
    pub fn is_terminal(value: &Value) -> bool {
        value.is_terminal()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.entries.iter()
    }
}

/// Ready-made predicates.
pub mod predicates {
    use super::{Kind, Value};

    /// Matches values of the given kind.
    pub fn kind(kind: Kind) -> impl Fn(&Value) -> bool + Send + Sync + Clone + 'static {
        move |value| value.kind() == kind
    }

    /// Matches values of any of the given kinds.
    pub fn any_kind<const N: usize>(
        kinds: [Kind; N],
    ) -> impl Fn(&Value) -> bool + Send + Sync + Clone + 'static {
        move |value| kinds.contains(&value.kind())
    }

    /// Matches records that contain `key`.
    pub fn has_key(key: impl Into<String>) -> impl Fn(&Value) -> bool + Send + Sync + Clone + 'static {
        let key = key.into();
        move |value| value.as_record().is_some_and(|r| r.contains_key(&key))
    }
}
