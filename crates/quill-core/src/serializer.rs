//! Structural serializer.
//!
//! A depth-first walk over lists and records that, for each value:
//!
//! 1. emits a reference marker if the value was already visited in this
//!    call (checked before anything else, so a visited composite is never
//!    walked again even if unchanged);
//! 2. folds the value through the [`TransformRegistry`];
//! 3. encodes the result if it is terminal;
//! 4. otherwise records the value at its path and recurses, extending the
//!    path with `[i]` for list items and `.key` for record entries (no
//!    leading dot at the root).
//!
//! The walk feeds a [`Sink`]. Tree mode builds a [`Node`]; JSON mode
//! appends to a [`JsonWriter`] in a single forward pass.
//!
//! The reference tracker is the only bound on recursion. Extremely deep
//! acyclic input can exhaust the call stack; there is no separate depth
//! limit.

use crate::json::{JsonWriter, Shape};
use crate::node::Node;
use crate::references::ReferenceTracker;
use crate::registry::TransformRegistry;
use crate::value::{Scalar, Value};

/// Receiver for the events of a walk.
pub trait Sink {
    /// A terminal value.
    fn scalar(&mut self, key: Option<&str>, scalar: &Scalar);
    /// A repeat visit of the composite first seen at `path`.
    fn reference(&mut self, key: Option<&str>, path: &str);
    /// Start of a container.
    fn open(&mut self, key: Option<&str>, shape: Shape);
    /// End of the innermost container.
    fn close(&mut self);
}

impl Sink for JsonWriter {
    fn scalar(&mut self, key: Option<&str>, scalar: &Scalar) {
        JsonWriter::scalar(self, key, scalar);
    }

    fn reference(&mut self, key: Option<&str>, path: &str) {
        self.string(key, &crate::references::marker(path));
    }

    fn open(&mut self, key: Option<&str>, shape: Shape) {
        JsonWriter::open(self, key, shape);
    }

    fn close(&mut self) {
        JsonWriter::close(self);
    }
}

enum Frame {
    List(Vec<Node>),
    Record(Vec<(String, Node)>),
}

/// Builds [`Node`] trees from walk events.
#[derive(Default)]
pub struct TreeBuilder {
    stack: Vec<(Option<String>, Frame)>,
    roots: Vec<Node>,
}

impl TreeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&mut self, key: Option<&str>, node: Node) {
        match self.stack.last_mut() {
            Some((_, Frame::List(items))) => items.push(node),
            Some((_, Frame::Record(entries))) => {
                entries.push((key.unwrap_or_default().to_owned(), node));
            },
            None => self.roots.push(node),
        }
    }

    /// Completed root nodes, in order. Unclosed containers are closed.
    #[must_use]
    pub fn finish(mut self) -> Vec<Node> {
        while !self.stack.is_empty() {
            Sink::close(&mut self);
        }
        self.roots
    }
}

impl Sink for TreeBuilder {
    fn scalar(&mut self, key: Option<&str>, scalar: &Scalar) {
        self.attach(key, Node::Scalar(scalar.clone()));
    }

    fn reference(&mut self, key: Option<&str>, path: &str) {
        self.attach(key, Node::Reference(path.to_owned()));
    }

    fn open(&mut self, key: Option<&str>, shape: Shape) {
        let frame = match shape {
            Shape::List => Frame::List(Vec::new()),
            Shape::Record => Frame::Record(Vec::new()),
        };
        self.stack.push((key.map(str::to_owned), frame));
    }

    fn close(&mut self) {
        let Some((key, frame)) = self.stack.pop() else {
            return;
        };
        let node = match frame {
            Frame::List(items) => Node::List(items),
            Frame::Record(entries) => Node::Record(entries),
        };
        self.attach(key.as_deref(), node);
    }
}

/// Serializer for one top-level call.
///
/// Holds a fresh [`ReferenceTracker`]; create one per logging call. The
/// registry is shared configuration and only read.
#[derive(Debug)]
pub struct Serializer<'r> {
    registry: &'r TransformRegistry,
    references: ReferenceTracker,
}

impl<'r> Serializer<'r> {
    /// Create a serializer with an empty tracker.
    #[must_use]
    pub fn new(registry: &'r TransformRegistry) -> Self {
        Self {
            registry,
            references: ReferenceTracker::new(),
        }
    }

    /// Serialize one value into a tree.
    pub fn to_tree(&mut self, value: &Value) -> Node {
        let mut builder = TreeBuilder::new();
        self.walk(value, "", None, &mut builder);
        builder
            .finish()
            .pop()
            .unwrap_or(Node::Scalar(Scalar::Undefined))
    }

    /// Serialize one value into a JSON document.
    pub fn to_json(&mut self, value: &Value) -> String {
        let mut writer = JsonWriter::new();
        self.walk(value, "", None, &mut writer);
        writer.finish()
    }

    /// Serialize a call's argument list into trees.
    ///
    /// Every argument is a root at path `""` and all of them share this
    /// serializer's tracker, so an argument repeated later in the same call
    /// renders as `[REF => .]`.
    pub fn args_to_tree(&mut self, args: &[Value]) -> Vec<Node> {
        let mut builder = TreeBuilder::new();
        for arg in args {
            self.walk(arg, "", None, &mut builder);
        }
        builder.finish()
    }

    /// Serialize a call's argument list as a JSON array.
    pub fn args_to_json(&mut self, args: &[Value]) -> String {
        let mut writer = JsonWriter::new();
        writer.open(None, Shape::List);
        for arg in args {
            self.walk(arg, "", None, &mut writer);
        }
        writer.close();
        writer.finish()
    }

    /// Walk `value` at `path`, feeding `sink`.
    pub fn walk<S: Sink>(&mut self, value: &Value, path: &str, key: Option<&str>, sink: &mut S) {
        if let Some(first) = self.references.seen(value) {
            sink.reference(key, first);
            return;
        }

        let data = self.registry.apply(value);
        let data: &Value = &data;

        if let Value::Scalar(scalar) = data {
            sink.scalar(key, scalar);
            return;
        }

        self.references.record(value, path);
        // A transform may hand back a different composite; it is bound to
        // the same path so that it is not walked twice either.
        self.references.record(data, path);

        match data {
            Value::List(list) => {
                sink.open(key, Shape::List);
                for (index, item) in list.values().iter().enumerate() {
                    let child = format!("{path}[{index}]");
                    self.walk(item, &child, None, sink);
                }
                sink.close();
            },
            Value::Record(record) => {
                sink.open(key, Shape::Record);
                for (name, item) in &record.entries() {
                    let child = if path.is_empty() {
                        name.clone()
                    } else {
                        format!("{path}.{name}")
                    };
                    self.walk(item, &child, Some(name.as_str()), sink);
                }
                sink.close();
            },
            Value::Object(object) => {
                let view = object.structural_view();
                self.walk(&view, path, key, sink);
            },
            Value::Scalar(_) => {},
        }
    }

    /// Forget every visited value.
    pub fn reset(&mut self) {
        self.references.reset();
    }
}

/// Serialize `value` into a tree with a fresh tracker.
#[must_use]
pub fn to_tree(registry: &TransformRegistry, value: &Value) -> Node {
    Serializer::new(registry).to_tree(value)
}

/// Serialize `value` into JSON with a fresh tracker.
#[must_use]
pub fn to_json(registry: &TransformRegistry, value: &Value) -> String {
    Serializer::new(registry).to_json(value)
}

/// Serialize a call's argument list with a fresh tracker.
#[must_use]
pub fn serialize_args(registry: &TransformRegistry, args: &[Value]) -> Vec<Node> {
    Serializer::new(registry).args_to_tree(args)
}
