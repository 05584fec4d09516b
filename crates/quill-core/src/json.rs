//! Single-pass JSON document writer.
//!
//! Elements are appended to one growing buffer. Delimiters are decided by a
//! stack of "first element of the current container" flags, so the document
//! is valid as soon as every opened container is closed, with no second pass.

use crate::encode::{write_json, write_quoted};
use crate::value::Scalar;

/// Container shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `[` … `]`
    List,
    /// `{` … `}`
    Record,
}

impl Shape {
    fn open(self) -> char {
        match self {
            Self::List => '[',
            Self::Record => '{',
        }
    }

    fn close(self) -> char {
        match self {
            Self::List => ']',
            Self::Record => '}',
        }
    }
}

/// Streaming JSON writer.
///
/// Values written at the top level are comma separated, so writing several
/// root values yields a comma-joined sequence.
#[derive(Debug)]
pub struct JsonWriter {
    out: String,
    /// One flag per open container, plus the root level at the bottom.
    first: Vec<bool>,
    shapes: Vec<Shape>,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: String::new(),
            first: vec![true],
            shapes: Vec::new(),
        }
    }

    /// Emit the separator for a new element and its key, if any.
    fn begin_element(&mut self, key: Option<&str>) {
        if let Some(first) = self.first.last_mut() {
            if *first {
                *first = false;
            } else {
                self.out.push(',');
            }
        }
        if let Some(key) = key {
            write_quoted(&mut self.out, key);
            self.out.push(':');
        }
    }

    /// Append a scalar literal.
    pub fn scalar(&mut self, key: Option<&str>, scalar: &Scalar) {
        self.begin_element(key);
        write_json(&mut self.out, scalar);
    }

    /// Append a string literal.
    pub fn string(&mut self, key: Option<&str>, text: &str) {
        self.begin_element(key);
        write_quoted(&mut self.out, text);
    }

    /// Open a container.
    pub fn open(&mut self, key: Option<&str>, shape: Shape) {
        self.begin_element(key);
        self.out.push(shape.open());
        self.first.push(true);
        self.shapes.push(shape);
    }

    /// Close the innermost open container.
    pub fn close(&mut self) {
        if let Some(shape) = self.shapes.pop() {
            self.first.pop();
            self.out.push(shape.close());
        }
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.shapes.len()
    }

    /// Close any container left open and return the document.
    #[must_use]
    pub fn finish(mut self) -> String {
        while !self.shapes.is_empty() {
            self.close();
        }
        self.out
    }
}
