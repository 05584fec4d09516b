//! Serialized tree produced by text/tree mode.

use crate::encode::encode_text;
use crate::json::{JsonWriter, Shape};
use crate::references::marker;
use crate::value::{List, Record, Scalar, Value};

/// Acyclic mirror of a serialized value.
///
/// Repeat visits are replaced by [`Node::Reference`], so a tree can always
/// be rendered without a cycle guard.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal value, kept typed for later encoding.
    Scalar(Scalar),
    /// Placeholder for a composite first seen at the given path.
    Reference(String),
    /// Ordered list.
    List(Vec<Node>),
    /// Keyed record in enumeration order.
    Record(Vec<(String, Node)>),
}

impl Node {
    /// Child of a record by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Record(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Child of a list by index.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Self> {
        match self {
            Self::List(items) => items.get(index),
            _ => None,
        }
    }

    /// Render as a JSON document.
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut writer = JsonWriter::new();
        self.write(&mut writer, None);
        writer.finish()
    }

    /// Render as a fragment of a text line: scalars in text form, reference
    /// markers as their text, containers as JSON.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Scalar(scalar) => encode_text(scalar).into_owned(),
            Self::Reference(path) => marker(path),
            Self::List(_) | Self::Record(_) => self.to_json(),
        }
    }

    pub(crate) fn write(&self, writer: &mut JsonWriter, key: Option<&str>) {
        match self {
            Self::Scalar(scalar) => writer.scalar(key, scalar),
            Self::Reference(path) => writer.string(key, &marker(path)),
            Self::List(items) => {
                writer.open(key, Shape::List);
                for item in items {
                    item.write(writer, None);
                }
                writer.close();
            },
            Self::Record(entries) => {
                writer.open(key, Shape::Record);
                for (k, v) in entries {
                    v.write(writer, Some(k));
                }
                writer.close();
            },
        }
    }
}

impl From<Node> for Value {
    /// Rebuild a value; reference markers become text.
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(scalar) => Self::Scalar(scalar),
            Node::Reference(path) => Self::text(marker(&path)),
            Node::List(items) => Self::List(items.into_iter().collect::<List>()),
            Node::Record(entries) => Self::Record(entries.into_iter().collect::<Record>()),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        Self::from(node.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Record(vec![
            ("a".to_owned(), Node::Scalar(Scalar::Number(1.0))),
            (
                "b".to_owned(),
                Node::List(vec![
                    Node::Scalar(Scalar::Text("x".to_owned())),
                    Node::Reference(String::new()),
                ]),
            ),
        ])
    }

    #[test]
    fn test_to_json() {
        assert_eq!(sample().to_json(), r#"{"a":1,"b":["x","[REF => .]"]}"#);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Node::Scalar(Scalar::Text("raw".to_owned())).to_text(), "raw");
        assert_eq!(Node::Reference("a.b".to_owned()).to_text(), "[REF => a.b]");
        assert_eq!(sample().to_text(), sample().to_json());
    }

    #[test]
    fn test_lookup() {
        let node = sample();
        assert_eq!(
            node.get("b").and_then(|b| b.at(0)),
            Some(&Node::Scalar(Scalar::Text("x".to_owned())))
        );
        assert!(node.get("missing").is_none());
    }

    #[test]
    fn test_into_value() {
        let value = Value::from(sample());
        let record = value.as_record().unwrap();
        let list = record.get("b").unwrap();
        let marker = list.as_list().unwrap().get(1).unwrap();
        assert_eq!(marker.as_text(), Some("[REF => .]"));
    }
}
