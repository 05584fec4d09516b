//! Quill Core - value serialization and log line formatting.
//!
//! This crate provides:
//! - A dynamic [`Value`] model for log arguments, including shared (and
//!   possibly cyclic) lists and records
//! - The [`TransformRegistry`], an ordered fold of predicate/transform pairs
//! - Cycle-safe structural serialization to a [`Node`] tree or to JSON
//! - Scalar encoding rules for text lines and JSON documents
//! - [`LogRecord`] and the [`Logline`] formatting pipeline
//! - Severity [`Level`]s and the shipped default registry and loglines
//!
//! Nothing here performs I/O. Rendered lines are handed to a transport by
//! the logger crate.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod defaults;
pub mod encode;
pub mod error;
pub mod json;
pub mod level;
pub mod logline;
pub mod node;
pub mod record;
pub mod references;
pub mod registry;
pub mod serializer;
pub mod value;

pub use defaults::{default_json_logline, default_logline, default_registry, separated_logline};
pub use encode::{encode_json, encode_text};
pub use error::{LevelError, LevelResult};
pub use json::{JsonWriter, Shape};
pub use level::Level;
pub use logline::{Extractor, Logline, OutputMode};
pub use node::Node;
pub use record::{Callsite, LogRecord};
pub use references::ReferenceTracker;
pub use registry::{Transform, TransformRegistry};
pub use serializer::{Serializer, Sink, TreeBuilder, serialize_args, to_json, to_tree};
pub use value::{Callable, CallableKind, ErrorValue, Kind, List, Object, Record, Scalar, Value};
