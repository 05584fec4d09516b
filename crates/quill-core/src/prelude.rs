//! Prelude module - commonly used types for convenient import.
//!
//! Use `use quill_core::prelude::*;` to import all essential types.

// Values
pub use crate::{Callable, ErrorValue, Kind, List, Object, Record, Scalar, Value};

// Serialization
pub use crate::{Node, Serializer, TransformRegistry, serialize_args, to_json, to_tree};

// Formatting
pub use crate::{Callsite, Level, LevelError, LogRecord, Logline, OutputMode};

// Defaults
pub use crate::{default_json_logline, default_logline, default_registry, separated_logline};
