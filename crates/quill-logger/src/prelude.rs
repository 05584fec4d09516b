//! Prelude module - commonly used types for convenient import.
//!
//! Use `use quill_logger::prelude::*;` to import all essential types.

// Loggers
pub use crate::{Logger, LoggerError, LoggerOptions, LoggerResult, Loggers};

// Transports
pub use crate::{StderrTransport, StdoutTransport, Transport, WriterTransport};

// Core types needed to call a logger
pub use quill_core::{Level, Logline, TransformRegistry, Value};
