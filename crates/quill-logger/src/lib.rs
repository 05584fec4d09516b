//! Quill Logger - category loggers on top of `quill-core`.
//!
//! This crate provides:
//! - [`Logger`], which filters by severity, serializes arguments, renders a
//!   record and hands the line to a [`Transport`]
//! - [`Loggers`], a bounded FIFO store of loggers keyed by category
//! - Level colors and the stdout, stderr and writer transports
//! - Macros (`info!`, `warn!`, ...) that record the calling module
//!
//! # Example
//!
//! ```rust,no_run
//! use quill_logger::{Loggers, info};
//!
//! let loggers = Loggers::new();
//! let db = loggers.get("db").unwrap();
//! info!(db, "connected in", 12, "ms");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod color;
pub mod error;
pub mod logger;
mod macros;
pub mod options;
pub mod registry;
pub mod transport;

pub use color::{colorize, level_color};
pub use error::{LoggerError, LoggerResult};
pub use logger::Logger;
pub use options::{FormatFn, LoggerOptions};
pub use registry::Loggers;
pub use transport::{StderrTransport, StdoutTransport, Transport, WriterTransport};

#[doc(hidden)]
pub mod __private {
    pub use quill_core::{Callsite, Level, Value};
}
