//! Quill Test - shared test utilities.
//!
//! Fixtures for cyclic value graphs and fixed log records, a transport that
//! captures lines in memory, and temp-dir helpers for configuration tests.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! quill-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use quill_test::{CaptureTransport, self_referencing_record};
//!
//! #[test]
//! fn test_cycle_is_logged() {
//!     let capture = CaptureTransport::new();
//!     let logger = Logger::new("t").with_transport(capture.handle());
//!     logger.info(&[self_referencing_record().into()]);
//!     assert!(capture.last().unwrap().contains("[REF => .]"));
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;
