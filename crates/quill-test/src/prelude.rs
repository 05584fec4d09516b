//! Prelude module - commonly used types for convenient import.
//!
//! Use `use quill_test::prelude::*;` to import every helper.

pub use crate::fixtures::*;
pub use crate::harness::*;
pub use crate::mocks::*;
