//! Deep merge of TOML layers.
//!
//! The merge operates on raw [`toml::Value`] trees rather than deserialized
//! structs, so a key missing from a higher layer never overrides the value
//! set by a lower one.

mod deep;
mod types;

pub use deep::{deep_merge_tracking, record_layer};
pub use types::{ConfigLayer, FieldSources};
