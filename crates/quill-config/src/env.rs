//! Environment variable fallbacks.
//!
//! Environment variables are a **fallback**, not an override: they only
//! apply to fields that no configuration file set. Values that do not parse
//! for their field are ignored with a warning.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::merge::{ConfigLayer, FieldSources};
use crate::validate::KNOWN_LEVELS;

/// Expected shape of an environment value.
#[derive(Debug, Clone, Copy)]
enum EnvKind {
    Level,
    Bool,
}

/// Mapping from environment variable name to config field path.
struct EnvMapping {
    var_name: &'static str,
    field_path: &'static str,
    kind: EnvKind,
}

/// All supported environment variables.
const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: "LOG_LEVEL",
        field_path: "logging.level",
        kind: EnvKind::Level,
    },
    EnvMapping {
        var_name: "LOG_COLORS",
        field_path: "logging.colorize",
        kind: EnvKind::Bool,
    },
    EnvMapping {
        var_name: "LOG_JSON",
        field_path: "logging.json",
        kind: EnvKind::Bool,
    },
    EnvMapping {
        var_name: "LOG_CALLSITES",
        field_path: "logging.callsites",
        kind: EnvKind::Bool,
    },
];

/// Apply environment variable fallbacks to fields that were **not** set by
/// any configuration file.
///
/// Returns the number of variables applied.
pub fn apply_env_fallbacks<S: ::std::hash::BuildHasher>(
    merged: &mut toml::Value,
    sources: &mut FieldSources,
    env_vars: &HashMap<String, String, S>,
) -> usize {
    let mut count: usize = 0;

    for mapping in ENV_MAPPINGS {
        if sources
            .get(mapping.field_path)
            .is_some_and(|layer| layer.is_file())
        {
            continue;
        }

        let Some(raw) = env_vars.get(mapping.var_name) else {
            continue;
        };

        let Some(value) = coerce(mapping.kind, raw) else {
            warn!(
                var = mapping.var_name,
                value = raw.as_str(),
                "ignoring invalid environment value"
            );
            continue;
        };

        debug!(
            var = mapping.var_name,
            field = mapping.field_path,
            "applying env var fallback"
        );
        set_field(merged, mapping.field_path, value);
        sources.insert(mapping.field_path.to_owned(), ConfigLayer::Environment);
        count = count.saturating_add(1);
    }

    count
}

fn coerce(kind: EnvKind, raw: &str) -> Option<toml::Value> {
    match kind {
        EnvKind::Level => {
            let level = raw.trim().to_lowercase();
            KNOWN_LEVELS
                .contains(&level.as_str())
                .then_some(toml::Value::String(level))
        },
        EnvKind::Bool => match raw {
            "true" => Some(toml::Value::Boolean(true)),
            "false" => Some(toml::Value::Boolean(false)),
            _ => None,
        },
    }
}

/// Set a dotted field in the tree, creating intermediate tables.
fn set_field(root: &mut toml::Value, path: &str, value: toml::Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;
    while let Some(segment) = segments.next() {
        let Some(table) = current.as_table_mut() else {
            return;
        };
        if segments.peek().is_none() {
            table.insert(segment.to_owned(), value);
            return;
        }
        current = table
            .entry(segment)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }
}

/// Collect all current environment variables into a map.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars().collect()
}
