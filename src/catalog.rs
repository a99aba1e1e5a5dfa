//! Translation catalog loading and flattening.
//!
//! The catalog is a nested JSON object mapping translation keys to either
//! human-readable strings or further nested objects. It is loaded once per
//! run and flattened into dot-notation keys (`"auth.login"`), the form the
//! matcher scans against.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// One entry of the flattened catalog: a dotted key path and its leaf value.
#[derive(Debug, Clone)]
pub struct FlatEntry {
    pub key: String,
    pub value: String,
}

/// The flattened translation catalog.
///
/// Entries are kept in depth-first document order of the source JSON, so a
/// scan over the catalog sees keys in the order they appear in the file.
/// Read-only after construction.
#[derive(Debug, Default)]
pub struct FlatCatalog {
    entries: Vec<FlatEntry>,
}

impl FlatCatalog {
    /// Load and flatten a catalog JSON file.
    ///
    /// Fails if the file cannot be read, is not valid JSON, or its top
    /// level is not an object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        if !json.is_object() {
            bail!(
                "Catalog file '{}' must contain a JSON object at the top level.",
                path.display()
            );
        }

        Ok(Self::from_value(&json))
    }

    /// Flatten an in-memory catalog tree.
    pub fn from_value(root: &Value) -> Self {
        let mut entries = Vec::new();
        flatten(root, String::new(), &mut entries);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog document order.
    pub fn iter(&self) -> impl Iterator<Item = &FlatEntry> {
        self.entries.iter()
    }
}

fn flatten(value: &Value, prefix: String, entries: &mut Vec<FlatEntry>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(val, new_prefix, entries);
            }
        }
        Value::String(s) => {
            entries.push(FlatEntry {
                key: prefix,
                value: s.clone(),
            });
        }
        // Non-string leaves (numbers, arrays, null) are not matchable.
        _ => {}
    }
}
