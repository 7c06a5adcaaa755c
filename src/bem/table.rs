//! The style lookup table emitted by the styling build step.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::TableLoadError;

/// A mapping from BEM keys to final, build-resolved class names.
///
/// Keys follow the BEM composition convention (`block`, `block__element`,
/// `block_modifier`, `block__element_modifier`); values are the opaque
/// class names the CSS build produced for them. The table is read-only
/// to resolution: a missing key resolves to the empty string instead of
/// failing.
///
/// Tables usually come from the build's JSON manifest
/// ([`StyleTable::from_json_str`] / [`StyleTable::from_path`]), but can
/// also be assembled by hand with the fluent [`add`](StyleTable::add),
/// which is convenient in tests.
///
/// # Example
///
/// ```rust
/// use bemuse::StyleTable;
///
/// let table = StyleTable::new()
///     .add("card", "c1")
///     .add("card__title", "c2");
///
/// assert_eq!(table.resolve("card"), "c1");
/// assert_eq!(table.resolve("card__body"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    entries: HashMap<String, String>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated table for chaining.
    ///
    /// Re-adding a key replaces the previous class name.
    pub fn add(mut self, key: impl Into<String>, class: impl Into<String>) -> Self {
        self.entries.insert(key.into(), class.into());
        self
    }

    /// Looks up a key, returning `""` when absent.
    ///
    /// The empty-string miss is part of the resolution contract: callers
    /// drop empty tokens rather than handling an error.
    pub fn resolve(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the table contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the table's keys.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Parses a table from a JSON manifest string.
    ///
    /// The manifest is a flat object of string values, the shape a
    /// CSS-modules build emits:
    ///
    /// ```json
    /// { "card": "c1", "card__title": "c2" }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError::Parse`] if the content is not such an object.
    pub fn from_json_str(json: &str) -> Result<Self, TableLoadError> {
        serde_json::from_str(json).map_err(|e| TableLoadError::Parse {
            message: e.to_string(),
        })
    }

    /// Reads and parses a JSON manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError::Read`] if the file cannot be read, or
    /// [`TableLoadError::Parse`] if its content is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }
}

impl From<HashMap<String, String>> for StyleTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, String)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
