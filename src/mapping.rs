//! Tag-to-category mapping backed by a JSON file.
//!
//! The file is read and parsed on every resolution so edits take effect on
//! the next poll without a restart. A missing or malformed file degrades to
//! an empty table; resolution never fails past its caller.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::domain::{Category, TagId};

/// Handle on the JSON mapping file.
///
/// Holds only the path; every [`MappingStore::resolve`] call reads the file
/// synchronously, so this must only be used from the blocking poll thread.
#[derive(Debug, Clone)]
pub struct MappingStore {
    path: PathBuf,
}

impl MappingStore {
    /// Creates a store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves a tag identifier to its category.
    ///
    /// Returns `None` when the identifier is not mapped, the file is
    /// missing, or the file is malformed. The latter two are logged.
    #[must_use]
    pub fn resolve(&self, tag: &TagId) -> Option<Category> {
        self.load().remove(&tag.to_string())
    }

    /// Reads and parses the mapping file, degrading to an empty table on
    /// any failure.
    fn load(&self) -> HashMap<String, Category> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "mapping file not found");
                return HashMap::new();
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read mapping file");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "malformed mapping file");
                HashMap::new()
            }
        }
    }
}
