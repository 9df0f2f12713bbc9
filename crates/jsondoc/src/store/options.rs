use serde::Deserialize;

use jsondoc_path::MAX_PATH_LENGTH;

/// Store configuration.
///
/// Deserializable so hosts can embed it in their own configuration files;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Spaces per nesting level in the canonical serialized form.
    pub indent: usize,
    /// Longest path accepted by path updates.
    pub max_path_depth: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            max_path_depth: MAX_PATH_LENGTH,
        }
    }
}

impl StoreOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_max_path_depth(mut self, max_path_depth: usize) -> Self {
        self.max_path_depth = max_path_depth;
        self
    }
}
