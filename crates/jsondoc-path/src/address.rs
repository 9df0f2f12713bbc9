//! Human-readable address strings.
//!
//! An address is the root marker `$` followed by one bracketed segment per
//! path step: `$`, `$["user"]`, `$["user"]["tags"][0]`. Addresses are display
//! metadata and are never parsed back into paths.

use crate::types::PathStep;

/// Marker that anchors every address string.
pub const ROOT_MARKER: &str = "$";

/// Renders `path` as an address string.
///
/// Keys are JSON-quoted, indices are bare.
///
/// ```
/// use jsondoc_path::{path, render_address};
///
/// assert_eq!(render_address(&[]), "$");
/// assert_eq!(render_address(&path!["a", 0usize]), "$[\"a\"][0]");
/// ```
pub fn render_address(path: &[PathStep]) -> String {
    let mut out = String::from(ROOT_MARKER);
    for step in path {
        out.push_str(&step.to_string());
    }
    out
}
