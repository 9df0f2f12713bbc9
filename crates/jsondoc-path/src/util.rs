use crate::types::{Path, PathStep};
use crate::PointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into a [`Path`].
///
/// Tokens that are valid array indices become [`PathStep::Index`], everything
/// else becomes [`PathStep::Key`].
///
/// # Errors
///
/// Returns [`PointerError::NotAbsolute`] if the pointer is non-empty and does
/// not start with `/`.
pub fn parse_json_pointer(pointer: &str) -> Result<Path, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::NotAbsolute(pointer.to_string()));
    }
    Ok(pointer[1..]
        .split('/')
        .map(|token| {
            let token = unescape_component(token);
            if is_valid_index(&token) {
                match token.parse::<usize>() {
                    Ok(idx) => PathStep::Index(idx),
                    Err(_) => PathStep::Key(token),
                }
            } else {
                PathStep::Key(token)
            }
        })
        .collect())
}

/// Format a [`Path`] into a JSON Pointer string.
///
/// Returns an empty string for the root path.
pub fn format_json_pointer(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Key(key) => out.push_str(&escape_component(key)),
            PathStep::Index(idx) => out.push_str(&idx.to_string()),
        }
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Get the parent path of a given path, or `None` for the root.
pub fn parent(path: &[PathStep]) -> Option<&[PathStep]> {
    if path.is_empty() {
        return None;
    }
    Some(&path[..path.len() - 1])
}

/// Returns `path` extended by one step.
pub fn child(path: &[PathStep], step: impl Into<PathStep>) -> Path {
    let mut out = Vec::with_capacity(path.len() + 1);
    out.extend_from_slice(path);
    out.push(step.into());
    out
}

/// Check if a string represents a valid non-negative integer array index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}
