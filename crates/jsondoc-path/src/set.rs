//! Path-addressed writes.
//!
//! Placement rules:
//! - Missing mapping keys along the way are created as empty mappings and
//!   appended after the existing keys.
//! - A sequence index equal to the sequence length appends; anything past
//!   that is rejected, so sequences never become sparse.
//! - Existing scalars are never stepped through.
//! - An existing terminal value is overwritten in place, keeping its position.

use serde_json::{Map, Value};

use crate::get::sequence_index;
use crate::types::PathStep;
use crate::PathTraversalError;

/// Writes `value` at `path` inside `doc` and returns the value it replaced.
///
/// The empty path replaces the whole document.
///
/// # Errors
///
/// Returns a [`PathTraversalError`] when the path cannot be resolved. Errors
/// are raised before any intermediate mapping is created, so `doc` is left
/// untouched.
///
/// # Example
///
/// ```
/// use jsondoc_path::{path, set};
/// use serde_json::json;
///
/// let mut doc = json!({"user": {"name": "Ann"}});
/// let old = set(&mut doc, &path!["user", "name"], json!("Bob")).unwrap();
/// assert_eq!(old, Some(json!("Ann")));
/// assert_eq!(doc, json!({"user": {"name": "Bob"}}));
/// ```
pub fn set(
    doc: &mut Value,
    path: &[PathStep],
    value: Value,
) -> Result<Option<Value>, PathTraversalError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(Some(std::mem::replace(doc, value)));
    };
    let mut current = doc;
    for (depth, step) in parents.iter().enumerate() {
        current = descend(current, step, depth)?;
    }
    write_terminal(current, last, parents.len(), value)
}

/// Pure form of [`set`]: consumes `doc` and returns the updated document.
pub fn with_value(
    mut doc: Value,
    path: &[PathStep],
    value: Value,
) -> Result<Value, PathTraversalError> {
    set(&mut doc, path, value)?;
    Ok(doc)
}

/// Name used in diagnostics for the type of `val`.
pub fn kind_name(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn descend<'a>(
    current: &'a mut Value,
    step: &PathStep,
    depth: usize,
) -> Result<&'a mut Value, PathTraversalError> {
    match current {
        Value::Object(map) => Ok(map
            .entry(step.to_key())
            .or_insert_with(|| Value::Object(Map::new()))),
        Value::Array(arr) => {
            let index = resolve_index(step, depth)?;
            let len = arr.len();
            if index > len {
                return Err(PathTraversalError::IndexOutOfBounds { depth, index, len });
            }
            if index == len {
                arr.push(Value::Object(Map::new()));
            }
            Ok(&mut arr[index])
        }
        other => Err(PathTraversalError::NotAContainer {
            depth,
            found: kind_name(other),
        }),
    }
}

fn write_terminal(
    target: &mut Value,
    step: &PathStep,
    depth: usize,
    value: Value,
) -> Result<Option<Value>, PathTraversalError> {
    match target {
        Value::Object(map) => Ok(map.insert(step.to_key(), value)),
        Value::Array(arr) => {
            let index = resolve_index(step, depth)?;
            let len = arr.len();
            if index < len {
                Ok(Some(std::mem::replace(&mut arr[index], value)))
            } else if index == len {
                arr.push(value);
                Ok(None)
            } else {
                Err(PathTraversalError::IndexOutOfBounds { depth, index, len })
            }
        }
        other => Err(PathTraversalError::NotAContainer {
            depth,
            found: kind_name(other),
        }),
    }
}

fn resolve_index(step: &PathStep, depth: usize) -> Result<usize, PathTraversalError> {
    sequence_index(step).ok_or_else(|| PathTraversalError::KeyOnSequence {
        depth,
        key: step.to_key(),
    })
}
