use serde_json::Value;

use crate::types::PathStep;
use crate::util::is_valid_index;

/// Resolves `step` as a sequence index.
///
/// Key steps are accepted when their text is a canonical index.
pub(crate) fn sequence_index(step: &PathStep) -> Option<usize> {
    match step {
        PathStep::Index(idx) => Some(*idx),
        PathStep::Key(key) if is_valid_index(key) => key.parse().ok(),
        PathStep::Key(_) => None,
    }
}

/// Get a value from a document by path.
///
/// Returns `None` if any step does not exist.
pub fn get<'a>(val: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(sequence_index(step)?)?,
            Value::Object(map) => match step {
                PathStep::Key(key) => map.get(key)?,
                PathStep::Index(_) => map.get(&step.to_key())?,
            },
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get_mut(sequence_index(step)?)?,
            Value::Object(map) => map.get_mut(&step.to_key())?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_get_root() {
        assert_eq!(get(&json!(123), &[]), Some(&json!(123)));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"user": {"tags": ["x", "y"]}});
        assert_eq!(get(&doc, &path!["user", "tags", 1usize]), Some(&json!("y")));
        assert_eq!(get(&doc, &path!["user", "tags", "0"]), Some(&json!("x")));
        assert_eq!(get(&doc, &path!["user", "tags", 2usize]), None);
        assert_eq!(get(&doc, &path!["user", "missing"]), None);
    }

    #[test]
    fn test_get_index_on_mapping() {
        let doc = json!({"0": "zero"});
        assert_eq!(get(&doc, &path![0usize]), Some(&json!("zero")));
    }

    #[test]
    fn test_get_through_scalar() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &path!["a", "b"]), None);
    }

    #[test]
    fn test_get_mut_updates() {
        let mut doc = json!({"a": [1, 2]});
        *get_mut(&mut doc, &path!["a", 0usize]).unwrap() = json!(9);
        assert_eq!(doc, json!({"a": [9, 2]}));
    }
}
