//! Validation functions for paths.

use crate::types::PathStep;
use crate::PathTraversalError;

/// Default maximum path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a path against a maximum depth.
///
/// # Errors
///
/// Returns [`PathTraversalError::PathTooLong`] if `path` has more than `max`
/// steps.
///
/// ```
/// use jsondoc_path::{validate_path, PathStep, MAX_PATH_LENGTH};
///
/// validate_path(&[PathStep::from("foo")], MAX_PATH_LENGTH).unwrap();
/// let deep: Vec<PathStep> = (0..300usize).map(PathStep::from).collect();
/// validate_path(&deep, MAX_PATH_LENGTH).unwrap_err();
/// ```
pub fn validate_path(path: &[PathStep], max: usize) -> Result<(), PathTraversalError> {
    if path.len() > max {
        return Err(PathTraversalError::PathTooLong {
            len: path.len(),
            max,
        });
    }
    Ok(())
}
