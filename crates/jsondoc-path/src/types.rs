//! Type definitions for document paths.

use std::fmt;

/// A step in a document path.
///
/// Either a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// A document path. The empty path addresses the whole document.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Returns the key text, if this is a key step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(key) => Some(key),
            PathStep::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index step.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Key(_) => None,
            PathStep::Index(idx) => Some(*idx),
        }
    }

    /// The text this step uses when it addresses a mapping.
    ///
    /// Index steps applied to a mapping use the decimal form of the index.
    pub fn to_key(&self) -> String {
        match self {
            PathStep::Key(key) => key.clone(),
            PathStep::Index(idx) => idx.to_string(),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

/// Renders the bracketed segment used by address strings: `["key"]` or `[0]`.
impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => {
                // serde_json never fails to encode a plain string.
                let quoted = serde_json::to_string(key).map_err(|_| fmt::Error)?;
                write!(f, "[{quoted}]")
            }
            PathStep::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

/// Builds a [`Path`] from a list of mixed steps.
///
/// ```
/// use jsondoc_path::{path, PathStep};
///
/// let p = path!["user", 0usize, "name"];
/// assert_eq!(p[1], PathStep::Index(0));
/// ```
#[macro_export]
macro_rules! path {
    () => { ::std::vec::Vec::<$crate::PathStep>::new() };
    ($($step:expr),+ $(,)?) => {
        ::std::vec![$($crate::PathStep::from($step)),+]
    };
}
