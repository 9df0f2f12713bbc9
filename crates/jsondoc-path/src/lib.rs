//! Document paths.
//!
//! A [`Path`] is a list of [`PathStep`]s, each a mapping key or a sequence
//! index, addressing one location inside a JSON document. This crate reads
//! ([`get`]) and writes ([`set`]) through paths, renders them as address
//! strings ([`render_address`]) and converts them to and from JSON Pointer
//! (RFC 6901) strings.
//!
//! # Example
//!
//! ```
//! use jsondoc_path::{get, parse_json_pointer, render_address, with_value};
//! use serde_json::json;
//!
//! let doc = json!({"user": {"name": "Ann", "tags": ["x"]}});
//! let path = parse_json_pointer("/user/name").unwrap();
//!
//! let doc = with_value(doc, &path, json!("Bob")).unwrap();
//! assert_eq!(get(&doc, &path), Some(&json!("Bob")));
//! assert_eq!(render_address(&path), "$[\"user\"][\"name\"]");
//! ```

use thiserror::Error;

pub mod address;
pub mod get;
pub mod set;
pub mod types;
pub mod util;
pub mod validate;

pub use address::{render_address, ROOT_MARKER};
pub use get::{get, get_mut};
pub use set::{kind_name, set, with_value};
pub use types::{Path, PathStep};
pub use util::{
    child, escape_component, format_json_pointer, is_root, is_valid_index, parent,
    parse_json_pointer, unescape_component,
};
pub use validate::{validate_path, MAX_PATH_LENGTH};

/// A path that cannot be resolved or created.
///
/// `depth` is the zero-based position of the offending step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathTraversalError {
    #[error("index {index} at depth {depth} is past the end of a sequence of length {len}")]
    IndexOutOfBounds {
        depth: usize,
        index: usize,
        len: usize,
    },
    #[error("cannot step into a {found} at depth {depth}")]
    NotAContainer { depth: usize, found: &'static str },
    #[error("key {key:?} at depth {depth} cannot address a sequence")]
    KeyOnSequence { depth: usize, key: String },
    #[error("path of {len} steps exceeds the maximum depth of {max}")]
    PathTooLong { len: usize, max: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("json pointer must be absolute or empty: {0:?}")]
    NotAbsolute(String),
}
