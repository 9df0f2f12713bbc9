use jsondoc_path::PathTraversalError;
use thiserror::Error;

/// Errors reported by [`DocumentStore`](crate::DocumentStore) operations.
///
/// None of these leave the store holding a partially written document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document text is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("path traversal failed: {0}")]
    Traversal(#[from] PathTraversalError),
    #[error("document could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// Stable short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Parse(_) => "parse",
            StoreError::Traversal(_) => "traversal",
            StoreError::Serialize(_) => "serialize",
        }
    }
}

/// Errors reported by an [`EditSession`](crate::EditSession).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no editable row named {0:?}")]
    UnknownRow(String),
}

/// A subscriber refused or failed to handle a store event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SubscriberError(pub String);
