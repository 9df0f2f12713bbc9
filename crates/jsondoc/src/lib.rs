//! In-memory JSON document store.
//!
//! - [`DocumentStore`] holds the canonical text of one document, applies
//!   path-addressed updates, and notifies [`Subscriber`]s after every commit.
//! - [`TreeView`] and [`ContentsMirror`] are the two derived subsystems: the
//!   node graph used for display and the text handed to persistence.
//! - [`flatten`] projects a [`Node`] into editable [`Row`]s and
//!   [`render_address`] renders its location.
//! - [`EditSession`] buffers row edits until they are committed.
//!
//! # Example
//!
//! ```
//! use jsondoc::{DocumentStore, EditSession, StoreOptions, TreeView};
//! use jsondoc_path::path;
//! use serde_json::json;
//!
//! let tree = TreeView::new();
//! let mut store = DocumentStore::new(StoreOptions::default());
//! store.subscribe(tree.clone());
//! store.load(r#"{"user":{"name":"Ann","tags":["x"]}}"#).unwrap();
//!
//! let node = tree.node_at(&path!["user"]).unwrap();
//! let mut session = EditSession::open(&node);
//! session.set("name", "Bob").unwrap();
//! assert!(session.commit(&mut store).is_complete());
//!
//! assert_eq!(
//!     store.document().unwrap(),
//!     json!({"user": {"name": "Bob", "tags": ["x"]}})
//! );
//! ```

pub mod canonical;
pub mod cli;
pub mod error;
pub mod literal;
pub mod mirror;
pub mod projection;
pub mod session;
pub mod store;
pub mod tree;

pub use error::{SessionError, StoreError, SubscriberError};
pub use literal::{parse_literal, Literal};
pub use mirror::ContentsMirror;
pub use projection::{display_content, editable_rows, flatten, render_address, Projection, Row};
pub use session::EditSession;
pub use store::{
    CommitReport, DeliveryFailure, DocumentStore, RowOutcome, StoreEvent, StoreOptions,
    StoreState, Subscriber,
};
pub use tree::{build_nodes, Node, NodeRow, TreeView, ValueKind};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
