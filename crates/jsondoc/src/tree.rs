//! Tree builder: the node graph derived from a document.
//!
//! Every mapping becomes a [`Node`] whose rows are its entries. Sequences are
//! not nodes themselves; each element becomes a node addressed by its index.
//! Scalars that are not mapping entries (sequence elements, a scalar root)
//! become nodes with a single keyless row.

use std::sync::{Arc, Mutex, PoisonError};

use jsondoc_path::{Path, PathStep};
use serde_json::Value;

use crate::error::SubscriberError;
use crate::store::{StoreEvent, Subscriber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
}

impl ValueKind {
    pub fn of(val: &Value) -> Self {
        match val {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Mappings and sequences are containers; everything else is a scalar.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Object | ValueKind::Array)
    }
}

/// One child entry of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    /// Mapping key, or `None` for the single row of a scalar node.
    pub key: Option<String>,
    pub kind: ValueKind,
    pub value: Value,
}

impl NodeRow {
    pub fn keyed(key: impl Into<String>, value: &Value) -> Self {
        Self {
            key: Some(key.into()),
            kind: ValueKind::of(value),
            value: value.clone(),
        }
    }

    pub fn unkeyed(value: &Value) -> Self {
        Self {
            key: None,
            kind: ValueKind::of(value),
            value: value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Position in depth-first build order.
    pub id: usize,
    /// Location of this node in the document.
    pub path: Path,
    pub kind: ValueKind,
    pub rows: Vec<NodeRow>,
}

/// Builds the node graph for `doc`.
pub fn build_nodes(doc: &Value) -> Vec<Node> {
    let mut nodes = Vec::new();
    visit(doc, &mut Vec::new(), &mut nodes);
    nodes
}

fn visit(val: &Value, path: &mut Path, nodes: &mut Vec<Node>) {
    match val {
        Value::Object(map) => {
            let rows = map.iter().map(|(k, v)| NodeRow::keyed(k, v)).collect();
            push_node(nodes, path, ValueKind::Object, rows);
            for (key, child) in map {
                if ValueKind::of(child).is_container() {
                    path.push(PathStep::Key(key.clone()));
                    visit(child, path, nodes);
                    path.pop();
                }
            }
        }
        Value::Array(arr) => {
            for (idx, child) in arr.iter().enumerate() {
                path.push(PathStep::Index(idx));
                visit(child, path, nodes);
                path.pop();
            }
        }
        scalar => push_node(nodes, path, ValueKind::of(scalar), vec![NodeRow::unkeyed(scalar)]),
    }
}

fn push_node(nodes: &mut Vec<Node>, path: &Path, kind: ValueKind, rows: Vec<NodeRow>) {
    nodes.push(Node {
        id: nodes.len(),
        path: path.clone(),
        kind,
        rows,
    });
}

#[derive(Debug, Default)]
struct TreeState {
    nodes: Vec<Node>,
    rebuilds: u64,
}

/// Subscriber that keeps the node graph for the current document.
///
/// Clones share the same graph, so a host keeps one handle and gives another
/// to the store.
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    state: Arc<Mutex<TreeState>>,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.with_state(|s| s.nodes.clone())
    }

    /// The node located at `path`, if the document has one there.
    pub fn node_at(&self, path: &[PathStep]) -> Option<Node> {
        self.with_state(|s| s.nodes.iter().find(|n| n.path == path).cloned())
    }

    pub fn len(&self) -> usize {
        self.with_state(|s| s.nodes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rebuilds performed so far.
    pub fn rebuilds(&self) -> u64 {
        self.with_state(|s| s.rebuilds)
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut TreeState) -> T) -> T {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Subscriber for TreeView {
    fn name(&self) -> &str {
        "tree"
    }

    fn notify(&mut self, event: &StoreEvent) -> Result<(), SubscriberError> {
        match event {
            StoreEvent::Loaded { document, .. } => {
                let nodes = build_nodes(document);
                self.with_state(|s| {
                    s.nodes = nodes;
                    s.rebuilds += 1;
                });
            }
            StoreEvent::Cleared => self.with_state(|s| s.nodes.clear()),
        }
        Ok(())
    }
}
