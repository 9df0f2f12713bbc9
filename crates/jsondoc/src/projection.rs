//! Node projection: the editable view of a [`Node`].

use serde_json::{Map, Value};

use crate::literal::display_text;
use crate::tree::Node;

pub use jsondoc_path::render_address;

/// One editable scalar field: a key and its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub value: String,
}

impl Row {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// What an edit view shows for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Keyed scalar children, in document order.
    Rows(Vec<Row>),
    /// A bare value shown as pretty JSON; not editable.
    Block(String),
}

/// Flattens `node` into editable rows.
///
/// Mapping and sequence children are left out; they are nodes of their own.
/// A node whose only row has no key is a bare value and yields a
/// [`Projection::Block`] instead.
pub fn flatten(node: &Node) -> Projection {
    if let [only] = node.rows.as_slice() {
        if only.key.is_none() {
            return Projection::Block(pretty(&only.value));
        }
    }
    Projection::Rows(
        node.rows
            .iter()
            .filter(|row| !row.kind.is_container())
            .filter_map(|row| {
                let key = row.key.clone()?;
                Some(Row {
                    key,
                    value: display_text(&row.value),
                })
            })
            .collect(),
    )
}

/// Editable rows of `node`; empty for block nodes.
pub fn editable_rows(node: &Node) -> Vec<Row> {
    match flatten(node) {
        Projection::Rows(rows) => rows,
        Projection::Block(_) => Vec::new(),
    }
}

/// Read-only content of `node`.
///
/// `{}` for a node without rows, the block text for a bare value, otherwise
/// a JSON mapping of the node's scalar children.
pub fn display_content(node: &Node) -> String {
    if node.rows.is_empty() {
        return "{}".to_string();
    }
    if let Projection::Block(text) = flatten(node) {
        return text;
    }
    let scalars: Map<String, Value> = node
        .rows
        .iter()
        .filter(|row| !row.kind.is_container())
        .filter_map(|row| Some((row.key.clone()?, row.value.clone())))
        .collect();
    pretty(&Value::Object(scalars))
}

/// Address string of `node`.
pub fn node_address(node: &Node) -> String {
    render_address(&node.path)
}

fn pretty(val: &Value) -> String {
    // Serializing a `Value` into a string cannot fail.
    serde_json::to_string_pretty(val).unwrap_or_else(|_| val.to_string())
}
