//! Core logic behind the command-line tools.
//!
//! - `jsondoc-set`  — write a value at a JSON Pointer and print the document
//! - `jsondoc-node` — print the address and editable rows of a node

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use jsondoc_path::{parse_json_pointer, render_address, PointerError};
use thiserror::Error;

use crate::projection::{flatten, Projection};
use crate::store::{DocumentStore, StoreOptions};
use crate::tree::TreeView;
use crate::StoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error("no node at {0}")]
    NoNode(String),
}

/// Starts stderr logging. The level comes from `RUST_LOG`, default `warn`.
pub fn init_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .start()
}

/// [`init_logging`] for the binaries: a logger that fails to start is
/// reported on stderr and the tool carries on without logging.
pub fn start_logging() -> Option<LoggerHandle> {
    match init_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {e}");
            None
        }
    }
}

/// Loads `doc`, writes `raw` at `pointer`, and returns the canonical result.
pub fn update_document(
    doc: &str,
    pointer: &str,
    raw: &str,
    options: StoreOptions,
) -> Result<String, CliError> {
    let path = parse_json_pointer(pointer)?;
    let mut store = DocumentStore::new(options);
    store.load(doc)?;
    store.apply_path_update(&path, raw)?;
    Ok(store.read().to_string())
}

/// Describes the node at `pointer`: its address, then one `key: value` line
/// per editable row, or the node's block text.
pub fn describe_node(doc: &str, pointer: &str, options: StoreOptions) -> Result<String, CliError> {
    let path = parse_json_pointer(pointer)?;
    let tree = TreeView::new();
    let mut store = DocumentStore::new(options);
    store.subscribe(tree.clone());
    store.load(doc)?;

    let node = tree
        .node_at(&path)
        .ok_or_else(|| CliError::NoNode(render_address(&path)))?;
    let mut lines = vec![render_address(&node.path)];
    match flatten(&node) {
        Projection::Rows(rows) => {
            lines.extend(rows.into_iter().map(|row| format!("{}: {}", row.key, row.value)))
        }
        Projection::Block(text) => lines.push(text),
    }
    Ok(lines.join("\n"))
}
