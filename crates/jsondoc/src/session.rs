//! Edit sessions.
//!
//! An [`EditSession`] buffers edits to one node's rows. Nothing reaches the
//! store until [`EditSession::commit`]; dropping or cancelling the session
//! discards the buffer.

use indexmap::IndexMap;
use jsondoc_path::{render_address, Path, PathStep};
use log::debug;

use crate::error::SessionError;
use crate::projection::{editable_rows, Row};
use crate::store::{CommitReport, DocumentStore};
use crate::tree::Node;

#[derive(Debug, Clone)]
pub struct EditSession {
    path: Path,
    original: IndexMap<String, String>,
    rows: IndexMap<String, String>,
}

impl EditSession {
    /// Opens a session on the editable rows of `node`.
    pub fn open(node: &Node) -> Self {
        let original: IndexMap<String, String> = editable_rows(node)
            .into_iter()
            .map(|row| (row.key, row.value))
            .collect();
        Self {
            path: node.path.clone(),
            rows: original.clone(),
            original,
        }
    }

    /// Path of the node being edited.
    pub fn path(&self) -> &[PathStep] {
        &self.path
    }

    pub fn address(&self) -> String {
        render_address(&self.path)
    }

    /// Current buffered rows, in node order.
    pub fn rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .map(|(key, value)| Row::new(key.clone(), value.clone()))
            .collect()
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.rows.get(key).map(String::as_str)
    }

    /// Replaces the buffered text of row `key`.
    pub fn set(&mut self, key: &str, text: impl Into<String>) -> Result<(), SessionError> {
        let slot = self
            .rows
            .get_mut(key)
            .ok_or_else(|| SessionError::UnknownRow(key.to_string()))?;
        *slot = text.into();
        Ok(())
    }

    /// A node with no editable rows cannot be edited.
    pub fn is_editable(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.rows != self.original
    }

    /// Drops every buffered edit.
    pub fn reset(&mut self) {
        self.rows = self.original.clone();
    }

    pub fn cancel(self) {
        debug!(
            "event=session_cancel module=session path={} dirty={}",
            self.address(),
            self.is_dirty()
        );
    }

    /// Rows whose text differs from the snapshot taken at open.
    pub fn changed_rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .filter(|(key, value)| self.original.get(*key) != Some(*value))
            .map(|(key, value)| Row::new(key.clone(), value.clone()))
            .collect()
    }

    /// Writes the changed rows into `store`, one update per row.
    ///
    /// Untouched rows are not rewritten, so a string that reads as a literal
    /// (`"42"`, `"true"`) keeps its type. The session is closed whether or
    /// not every row succeeds; the report lists the rows that failed.
    pub fn commit(self, store: &mut DocumentStore) -> CommitReport {
        let report = store.commit_rows(&self.path, &self.changed_rows());
        debug!(
            "event=session_commit module=session path={} applied={} failed={}",
            self.address(),
            report.applied(),
            report.outcomes.len() - report.applied()
        );
        report
    }
}
