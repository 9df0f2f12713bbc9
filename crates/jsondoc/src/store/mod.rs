//! The document store.
//!
//! [`DocumentStore`] owns the canonical text of one JSON document. Every
//! write parses the current text, applies a path-addressed change,
//! re-serializes the result and commits it as a whole, then fans a
//! [`StoreEvent`] out to the registered subscribers in subscription order.
//!
//! The store is single-writer: hosts construct one instance and hand it to
//! the views that need it. Subscribers get fresh copies of the data and can
//! only request changes through the store's own operations.

use std::collections::BTreeMap;

use jsondoc_path::{child, get, render_address, validate_path, with_value, PathStep};
use log::{debug, error, warn};
use serde_json::Value;

use crate::canonical::{parse_text, to_canonical_text};
use crate::error::StoreError;
use crate::literal::parse_literal;
use crate::projection::Row;

mod events;
mod options;

pub use events::{DeliveryFailure, StoreEvent, Subscriber};
pub use options::StoreOptions;

use events::FnSubscriber;

/// Lifecycle of a [`DocumentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Nothing has been loaded yet; the document is the empty mapping.
    Uninitialized,
    /// A load is in progress.
    Loading,
    /// A document has been loaded or cleared.
    Ready,
}

/// Result of one row in a multi-row commit.
#[derive(Debug)]
pub struct RowOutcome {
    pub key: String,
    pub result: Result<(), StoreError>,
}

/// Per-row results of [`DocumentStore::commit_rows`], in commit order.
#[derive(Debug, Default)]
pub struct CommitReport {
    pub outcomes: Vec<RowOutcome>,
}

impl CommitReport {
    /// Number of rows written.
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Rows that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &StoreError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (o.key.as_str(), err)))
    }

    /// `true` when every row was written.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

pub struct DocumentStore {
    text: String,
    state: StoreState,
    options: StoreOptions,
    next_subscriber_id: u64,
    subscribers: BTreeMap<u64, Box<dyn Subscriber>>,
    delivery_failures: Vec<DeliveryFailure>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("subscribers", &self.subscribers.len())
            .field("bytes", &self.text.len())
            .finish()
    }
}

impl DocumentStore {
    pub fn new(options: StoreOptions) -> Self {
        Self {
            text: "{}".to_string(),
            state: StoreState::Uninitialized,
            options,
            next_subscriber_id: 1,
            subscribers: BTreeMap::new(),
            delivery_failures: Vec::new(),
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == StoreState::Ready
    }

    // ── Subscribers ───────────────────────────────────────────────────────

    /// Registers `subscriber` and returns its id.
    ///
    /// Subscribers are notified in registration order.
    pub fn subscribe<S>(&mut self, subscriber: S) -> u64
    where
        S: Subscriber + 'static,
    {
        let id = self.next_subscriber_id;
        self.next_subscriber_id = self.next_subscriber_id.saturating_add(1);
        self.subscribers.insert(id, Box::new(subscriber));
        id
    }

    /// Registers a closure that sees every event and never fails.
    pub fn on_change<F>(&mut self, listener: F) -> u64
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        let name = format!("listener-{}", self.next_subscriber_id);
        self.subscribe(FnSubscriber { name, listener })
    }

    pub fn unsubscribe(&mut self, subscriber_id: u64) -> bool {
        self.subscribers.remove(&subscriber_id).is_some()
    }

    /// Subscribers that failed while handling the most recent event.
    pub fn last_delivery_failures(&self) -> &[DeliveryFailure] {
        &self.delivery_failures
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// The current canonical text.
    pub fn read(&self) -> &str {
        &self.text
    }

    /// A fresh parse of the current canonical text.
    pub fn document(&self) -> Result<Value, StoreError> {
        parse_text(&self.text)
    }

    /// The value at `path`, if present.
    pub fn get(&self, path: &[PathStep]) -> Option<Value> {
        let doc = self.document().ok()?;
        get(&doc, path).cloned()
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Replaces the document with `text`.
    ///
    /// The text is re-serialized into canonical form before it is committed,
    /// so loading the store's own [`read`](Self::read) output is a no-op on
    /// the document.
    ///
    /// # Errors
    ///
    /// [`StoreError::Parse`] if `text` is not valid JSON. The store keeps its
    /// previous text and state.
    pub fn load(&mut self, text: &str) -> Result<(), StoreError> {
        let previous = self.state;
        self.state = StoreState::Loading;
        let document = match parse_text(text) {
            Ok(document) => document,
            Err(err) => {
                self.state = previous;
                warn!(
                    "event=store_load module=store status=error kind={} error={}",
                    err.kind(),
                    err
                );
                return Err(err);
            }
        };
        self.commit_document(document, previous)
    }

    /// Resets the document to the empty mapping.
    pub fn clear(&mut self) {
        self.text = "{}".to_string();
        self.state = StoreState::Ready;
        debug!("event=store_clear module=store status=ok");
        self.notify(StoreEvent::Cleared);
    }

    /// Writes `value` at `path`.
    ///
    /// The empty path replaces the whole document.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Traversal`] if `path` cannot be resolved or is too deep.
    /// - [`StoreError::Parse`] if the store's own text fails to parse; the
    ///   update is abandoned.
    ///
    /// On error the document is unchanged and no event is sent.
    pub fn set_value(&mut self, path: &[PathStep], value: Value) -> Result<(), StoreError> {
        let address = render_address(path);
        if let Err(err) = validate_path(path, self.options.max_path_depth) {
            warn!(
                "event=store_update module=store status=error path={} error={}",
                address, err
            );
            return Err(err.into());
        }
        let current = match self.document() {
            Ok(current) => current,
            Err(err) => {
                error!(
                    "event=store_update module=store status=aborted path={} error={}",
                    address, err
                );
                return Err(err);
            }
        };
        let next = match with_value(current, path, value) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    "event=store_update module=store status=error path={} error={}",
                    address, err
                );
                return Err(err.into());
            }
        };
        let previous = self.state;
        self.state = StoreState::Loading;
        self.commit_document(next, previous)?;
        debug!("event=store_update module=store status=ok path={}", address);
        Ok(())
    }

    /// Writes edited text at `path`.
    ///
    /// `raw` is read as a JSON literal when it is one (`42`, `true`, `null`,
    /// `"quoted"`, `[1, 2]`, ...) and stored as a plain string otherwise.
    pub fn apply_path_update(&mut self, path: &[PathStep], raw: &str) -> Result<(), StoreError> {
        let literal = parse_literal(raw);
        if literal.is_raw() {
            debug!(
                "event=literal_fallback module=store path={} bytes={}",
                render_address(path),
                raw.len()
            );
        }
        self.set_value(path, literal.into_value())
    }

    /// Writes each row at `base + [row.key]`, one after another.
    ///
    /// Each row sees the document left by the rows before it. A failed row is
    /// logged and skipped; rows already written stay written.
    pub fn commit_rows(&mut self, base: &[PathStep], rows: &[Row]) -> CommitReport {
        let mut report = CommitReport::default();
        for row in rows {
            let path = child(base, row.key.as_str());
            let result = self.apply_path_update(&path, &row.value);
            if let Err(err) = &result {
                warn!(
                    "event=commit_row module=store status=skipped path={} kind={} error={}",
                    render_address(&path),
                    err.kind(),
                    err
                );
            }
            report.outcomes.push(RowOutcome {
                key: row.key.clone(),
                result,
            });
        }
        debug!(
            "event=commit_rows module=store status={} applied={} total={}",
            if report.is_complete() { "ok" } else { "partial" },
            report.applied(),
            rows.len()
        );
        report
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Serializes `document`, commits it, and notifies subscribers.
    ///
    /// `fallback` is restored if serialization fails.
    fn commit_document(&mut self, document: Value, fallback: StoreState) -> Result<(), StoreError> {
        let text = match to_canonical_text(&document, self.options.indent) {
            Ok(text) => text,
            Err(err) => {
                self.state = fallback;
                warn!("event=store_commit module=store status=error error={}", err);
                return Err(err);
            }
        };
        self.text = text.clone();
        self.state = StoreState::Ready;
        debug!(
            "event=store_load module=store status=ok bytes={}",
            self.text.len()
        );
        self.notify(StoreEvent::Loaded { text, document });
        Ok(())
    }

    fn notify(&mut self, event: StoreEvent) {
        self.delivery_failures.clear();
        for (id, subscriber) in self.subscribers.iter_mut() {
            if let Err(error) = subscriber.notify(&event) {
                warn!(
                    "event=subscriber_notify module=store status=error subscriber={} id={} error={}",
                    subscriber.name(),
                    id,
                    error
                );
                self.delivery_failures.push(DeliveryFailure {
                    subscriber_id: *id,
                    name: subscriber.name().to_string(),
                    error,
                });
            }
        }
    }
}
