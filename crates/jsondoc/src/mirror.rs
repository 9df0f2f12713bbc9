//! Persisted-contents mirror.
//!
//! Holds the latest canonical text for whatever persists the document. It
//! follows loads only; clearing the document leaves the last contents in
//! place.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::SubscriberError;
use crate::store::{StoreEvent, Subscriber};

#[derive(Debug, Default)]
struct MirrorState {
    contents: Option<String>,
    revision: u64,
}

/// Subscriber mirroring the canonical text. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ContentsMirror {
    state: Arc<Mutex<MirrorState>>,
}

impl ContentsMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently mirrored text, or `None` before the first load.
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// Number of loads mirrored so far.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MirrorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Subscriber for ContentsMirror {
    fn name(&self) -> &str {
        "contents"
    }

    fn notify(&mut self, event: &StoreEvent) -> Result<(), SubscriberError> {
        if let StoreEvent::Loaded { text, .. } = event {
            let mut state = self.lock();
            state.contents = Some(text.clone());
            state.revision += 1;
        }
        Ok(())
    }
}
