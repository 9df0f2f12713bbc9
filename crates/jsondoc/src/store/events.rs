use serde_json::Value;

use crate::error::SubscriberError;

/// Change delivered to every subscriber after the store commits.
///
/// Subscribers receive their own copy of the data and cannot write it back;
/// changes go through the store's update operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A new canonical document was committed.
    Loaded { text: String, document: Value },
    /// The document was reset to the empty mapping.
    Cleared,
}

/// A derived subsystem kept in step with the store.
pub trait Subscriber: Send {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    fn notify(&mut self, event: &StoreEvent) -> Result<(), SubscriberError>;
}

/// A subscriber that failed during the most recent delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub subscriber_id: u64,
    pub name: String,
    pub error: SubscriberError,
}

pub(crate) struct FnSubscriber<F> {
    pub(crate) name: String,
    pub(crate) listener: F,
}

impl<F> Subscriber for FnSubscriber<F>
where
    F: FnMut(&StoreEvent) + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&mut self, event: &StoreEvent) -> Result<(), SubscriberError> {
        (self.listener)(event);
        Ok(())
    }
}
