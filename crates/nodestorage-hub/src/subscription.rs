//! Subscriber registry and subscription handles

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::trace;

/// A change callback; receives no payload and re-reads `Store::state()`
pub(crate) type Callback = Arc<dyn Fn() + Send + Sync>;

/// Identifier of a registered subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription:{}", self.0)
    }
}

/// Callbacks in registration order
#[derive(Default)]
pub(crate) struct Registry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Registry {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Snapshot of the callbacks for one notification pass
    pub(crate) fn callbacks(&self) -> Vec<Callback> {
        self.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Dropping the handle unregisters the callback. A callback dropping its own
/// handle mid-notification still lets the rest of that pass run.
#[must_use = "dropping a Subscription immediately unsubscribes it"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: &Arc<Mutex<Registry>>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
        }
    }

    /// The subscriber's id
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Keep the callback registered for the lifetime of the store
    pub fn detach(mut self) {
        trace!(subscription = %self.id, "detached");
        self.registry = Weak::new();
    }

    /// Unregister now; same as dropping the handle
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.lock().remove(self.id) {
                trace!(subscription = %self.id, "unsubscribed");
            }
        }
    }
}
