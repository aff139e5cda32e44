//! Store - owns the current state, serializes dispatch and notifies subscribers
//!
//! ## Dispatch cycle
//!
//! ```text
//! dispatch(action)
//!  ├── acquire dispatch lock (one dispatch at a time)
//!  ├── next = current.apply(action)        (pure reducer)
//!  ├── publish next                        (atomic pointer swap)
//!  ├── notify subscribers in order         (they re-read state())
//!  └── drain actions queued by subscribers, one cycle each
//! ```
//!
//! Readers never take the dispatch lock: `state()` loads the published
//! snapshot handle and always sees either the previous or the next state.

use crate::config::StoreConfig;
use crate::error::Result;
use crate::journal::{Journal, JournalEntry};
use crate::subscription::{Callback, Registry, Subscription};
use arc_swap::ArcSwap;
use nodestorage_core::{NodeStorageAction, State};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use tracing::{debug, trace, warn};

/// Thread-safe, action-driven node store
///
/// Share it between threads with `Arc<Store>` or scoped borrows. Callbacks
/// that need to read the store should capture a `Weak<Store>`; capturing an
/// `Arc<Store>` keeps the store alive through its own registry.
///
/// ```
/// use nodestorage_core::{NodeId, NodeStorageAction};
/// use nodestorage_hub::Store;
///
/// let store = Store::new();
/// store.dispatch(NodeStorageAction::create_node(7u64, "cube")).unwrap();
///
/// assert_eq!(store.state().nodes().get(NodeId::new(7)).unwrap().model, "cube");
/// assert_eq!(store.version(), 1);
/// ```
pub struct Store {
    /// Published snapshot (source of truth for readers)
    current: ArcSwap<State>,
    /// Held for the whole reduce + publish + notify cycle
    dispatch_lock: Mutex<()>,
    /// Thread currently inside a dispatch cycle
    owner: Mutex<Option<ThreadId>>,
    /// Actions dispatched from subscribers during a cycle
    pending: Mutex<VecDeque<NodeStorageAction>>,
    /// Number of actions applied
    version: AtomicU64,
    journal: Mutex<Journal>,
    subscribers: Arc<Mutex<Registry>>,
    config: StoreConfig,
}

impl Store {
    /// Create a store with an empty state
    pub fn new() -> Self {
        Self::with_config(State::new(), StoreConfig::default())
    }

    /// Create a store with an initial state
    pub fn with_state(state: State) -> Self {
        Self::with_config(state, StoreConfig::default())
    }

    /// Create a store with an initial state and configuration
    pub fn with_config(state: State, config: StoreConfig) -> Self {
        debug!(
            store = %config.name,
            nodes = state.nodes().len(),
            journal_capacity = config.journal_capacity,
            "store created"
        );
        Self {
            current: ArcSwap::from_pointee(state),
            dispatch_lock: Mutex::new(()),
            owner: Mutex::new(None),
            pending: Mutex::new(VecDeque::new()),
            version: AtomicU64::new(0),
            journal: Mutex::new(Journal::new(config.journal_capacity)),
            subscribers: Arc::new(Mutex::new(Registry::default())),
            config,
        }
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the current state snapshot
    ///
    /// The snapshot is immutable; later dispatches publish a new one instead
    /// of changing it.
    pub fn state(&self) -> Arc<State> {
        self.current.load_full()
    }

    /// Number of actions applied since construction
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Recently applied actions, oldest first
    ///
    /// Empty unless `journal_capacity` is set in the [`StoreConfig`].
    pub fn journal(&self) -> Vec<JournalEntry> {
        self.journal.lock().entries()
    }

    /// Apply an action, publish the result and notify subscribers
    ///
    /// Concurrent calls are serialized. When called from a subscriber on the
    /// dispatching thread, the action is queued and applied after the current
    /// notification pass, before the outer `dispatch` returns.
    pub fn dispatch(&self, action: impl Into<NodeStorageAction>) -> Result<()> {
        let action = action.into();

        if self.is_dispatching_thread() {
            trace!(store = %self.config.name, %action, "queued reentrant dispatch");
            self.pending.lock().push_back(action);
            return Ok(());
        }

        let _lock = self.dispatch_lock.lock();
        let _owner = OwnerGuard::enter(self);

        let mut next = Some(action);
        while let Some(action) = next {
            self.apply(action);
            next = self.pending.lock().pop_front();
        }
        Ok(())
    }

    /// Register a callback invoked after every dispatch
    ///
    /// Callbacks run on the dispatching thread, in registration order.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(callback);
        let id = self.subscribers.lock().add(callback);
        trace!(store = %self.config.name, subscription = %id, "subscribed");
        Subscription::new(id, &self.subscribers)
    }

    /// One reduce + publish + notify cycle; caller holds the dispatch lock
    fn apply(&self, action: NodeStorageAction) {
        let version = self.version.load(Ordering::Relaxed) + 1;
        debug!(
            store = %self.config.name,
            action = action.kind(),
            node = %action.node_id(),
            version,
            "dispatch"
        );
        self.journal.lock().record(version, &action);

        let next = State::clone(&self.current.load()).apply(action);
        self.current.store(Arc::new(next));
        self.version.store(version, Ordering::Release);

        self.notify();
    }

    fn notify(&self) {
        // Snapshot so callbacks may subscribe/unsubscribe without deadlocking
        let callbacks = self.subscribers.lock().callbacks();
        for callback in &callbacks {
            callback();
        }
        trace!(
            store = %self.config.name,
            subscribers = callbacks.len(),
            "notified"
        );
    }

    fn is_dispatching_thread(&self) -> bool {
        *self.owner.lock() == Some(thread::current().id())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks the current thread as the dispatcher for the duration of a cycle
struct OwnerGuard<'a> {
    store: &'a Store,
}

impl<'a> OwnerGuard<'a> {
    fn enter(store: &'a Store) -> Self {
        *store.owner.lock() = Some(thread::current().id());
        Self { store }
    }
}

impl Drop for OwnerGuard<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            let dropped = {
                let mut pending = self.store.pending.lock();
                let n = pending.len();
                pending.clear();
                n
            };
            warn!(
                store = %self.store.config.name,
                dropped,
                "subscriber panicked during dispatch; queued actions discarded"
            );
        }
        *self.store.owner.lock() = None;
    }
}
