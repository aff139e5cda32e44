//! Foreign-facing wrapper around [`Store`]

use crate::adapter::action_from_record;
use crate::error::Result;
use crate::export::state_to_value;
use crate::loader::action_from_ron;
use crate::value::{Value, ValueMap};
use nodestorage_core::State;
use nodestorage_hub::{Store, Subscription};
use std::sync::Arc;

/// The store surface a scripting binding exposes
///
/// Accepts untyped records, and hands state back either as a typed
/// snapshot or as a foreign value tree.
pub struct ScriptStore {
    store: Store,
}

impl ScriptStore {
    /// Wrap a new empty store
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Wrap an existing store
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// The underlying typed store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatch a foreign action record
    pub fn dispatch(&self, record: &ValueMap) -> Result<()> {
        let action = action_from_record(record)?;
        self.store.dispatch(action)?;
        Ok(())
    }

    /// Dispatch an action record written in RON
    pub fn dispatch_ron(&self, text: &str) -> Result<()> {
        let action = action_from_ron(text)?;
        self.store.dispatch(action)?;
        Ok(())
    }

    /// The current typed snapshot
    pub fn state(&self) -> Arc<State> {
        self.store.state()
    }

    /// The current snapshot as a foreign value
    pub fn state_value(&self) -> Value {
        state_to_value(&self.store.state())
    }

    /// Register a change callback
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }
}

impl Default for ScriptStore {
    fn default() -> Self {
        Self::new()
    }
}
