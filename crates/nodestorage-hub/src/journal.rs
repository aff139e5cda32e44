//! In-memory journal of applied actions
//!
//! Keeps the most recent dispatches for auditing and for rebuilding a state
//! with [`nodestorage_core::replay`]. Nothing is written to disk.

use chrono::{DateTime, Utc};
use nodestorage_core::NodeStorageAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One applied action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store version produced by this action
    pub version: u64,
    /// The action that was applied
    pub action: NodeStorageAction,
    /// Wall-clock time the action was applied
    pub recorded_at: DateTime<Utc>,
}

/// Bounded ring of journal entries
#[derive(Debug, Clone)]
pub(crate) struct Journal {
    capacity: usize,
    entries: VecDeque<JournalEntry>,
}

impl Journal {
    /// Create an empty journal; storage grows with use up to `capacity`
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    /// Record an action, evicting the oldest entry when full
    pub(crate) fn record(&mut self, version: u64, action: &NodeStorageAction) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry {
            version,
            action: action.clone(),
            recorded_at: Utc::now(),
        });
    }

    pub(crate) fn entries(&self) -> Vec<JournalEntry> {
        self.entries.iter().cloned().collect()
    }
}
