//! Immutable state snapshots
//!
//! A [`State`] pairs the node collection with the metadata collection. Both
//! are held behind `Arc`, so cloning a state is O(1) and a reduced state
//! shares every collection the action did not touch with its predecessor.

use crate::{Error, MetadataCollection, NodeCollection, NodeId, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One consistent snapshot of all nodes and their metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    nodes: Arc<NodeCollection>,
    metadata: Arc<MetadataCollection>,
}

impl State {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from existing collections
    pub fn from_parts(nodes: NodeCollection, metadata: MetadataCollection) -> Self {
        Self {
            nodes: Arc::new(nodes),
            metadata: Arc::new(metadata),
        }
    }

    /// All live nodes
    pub fn nodes(&self) -> &NodeCollection {
        &self.nodes
    }

    /// Metadata for all nodes
    pub fn metadata(&self) -> &MetadataCollection {
        &self.metadata
    }

    /// Copy-on-write access for the reducer
    pub(crate) fn nodes_mut(&mut self) -> &mut NodeCollection {
        Arc::make_mut(&mut self.nodes)
    }

    /// Copy-on-write access for the reducer
    pub(crate) fn metadata_mut(&mut self) -> &mut MetadataCollection {
        Arc::make_mut(&mut self.metadata)
    }

    /// Check whether two states share the same node storage
    pub fn shares_nodes_with(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Check whether two states share the same metadata storage
    pub fn shares_metadata_with(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.metadata, &other.metadata)
    }

    /// Ids that carry metadata without a corresponding node
    ///
    /// Metadata may be staged ahead of node creation, so these are legal.
    pub fn orphaned_metadata(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.metadata.ids().filter(|id| !self.nodes.contains(*id))
    }

    /// Fail if any metadata entry lacks a node
    pub fn ensure_consistent(&self) -> Result<()> {
        let orphans: Vec<String> = self.orphaned_metadata().map(|id| id.to_string()).collect();
        if orphans.is_empty() {
            Ok(())
        } else {
            Err(Error::InvariantViolation(format!(
                "metadata without node: {}",
                orphans.join(", ")
            )))
        }
    }
}
