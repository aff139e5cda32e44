//! The pure reducer: `(State, Action) -> State`
//!
//! Reducing never fails and never performs side effects:
//! - `CreateNode` upserts the node; re-creating a live node replaces its
//!   metadata, creating a fresh node merges over any staged metadata
//! - `RemoveNode` drops the node and its metadata; absent ids are a no-op
//! - `UpdateMetadata` merges into the entry, creating it if needed, even when
//!   no node exists yet for that id

use crate::{CreateNode, Node, NodeStorageAction, RemoveNode, State, UpdateMetadata};

/// Compute the next state from the current one and an action
///
/// The input is left untouched; collections the action does not modify are
/// shared with the result.
pub fn reduce(state: &State, action: &NodeStorageAction) -> State {
    state.clone().apply(action.clone())
}

/// Fold a sequence of actions over an initial state
pub fn replay<I>(initial: State, actions: I) -> State
where
    I: IntoIterator<Item = NodeStorageAction>,
{
    actions
        .into_iter()
        .fold(initial, |state, action| state.apply(action))
}

impl State {
    /// Consume this state and produce the next one
    pub fn apply(mut self, action: NodeStorageAction) -> State {
        match action {
            NodeStorageAction::CreateNode(CreateNode {
                id,
                model,
                metadata,
            }) => {
                let existed = self.nodes_mut().insert(id, Node { model }).is_some();
                if existed {
                    self.metadata_mut().insert(id, metadata);
                } else {
                    self.metadata_mut().merge(id, metadata);
                }
            }
            NodeStorageAction::RemoveNode(RemoveNode { id }) => {
                // Only detach shared storage when there is something to remove
                if self.nodes().contains(id) {
                    self.nodes_mut().remove(id);
                }
                if self.metadata().contains(id) {
                    self.metadata_mut().remove(id);
                }
            }
            NodeStorageAction::UpdateMetadata(UpdateMetadata { id, metadata }) => {
                self.metadata_mut().merge(id, metadata);
            }
        }
        self
    }
}
