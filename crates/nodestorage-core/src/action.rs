//! Actions: serializable intents that drive state transitions

use crate::{Metadata, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Create (or overwrite) a node and its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNode {
    pub id: NodeId,
    pub model: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Remove a node and its metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveNode {
    pub id: NodeId,
}

/// Merge properties into a node's metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMetadata {
    pub id: NodeId,
    pub metadata: Metadata,
}

/// The closed set of actions the store accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeStorageAction {
    CreateNode(CreateNode),
    RemoveNode(RemoveNode),
    UpdateMetadata(UpdateMetadata),
}

impl NodeStorageAction {
    /// Create a node with empty metadata
    pub fn create_node(id: impl Into<NodeId>, model: impl Into<String>) -> Self {
        NodeStorageAction::CreateNode(CreateNode {
            id: id.into(),
            model: model.into(),
            metadata: Metadata::new(),
        })
    }

    /// Remove a node
    pub fn remove_node(id: impl Into<NodeId>) -> Self {
        NodeStorageAction::RemoveNode(RemoveNode { id: id.into() })
    }

    /// Merge metadata into a node's entry
    pub fn update_metadata(id: impl Into<NodeId>, metadata: Metadata) -> Self {
        NodeStorageAction::UpdateMetadata(UpdateMetadata {
            id: id.into(),
            metadata,
        })
    }

    /// Attach metadata to a `CreateNode` action
    ///
    /// Other action kinds are returned unchanged.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        if let NodeStorageAction::CreateNode(create) = &mut self {
            create.metadata = metadata;
        }
        self
    }

    /// The node this action targets
    pub fn node_id(&self) -> NodeId {
        match self {
            NodeStorageAction::CreateNode(a) => a.id,
            NodeStorageAction::RemoveNode(a) => a.id,
            NodeStorageAction::UpdateMetadata(a) => a.id,
        }
    }

    /// The action's type tag, as used by foreign records
    pub fn kind(&self) -> &'static str {
        match self {
            NodeStorageAction::CreateNode(_) => "CreateNode",
            NodeStorageAction::RemoveNode(_) => "RemoveNode",
            NodeStorageAction::UpdateMetadata(_) => "UpdateMetadata",
        }
    }
}

impl fmt::Display for NodeStorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.node_id())
    }
}

impl From<CreateNode> for NodeStorageAction {
    fn from(action: CreateNode) -> Self {
        NodeStorageAction::CreateNode(action)
    }
}

impl From<RemoveNode> for NodeStorageAction {
    fn from(action: RemoveNode) -> Self {
        NodeStorageAction::RemoveNode(action)
    }
}

impl From<UpdateMetadata> for NodeStorageAction {
    fn from(action: UpdateMetadata) -> Self {
        NodeStorageAction::UpdateMetadata(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let create = NodeStorageAction::create_node(7u64, "cube");
        assert_eq!(create.kind(), "CreateNode");
        assert_eq!(create.node_id(), NodeId::new(7));

        let remove = NodeStorageAction::remove_node(7u64);
        assert_eq!(remove.kind(), "RemoveNode");

        let update = NodeStorageAction::update_metadata(7u64, Metadata::new());
        assert_eq!(update.kind(), "UpdateMetadata");
        assert_eq!(format!("{}", update), "UpdateMetadata(node:7)");
    }

    #[test]
    fn test_with_metadata_only_touches_create() {
        let metadata = Metadata::new().with("color", "red");

        let create = NodeStorageAction::create_node(1u64, "cube").with_metadata(metadata.clone());
        match create {
            NodeStorageAction::CreateNode(a) => assert_eq!(a.metadata, metadata),
            other => panic!("unexpected action {other:?}"),
        }

        let remove = NodeStorageAction::remove_node(1u64).with_metadata(metadata);
        assert_eq!(remove, NodeStorageAction::remove_node(1u64));
    }

    #[test]
    fn test_create_node_metadata_defaults_when_absent() {
        let action: CreateNode = ron::from_str(r#"(id: 3, model: "cube")"#).unwrap();
        assert_eq!(action.id, NodeId::new(3));
        assert!(action.metadata.is_empty());
    }
}
