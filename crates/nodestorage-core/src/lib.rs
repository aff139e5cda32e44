//! NodeStorage Core - Node/metadata state model with a pure reducer
//!
//! This crate provides the data model and transition logic for the node store:
//! - Node identity (`NodeId`) and typed metadata values (`MetadataProperty`)
//! - Keyed collections (`NodeCollection`, `Metadata`, `MetadataCollection`)
//! - Immutable, structurally shared snapshots (`State`)
//! - The closed action set (`NodeStorageAction`) and the reducer
//!
//! Publication, subscriptions and locking live in `nodestorage-hub`; turning
//! untyped foreign records into actions lives in `nodestorage-script`.
//!
//! ```
//! use nodestorage_core::{reduce, Metadata, NodeId, NodeStorageAction, State};
//!
//! let state = reduce(&State::new(), &NodeStorageAction::create_node(7u64, "cube"));
//! let state = reduce(
//!     &state,
//!     &NodeStorageAction::update_metadata(7u64, Metadata::new().with("size", 2.0f64)),
//! );
//!
//! assert_eq!(state.nodes().get(NodeId::new(7)).unwrap().model, "cube");
//! ```

mod action;
mod error;
mod identity;
mod metadata;
mod node;
mod reducer;
mod state;
mod value;

pub use action::{CreateNode, NodeStorageAction, RemoveNode, UpdateMetadata};
pub use error::{Error, Result};
pub use identity::NodeId;
pub use metadata::{Metadata, MetadataCollection};
pub use node::{Node, NodeCollection};
pub use reducer::{reduce, replay};
pub use state::State;
pub use value::MetadataProperty;
