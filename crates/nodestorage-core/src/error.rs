//! Error types for nodestorage-core

use crate::NodeId;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Metadata not found: {0}")]
    MetadataNotFound(NodeId),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
