//! Error types for nodestorage-script

use thiserror::Error;

/// Adapter error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported action type: {0}")]
    UnsupportedAction(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Type error in field {field}: expected {expected}, got {got}")]
    TypeError {
        field: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Invalid node id: {0}")]
    InvalidId(i64),

    #[error("Node id does not fit a foreign integer: {0}")]
    IdOutOfRange(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Store error: {0}")]
    Hub(#[from] nodestorage_hub::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
