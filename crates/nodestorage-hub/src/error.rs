//! Error types for nodestorage-hub

use thiserror::Error;

/// Result type for nodestorage-hub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nodestorage-hub
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text is not valid RON
    #[error("invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),
}

// Compile-time check that Error is Send + Sync for thread-safe error propagation.
fn _assert_error_send_sync<T: Send + Sync>() {}
fn _error_is_send_sync() {
    _assert_error_send_sync::<Error>();
}
