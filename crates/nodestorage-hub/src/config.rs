//! Store configuration
//!
//! Loaded from RON, e.g.:
//!
//! ```ron
//! (
//!     name: "editor-scene",
//!     journal_capacity: 256,
//! )
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a [`Store`](crate::Store)
///
/// # Example
///
/// ```
/// use nodestorage_hub::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert!(!config.journal_enabled());
///
/// let config = StoreConfig::default().with_journal_capacity(64);
/// assert!(config.journal_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Label attached to the store's log events
    #[serde(default = "default_name")]
    pub name: String,
    /// Number of recent dispatches kept in the journal (0 = disabled)
    #[serde(default)]
    pub journal_capacity: usize,
}

fn default_name() -> String {
    "node-storage".to_string()
}

impl StoreConfig {
    /// Parse a configuration from RON text
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Load a configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Set the store label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the journal capacity
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = capacity;
        self
    }

    /// Check if dispatches are journaled
    pub fn journal_enabled(&self) -> bool {
        self.journal_capacity > 0
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            journal_capacity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "node-storage");
        assert_eq!(config.journal_capacity, 0);
        assert!(!config.journal_enabled());
    }

    #[test]
    fn test_from_ron_str() {
        let config = StoreConfig::from_ron_str(
            r#"(
                name: "editor-scene",
                journal_capacity: 256,
            )"#,
        )
        .unwrap();

        assert_eq!(config.name, "editor-scene");
        assert_eq!(config.journal_capacity, 256);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = StoreConfig::from_ron_str("()").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_invalid_ron() {
        let err = StoreConfig::from_ron_str("(journal_capacity: \"lots\")").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/nonexistent/nodestorage.ron").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_builders() {
        let config = StoreConfig::default()
            .with_name("sim")
            .with_journal_capacity(8);
        assert_eq!(config.name, "sim");
        assert!(config.journal_enabled());
    }
}
