//! Per-node metadata and the metadata collection

use crate::{Error, MetadataProperty, NodeId, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named properties attached to one node
///
/// Uses IndexMap to preserve insertion order (useful for deterministic serialization)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    properties: IndexMap<String, MetadataProperty>,
}

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Result<&MetadataProperty> {
        self.properties
            .get(name)
            .ok_or_else(|| Error::PropertyNotFound(name.to_string()))
    }

    /// Set a property value, returning the previous one
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<MetadataProperty>,
    ) -> Option<MetadataProperty> {
        self.properties.insert(name.into(), value.into())
    }

    /// Builder-style variant of [`Metadata::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<MetadataProperty>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a property
    pub fn remove(&mut self, name: &str) -> Option<MetadataProperty> {
        self.properties.shift_remove(name)
    }

    /// Check if a property exists
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Merge another metadata set into this one
    ///
    /// Properties with the same name are overwritten, new names are appended.
    pub fn merge(&mut self, other: Metadata) {
        self.properties.extend(other.properties);
    }

    /// Get all properties
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataProperty)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if there are no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<MetadataProperty>> FromIterator<(K, V)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Metadata for all nodes, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataCollection {
    entries: IndexMap<NodeId, Metadata>,
}

impl MetadataCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the metadata for a node
    pub fn get(&self, id: NodeId) -> Result<&Metadata> {
        self.entries.get(&id).ok_or(Error::MetadataNotFound(id))
    }

    /// Insert or replace the metadata for `id`, returning the previous entry
    pub fn insert(&mut self, id: NodeId, metadata: Metadata) -> Option<Metadata> {
        self.entries.insert(id, metadata)
    }

    /// Merge properties into the entry for `id`, creating it if absent
    pub fn merge(&mut self, id: NodeId, metadata: Metadata) {
        self.entries.entry(id).or_default().merge(metadata);
    }

    /// Remove the metadata for a node
    pub fn remove(&mut self, id: NodeId) -> Option<Metadata> {
        self.entries.shift_remove(&id)
    }

    /// Check if a node has a metadata entry
    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get all node IDs with metadata
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.keys().copied()
    }

    /// Get all entries with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Metadata)> {
        self.entries.iter().map(|(id, m)| (*id, m))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_get() {
        let metadata = Metadata::new().with("color", "red").with("size", 2.0f64);

        assert_eq!(metadata.get("color").unwrap().as_str(), Some("red"));
        assert_eq!(metadata.get("size").unwrap().as_float(), Some(2.0));
        assert_eq!(
            metadata.get("weight"),
            Err(Error::PropertyNotFound("weight".into()))
        );
    }

    #[test]
    fn test_metadata_merge_overwrites_and_adds() {
        let mut metadata = Metadata::new().with("color", "red").with("size", 1.0f64);
        metadata.merge(Metadata::new().with("size", 3.0f64).with("label", "crate"));

        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("color").unwrap().as_str(), Some("red"));
        assert_eq!(metadata.get("size").unwrap().as_float(), Some(3.0));
        assert_eq!(metadata.get("label").unwrap().as_str(), Some("crate"));
    }

    #[test]
    fn test_metadata_from_iter() {
        let metadata: Metadata = vec![("a", 1.0f64), ("b", 2.0f64)].into_iter().collect();
        let names: Vec<_> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_collection_merge_creates_entry() {
        let mut collection = MetadataCollection::new();
        collection.merge(NodeId::new(3), Metadata::new().with("x", 1.0f64));

        assert!(collection.contains(NodeId::new(3)));
        assert_eq!(
            collection
                .get(NodeId::new(3))
                .unwrap()
                .get("x")
                .unwrap()
                .as_float(),
            Some(1.0)
        );
    }

    #[test]
    fn test_collection_missing_entry_is_error() {
        let collection = MetadataCollection::new();
        assert_eq!(
            collection.get(NodeId::new(4)),
            Err(Error::MetadataNotFound(NodeId::new(4)))
        );
    }

    #[test]
    fn test_metadata_ron() {
        let metadata: Metadata = ron::from_str(r#"{"color": "red", "size": 2.0}"#).unwrap();
        assert_eq!(metadata.get("color").unwrap().as_str(), Some("red"));
        assert_eq!(metadata.get("size").unwrap().as_float(), Some(2.0));
    }
}
