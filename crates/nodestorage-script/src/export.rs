//! Read views exported as foreign values

use crate::value::{Value, ValueMap};
use nodestorage_core::{Metadata, MetadataProperty, State};

/// Convert a metadata property to a foreign value
pub fn property_to_value(property: &MetadataProperty) -> Value {
    match property {
        MetadataProperty::String(s) => Value::String(s.clone()),
        MetadataProperty::Float(f) => Value::Float(*f),
    }
}

/// Convert metadata to a foreign map
pub fn metadata_to_map(metadata: &Metadata) -> ValueMap {
    metadata
        .iter()
        .map(|(name, property)| (name.to_string(), property_to_value(property)))
        .collect()
}

/// Convert a whole state to a foreign value
///
/// Shape: `{"nodes": {"<id>": {"model": ..}}, "metadata": {"<id>": {..}}}`,
/// keyed by the raw id since foreign dictionaries key on strings.
pub fn state_to_value(state: &State) -> Value {
    let nodes: ValueMap = state
        .nodes()
        .iter()
        .map(|(id, node)| {
            let mut entry = ValueMap::new();
            entry.insert("model".into(), node.model.as_str().into());
            (id.raw().to_string(), Value::Map(entry))
        })
        .collect();

    let metadata: ValueMap = state
        .metadata()
        .iter()
        .map(|(id, m)| (id.raw().to_string(), Value::Map(metadata_to_map(m))))
        .collect();

    let mut root = ValueMap::new();
    root.insert("nodes".into(), Value::Map(nodes));
    root.insert("metadata".into(), Value::Map(metadata));
    Value::Map(root)
}

impl From<&MetadataProperty> for Value {
    fn from(property: &MetadataProperty) -> Self {
        property_to_value(property)
    }
}
