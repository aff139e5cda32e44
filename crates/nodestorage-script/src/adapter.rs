//! Conversion between foreign action records and typed actions
//!
//! A foreign record is a [`ValueMap`] with a `type` tag and type-specific
//! fields:
//!
//! | type             | fields                                    |
//! |------------------|-------------------------------------------|
//! | `CreateNode`     | `id`, `model`, optional `metadata`        |
//! | `RemoveNode`     | `id`                                      |
//! | `UpdateMetadata` | `id`, `metadata`                          |
//!
//! `metadata` is a map of property names to strings or numbers. Integers are
//! widened to floats. Unknown tags are rejected, never skipped.

use crate::error::{Error, Result};
use crate::export::metadata_to_map;
use crate::value::{Value, ValueMap};
use nodestorage_core::{
    CreateNode, Metadata, MetadataProperty, NodeId, NodeStorageAction, RemoveNode, UpdateMetadata,
};
use tracing::warn;

/// Build a typed action from a foreign record
pub fn action_from_record(record: &ValueMap) -> Result<NodeStorageAction> {
    parse_record(record).inspect_err(|err| {
        warn!(error = %err, "rejected action record");
    })
}

fn parse_record(record: &ValueMap) -> Result<NodeStorageAction> {
    let tag = required_str(record, "type")?;
    let action = match tag {
        "CreateNode" => CreateNode {
            id: node_id(record)?,
            model: required_str(record, "model")?.to_string(),
            metadata: match record.get("metadata") {
                None | Some(Value::Null) => Metadata::new(),
                Some(value) => metadata_from_value(value)?,
            },
        }
        .into(),
        "RemoveNode" => RemoveNode {
            id: node_id(record)?,
        }
        .into(),
        "UpdateMetadata" => UpdateMetadata {
            id: node_id(record)?,
            metadata: metadata_from_value(required(record, "metadata")?)?,
        }
        .into(),
        other => return Err(Error::UnsupportedAction(other.to_string())),
    };
    Ok(action)
}

/// Build the foreign record for a typed action
///
/// Foreign integers are signed, so ids above `i64::MAX` fail with
/// [`Error::IdOutOfRange`] instead of wrapping.
pub fn record_from_action(action: &NodeStorageAction) -> Result<ValueMap> {
    let raw = action.node_id().raw();
    let id = i64::try_from(raw).map_err(|_| Error::IdOutOfRange(raw))?;

    let mut record = ValueMap::new();
    record.insert("type".into(), action.kind().into());
    record.insert("id".into(), Value::Int(id));
    match action {
        NodeStorageAction::CreateNode(create) => {
            record.insert("model".into(), create.model.as_str().into());
            record.insert("metadata".into(), metadata_to_map(&create.metadata).into());
        }
        NodeStorageAction::RemoveNode(_) => {}
        NodeStorageAction::UpdateMetadata(update) => {
            record.insert("metadata".into(), metadata_to_map(&update.metadata).into());
        }
    }
    Ok(record)
}

/// Convert a foreign metadata map
pub fn metadata_from_value(value: &Value) -> Result<Metadata> {
    let map = value.as_map().ok_or_else(|| Error::TypeError {
        field: "metadata".into(),
        expected: "map",
        got: value.type_name(),
    })?;

    let mut metadata = Metadata::new();
    for (name, value) in map {
        metadata.set(name.clone(), property_from_value(name, value)?);
    }
    Ok(metadata)
}

fn property_from_value(name: &str, value: &Value) -> Result<MetadataProperty> {
    match value {
        Value::String(s) => Ok(MetadataProperty::String(s.clone())),
        Value::Float(f) => Ok(MetadataProperty::Float(*f)),
        Value::Int(i) => Ok(MetadataProperty::Float(*i as f64)),
        other => Err(Error::TypeError {
            field: format!("metadata.{}", name),
            expected: "string or number",
            got: other.type_name(),
        }),
    }
}

fn required<'a>(record: &'a ValueMap, field: &str) -> Result<&'a Value> {
    record
        .get(field)
        .ok_or_else(|| Error::MissingField(field.to_string()))
}

fn required_str<'a>(record: &'a ValueMap, field: &str) -> Result<&'a str> {
    let value = required(record, field)?;
    value.as_str().ok_or_else(|| Error::TypeError {
        field: field.to_string(),
        expected: "string",
        got: value.type_name(),
    })
}

fn node_id(record: &ValueMap) -> Result<NodeId> {
    let value = required(record, "id")?;
    let raw = value.as_int().ok_or_else(|| Error::TypeError {
        field: "id".into(),
        expected: "integer",
        got: value.type_name(),
    })?;
    u64::try_from(raw)
        .map(NodeId::new)
        .map_err(|_| Error::InvalidId(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: Vec<(&str, Value)>) -> ValueMap {
        fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn metadata_value(fields: Vec<(&str, Value)>) -> Value {
        Value::Map(record(fields))
    }

    #[test]
    fn test_create_node_record() {
        let action = action_from_record(&record(vec![
            ("type", "CreateNode".into()),
            ("id", Value::Int(7)),
            ("model", "cube".into()),
        ]))
        .unwrap();

        assert_eq!(action, NodeStorageAction::create_node(7u64, "cube"));
    }

    #[test]
    fn test_create_node_record_honors_metadata() {
        let action = action_from_record(&record(vec![
            ("type", "CreateNode".into()),
            ("id", Value::Int(7)),
            ("model", "cube".into()),
            (
                "metadata",
                metadata_value(vec![("color", "red".into()), ("size", Value::Int(2))]),
            ),
        ]))
        .unwrap();

        let expected = NodeStorageAction::create_node(7u64, "cube")
            .with_metadata(Metadata::new().with("color", "red").with("size", 2.0f64));
        assert_eq!(action, expected);
    }

    #[test]
    fn test_create_node_null_metadata_is_empty() {
        let action = action_from_record(&record(vec![
            ("type", "CreateNode".into()),
            ("id", Value::Int(1)),
            ("model", "cube".into()),
            ("metadata", Value::Null),
        ]))
        .unwrap();
        assert_eq!(action, NodeStorageAction::create_node(1u64, "cube"));
    }

    #[test]
    fn test_remove_node_record() {
        let action = action_from_record(&record(vec![
            ("type", "RemoveNode".into()),
            ("id", Value::Int(3)),
        ]))
        .unwrap();
        assert_eq!(action, NodeStorageAction::remove_node(3u64));
    }

    #[test]
    fn test_update_metadata_record() {
        let action = action_from_record(&record(vec![
            ("type", "UpdateMetadata".into()),
            ("id", Value::Int(3)),
            ("metadata", metadata_value(vec![("size", Value::Float(2.0))])),
        ]))
        .unwrap();

        assert_eq!(
            action,
            NodeStorageAction::update_metadata(3u64, Metadata::new().with("size", 2.0f64))
        );
    }

    #[test]
    fn test_update_metadata_requires_metadata() {
        let err = action_from_record(&record(vec![
            ("type", "UpdateMetadata".into()),
            ("id", Value::Int(3)),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "metadata"));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = action_from_record(&record(vec![
            ("type", "RenameNode".into()),
            ("id", Value::Int(3)),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedAction(tag) if tag == "RenameNode"));
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let err = action_from_record(&record(vec![("id", Value::Int(3))])).unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "type"));
    }

    #[test]
    fn test_bad_id_types() {
        let err = action_from_record(&record(vec![
            ("type", "RemoveNode".into()),
            ("id", "three".into()),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::TypeError { expected: "integer", got: "string", .. }
        ));

        let err = action_from_record(&record(vec![
            ("type", "RemoveNode".into()),
            ("id", Value::Int(-1)),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidId(-1)));
    }

    #[test]
    fn test_bad_metadata_value() {
        let err = action_from_record(&record(vec![
            ("type", "UpdateMetadata".into()),
            ("id", Value::Int(3)),
            ("metadata", metadata_value(vec![("visible", Value::Bool(true))])),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::TypeError { ref field, got: "bool", .. } if field == "metadata.visible"
        ));
    }

    #[test]
    fn test_record_from_action_inverts_parse() {
        let actions = vec![
            NodeStorageAction::create_node(1u64, "cube")
                .with_metadata(Metadata::new().with("color", "red")),
            NodeStorageAction::remove_node(2u64),
            NodeStorageAction::update_metadata(3u64, Metadata::new().with("size", 1.5f64)),
        ];
        for action in actions {
            let record = record_from_action(&action).unwrap();
            assert_eq!(record["type"], Value::String(action.kind().into()));
            assert_eq!(action_from_record(&record).unwrap(), action);
        }
    }

    #[test]
    fn test_record_from_action_id_bounds() {
        let largest = NodeStorageAction::remove_node(i64::MAX as u64);
        let record = record_from_action(&largest).unwrap();
        assert_eq!(record["id"], Value::Int(i64::MAX));
        assert_eq!(action_from_record(&record).unwrap(), largest);

        let err = record_from_action(&NodeStorageAction::remove_node(u64::MAX)).unwrap_err();
        assert!(matches!(err, Error::IdOutOfRange(u64::MAX)));
    }
}
