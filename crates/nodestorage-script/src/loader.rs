//! RON action loader

use crate::adapter::action_from_record;
use crate::error::Result;
use crate::value::ValueMap;
use nodestorage_core::NodeStorageAction;
use std::fs;
use std::path::Path;

/// Parse a single action record from RON text
///
/// ```
/// use nodestorage_core::NodeStorageAction;
/// use nodestorage_script::action_from_ron;
///
/// let action = action_from_ron(r#"{"type": "RemoveNode", "id": 3}"#).unwrap();
/// assert_eq!(action, NodeStorageAction::remove_node(3u64));
/// ```
pub fn action_from_ron(text: &str) -> Result<NodeStorageAction> {
    let record: ValueMap = ron::from_str(text)?;
    action_from_record(&record)
}

/// Parse a list of action records from RON text
///
/// Fails on the first invalid record; nothing is returned partially.
pub fn actions_from_ron(text: &str) -> Result<Vec<NodeStorageAction>> {
    let records: Vec<ValueMap> = ron::from_str(text)?;
    records.iter().map(action_from_record).collect()
}

/// Load a list of action records from a RON file
pub fn load_actions(path: impl AsRef<Path>) -> Result<Vec<NodeStorageAction>> {
    let content = fs::read_to_string(path)?;
    actions_from_ron(&content)
}
