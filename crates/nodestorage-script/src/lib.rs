//! NodeStorage Script - boundary between a scripting host and the store
//!
//! Scripting layers hand over actions as untyped dictionaries:
//! - [`action_from_record`] turns a record into a typed action, failing on
//!   unknown `type` tags or malformed fields
//! - [`action_from_ron`] / [`load_actions`] read records from RON text
//! - the `export` helpers turn snapshots back into foreign values
//! - [`ScriptStore`] bundles the above around a `Store`

mod adapter;
mod error;
mod export;
mod loader;
mod script_store;
mod value;

pub use adapter::{action_from_record, metadata_from_value, record_from_action};
pub use error::{Error, Result};
pub use export::{metadata_to_map, property_to_value, state_to_value};
pub use loader::{action_from_ron, actions_from_ron, load_actions};
pub use script_store::ScriptStore;
pub use value::{Value, ValueMap};
