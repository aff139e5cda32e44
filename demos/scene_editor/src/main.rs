//! Scene Editor Demo
//!
//! A scripting layer builds a small scene by dispatching untyped records,
//! while a second thread plays the renderer and only reads snapshots.
//!
//! Usage: `scene_editor [config.ron] [actions.ron]`
//! Set `RUST_LOG=debug` to see every dispatch.

use nodestorage_core::{Metadata, NodeId, NodeStorageAction, State};
use nodestorage_hub::{Store, StoreConfig};
use nodestorage_script::{load_actions, Result, ScriptStore};
use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SCENE_SCRIPT: &str = r#"[
    {"type": "CreateNode", "id": 1, "model": "terrain/hills", "metadata": {"label": "ground"}},
    {"type": "CreateNode", "id": 2, "model": "props/tree", "metadata": {"label": "oak", "scale": 1.5}},
    {"type": "CreateNode", "id": 3, "model": "props/rock"},
    {"type": "UpdateMetadata", "id": 3, "metadata": {"scale": 0.5, "label": "boulder"}},
    {"type": "CreateNode", "id": 2, "model": "props/pine"},
    {"type": "RemoveNode", "id": 1},
]"#;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default()
            .with_name("scene-editor")
            .with_journal_capacity(32),
    };
    let actions = match args.next() {
        Some(path) => load_actions(path)?,
        None => nodestorage_script::actions_from_ron(SCENE_SCRIPT)?,
    };

    println!("=== NodeStorage Scene Editor Demo ===\n");

    let scripting = Arc::new(ScriptStore::with_store(Store::with_config(
        State::new(),
        config,
    )));

    // The "renderer" only counts notifications and re-reads state
    let frames = Arc::new(AtomicUsize::new(0));
    let renderer_frames = Arc::clone(&frames);
    let weak = Arc::downgrade(&scripting);
    let _render_sub = scripting.subscribe(move || {
        renderer_frames.fetch_add(1, Ordering::SeqCst);
        if let Some(store) = weak.upgrade() {
            let state = store.state();
            info!(nodes = state.nodes().len(), "renderer refresh");
        }
    });

    // Typed dispatch from a tool thread, record dispatch from the script thread
    let tool = {
        let scripting = Arc::clone(&scripting);
        thread::spawn(move || {
            scripting.store().dispatch(
                NodeStorageAction::create_node(100u64, "ui/gizmo")
                    .with_metadata(Metadata::new().with("label", "gizmo")),
            )
        })
    };

    for action in actions {
        scripting.store().dispatch(action)?;
    }
    join_tool(tool)?;

    let state = scripting.state();
    println!("Nodes after {} dispatches:", scripting.store().version());
    for (id, node) in state.nodes().iter() {
        let label = state
            .metadata()
            .get(id)
            .ok()
            .and_then(|m| m.get("label").ok())
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {} -> {} (label: {})", id, node.model, label);
    }

    match state.nodes().get(NodeId::new(1)) {
        Ok(_) => println!("\nnode:1 still present"),
        Err(e) => println!("\nLookup after removal: {}", e),
    }

    println!("Renderer frames: {}", frames.load(Ordering::SeqCst));
    println!("Journal entries: {}", scripting.store().journal().len());
    println!("\nForeign view: {}", scripting.state_value());

    Ok(())
}

/// Wait for a worker thread, re-raising its panic on this thread
fn join_tool<T>(handle: JoinHandle<T>) -> T {
    match handle.join() {
        Ok(result) => result,
        Err(payload) => {
            error!("tool thread panicked");
            panic::resume_unwind(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_tool_returns_result() {
        let handle = thread::spawn(|| {
            Store::new().dispatch(NodeStorageAction::remove_node(1u64))
        });
        assert!(join_tool(handle).is_ok());
    }

    #[test]
    #[should_panic(expected = "tool failure")]
    fn test_join_tool_propagates_panic() {
        let handle = thread::spawn(|| -> Result<()> { panic!("tool failure") });
        let _ = join_tool(handle);
    }
}
