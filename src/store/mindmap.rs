use serde_json::Value;
use std::collections::HashMap;

use crate::io::StorageKey;
use crate::model::{MindMap, MindMapSnapshot, State};

use super::Touched;

pub(super) fn add_mindmap(state: &mut State, name: String) -> Touched {
    state.mind_maps.push(MindMap::new(name));
    Touched::one(StorageKey::MindMaps)
}

pub(super) fn rename_mindmap(state: &mut State, mindmap_id: &str, name: String) -> Touched {
    let Some(map) = state.mind_maps.iter_mut().find(|m| m.id == mindmap_id) else {
        return Touched::none();
    };
    map.name = name;
    Touched::one(StorageKey::MindMaps)
}

pub(super) fn delete_mindmap(state: &mut State, mindmap_id: &str) -> Touched {
    let before = state.mind_maps.len();
    state.mind_maps.retain(|m| m.id != mindmap_id);
    if state.mind_maps.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::MindMaps)
}

/// Content edit when both `items` and `display_order` are present: the
/// new snapshot replaces any redoable future beyond the current index.
/// Partial payloads update the live content without touching history.
pub(super) fn update_mindmap(
    state: &mut State,
    mindmap_id: &str,
    items: Option<HashMap<String, Value>>,
    display_order: Option<Vec<String>>,
) -> Touched {
    let Some(map) = state.mind_maps.iter_mut().find(|m| m.id == mindmap_id) else {
        return Touched::none();
    };
    let data = &mut map.data;
    match (items, display_order) {
        (Some(items), Some(display_order)) => {
            data.items = items;
            data.display_order = display_order;
            data.history.truncate(data.history_index + 1);
            data.history.push(MindMapSnapshot {
                items: data.items.clone(),
                display_order: data.display_order.clone(),
            });
            data.history_index = data.history.len() - 1;
        }
        (items, display_order) => {
            if let Some(items) = items {
                data.items = items;
            }
            if let Some(display_order) = display_order {
                data.display_order = display_order;
            }
        }
    }
    Touched::one(StorageKey::MindMaps)
}

pub(super) fn undo_mindmap(state: &mut State, mindmap_id: &str) -> Touched {
    let Some(map) = state.mind_maps.iter_mut().find(|m| m.id == mindmap_id) else {
        return Touched::none();
    };
    let data = &mut map.data;
    if data.history_index == 0 {
        return Touched::none();
    }
    data.history_index -= 1;
    let snapshot = &data.history[data.history_index];
    data.items = snapshot.items.clone();
    data.display_order = snapshot.display_order.clone();
    Touched::one(StorageKey::MindMaps)
}

pub(super) fn redo_mindmap(state: &mut State, mindmap_id: &str) -> Touched {
    let Some(map) = state.mind_maps.iter_mut().find(|m| m.id == mindmap_id) else {
        return Touched::none();
    };
    let data = &mut map.data;
    if data.history_index + 1 >= data.history.len() {
        return Touched::none();
    }
    data.history_index += 1;
    let snapshot = &data.history[data.history_index];
    data.items = snapshot.items.clone();
    data.display_order = snapshot.display_order.clone();
    Touched::one(StorageKey::MindMaps)
}
