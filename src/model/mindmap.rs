use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::util::new_id;

/// The store treats mind-map nodes as opaque JSON; only `display_order`
/// (z-order) and the history stack are interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMap {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub data: MindMapData,
}

impl MindMap {
    pub fn new(name: String) -> Self {
        MindMap {
            id: new_id(),
            name,
            data: MindMapData::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapData {
    #[serde(default)]
    pub items: HashMap<String, Value>,
    #[serde(default)]
    pub display_order: Vec<String>,
    /// Linear undo history: snapshots of `{items, display_order}`.
    /// `history[history_index]` always equals the live content.
    #[serde(default)]
    pub history: Vec<MindMapSnapshot>,
    #[serde(default)]
    pub history_index: usize,
}

impl Default for MindMapData {
    fn default() -> Self {
        MindMapData {
            items: HashMap::new(),
            display_order: Vec::new(),
            history: vec![MindMapSnapshot::default()],
            history_index: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapSnapshot {
    #[serde(default)]
    pub items: HashMap<String, Value>,
    #[serde(default)]
    pub display_order: Vec<String>,
}
