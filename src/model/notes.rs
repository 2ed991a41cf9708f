use serde::{Deserialize, Serialize};

use crate::util::{new_id, now_ts};

pub type NotebookId = String;
pub type NoteId = String;
pub type TagId = String;

/// Colors handed out round-robin (indexed by current tag count) when a
/// tag has to be synthesized for an AI-suggested name.
pub const TAG_PALETTE: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#8b5cf6", "#ec4899",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: NotebookId,
    pub name: String,
    pub created_at: String,
}

impl Notebook {
    pub fn new(name: String) -> Self {
        Notebook {
            id: new_id(),
            name,
            created_at: now_ts(),
        }
    }
}

/// A note lives in exactly one notebook and may reference any number of
/// tags. Dangling tag ids are tolerated and filtered by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub notebook_id: NotebookId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    pub created_at: String,
    pub updated_at: String,
}

impl Note {
    pub fn new(notebook_id: NotebookId, title: String, content: String) -> Self {
        let ts = now_ts();
        Note {
            id: new_id(),
            notebook_id,
            title,
            content,
            tag_ids: Vec::new(),
            created_at: ts.clone(),
            updated_at: ts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: String, color: String) -> Self {
        Tag {
            id: new_id(),
            name,
            color,
        }
    }
}

/// A note parked in the note trash (same 30-day convention as cards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashedNote {
    #[serde(flatten)]
    pub note: Note,
    pub deleted_at: String,
}
