use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::util::new_id;

pub type BoardId = String;
pub type ListId = String;
pub type CardId = String;
pub type LabelId = String;

/// A kanban board. `list_order` is the left-to-right order of lists;
/// each list's `card_ids` is the authoritative top-to-bottom order of
/// the cards it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: IndexMap<ListId, List>,
    #[serde(default)]
    pub cards: HashMap<CardId, Card>,
    #[serde(default)]
    pub labels: IndexMap<LabelId, Label>,
    #[serde(default)]
    pub list_order: Vec<ListId>,
    #[serde(default)]
    pub trashed_cards: HashMap<CardId, TrashedCard>,
}

impl Board {
    /// Create a board with the standard three starter lists.
    pub fn new(title: String) -> Self {
        let mut board = Board {
            id: new_id(),
            title,
            lists: IndexMap::new(),
            cards: HashMap::new(),
            labels: IndexMap::new(),
            list_order: Vec::new(),
            trashed_cards: HashMap::new(),
        };
        for name in ["To Do", "In Progress", "Done"] {
            let list = List::new(name.to_string());
            board.list_order.push(list.id.clone());
            board.lists.insert(list.id.clone(), list);
        }
        board
    }

    /// The id of the list currently holding `card_id`, if any.
    pub fn list_of_card(&self, card_id: &str) -> Option<&ListId> {
        self.lists
            .values()
            .find(|l| l.card_ids.iter().any(|c| c == card_id))
            .map(|l| &l.id)
    }

    /// First list in display order (restore fallback target).
    pub fn first_list_id(&self) -> Option<&ListId> {
        self.list_order.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub card_ids: Vec<CardId>,
}

impl List {
    pub fn new(title: String) -> Self {
        List {
            id: new_id(),
            title,
            card_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub label_ids: Vec<LabelId>,
    #[serde(default)]
    pub checklists: Vec<Checklist>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Card {
    pub fn new(title: String) -> Self {
        Card {
            id: new_id(),
            title,
            description: None,
            due_date: None,
            cover_image: None,
            label_ids: Vec::new(),
            checklists: Vec::new(),
            comments: Vec::new(),
            attachments: Vec::new(),
        }
    }
}

/// A card snapshot parked in the board trash. Restoring puts the card
/// back into `original_list_id`, or the board's first list when that
/// list no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashedCard {
    #[serde(flatten)]
    pub card: Card,
    pub deleted_at: String,
    pub original_list_id: ListId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub url: String,
}
