use serde::{Deserialize, Serialize};

use crate::util::{new_id, now_ts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    /// Card moved between lists, card restored, and similar board events.
    BoardActivity,
    /// Pomodoro phase ended.
    Pomodoro,
    /// Scheduled-todo reminder (60s scan in the caller).
    Schedule,
    /// Card due-date reminder.
    DueDate,
    System,
}

/// Ephemeral: created by several unrelated flows, marked read explicitly,
/// never expired automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: String) -> Self {
        Notification {
            id: new_id(),
            kind,
            message,
            is_read: false,
            created_at: now_ts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::BoardActivity).unwrap(),
            "\"boardActivity\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationKind::DueDate).unwrap(),
            "\"dueDate\""
        );
    }
}
