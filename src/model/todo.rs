use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::util::new_id;

/// A planner entry. Non-recurring todos track completion through
/// `is_completed`; recurring todos track per-occurrence completion in
/// `completed_on`, keyed by calendar date. Each variant must only
/// touch its own field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTodo {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
    /// `YYYY-MM-DD` the todo was created for.
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub completed_on: HashMap<String, bool>,
    /// Set when the entry is one of the five daily prayers.
    #[serde(default)]
    pub salat_prayer: Option<String>,
}

impl DailyTodo {
    pub fn new(text: String, date: String, is_recurring: bool) -> Self {
        DailyTodo {
            id: new_id(),
            text,
            is_completed: false,
            date,
            start_time: None,
            end_time: None,
            is_recurring,
            completed_on: HashMap::new(),
            salat_prayer: None,
        }
    }

    /// Completion status for the given calendar date.
    pub fn is_done_on(&self, date: &str) -> bool {
        if self.is_recurring {
            self.completed_on.get(date).copied().unwrap_or(false)
        } else {
            self.is_completed
        }
    }
}
