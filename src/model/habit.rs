use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::util::{new_id, now_ts};

/// A tracked habit. Archiving moves the record between the `habits` and
/// `archivedHabits` collections and flips `is_archived` together; the
/// flag alone is never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_goal")]
    pub goal: u32,
    #[serde(default)]
    pub goal_unit: String,
    #[serde(default)]
    pub completions: Vec<HabitCompletion>,
    #[serde(default)]
    pub is_archived: bool,
    pub created_at: String,
    /// Free-form per-day notes keyed by `YYYY-MM-DD`.
    #[serde(default)]
    pub notes: HashMap<String, String>,
}

fn default_goal() -> u32 {
    1
}

impl Habit {
    pub fn new(name: String, icon: String, color: String, goal: u32, goal_unit: String) -> Self {
        Habit {
            id: new_id(),
            name,
            icon,
            color,
            goal,
            goal_unit,
            completions: Vec::new(),
            is_archived: false,
            created_at: now_ts(),
            notes: HashMap::new(),
        }
    }

    pub fn completed_on(&self, date: &str) -> bool {
        self.completions.iter().any(|c| c.date == date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    /// `YYYY-MM-DD`
    pub date: String,
}
