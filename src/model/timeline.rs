use serde::{Deserialize, Serialize};

use crate::util::new_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl TimelineEvent {
    pub fn new(title: String, date: String) -> Self {
        TimelineEvent {
            id: new_id(),
            title,
            description: None,
            date,
            color: None,
        }
    }
}
