//! Boundary to the external text-generation collaborator. The store
//! never depends on these calls succeeding; callers turn results into
//! follow-up dispatches (for example `ADD_AI_TAGS_TO_NOTE`) or show the
//! error and move on.

use serde::Serialize;
use thiserror::Error;

/// Collaborator failure. The message is deliberately generic: transport
/// faults and malformed replies look the same to the user.
#[derive(Debug, Error)]
#[error("failed to {capability}")]
pub struct AssistError {
    capability: &'static str,
}

impl AssistError {
    pub fn new(capability: &'static str) -> Self {
        AssistError { capability }
    }
}

/// A task handed to the reordering capability.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSlot {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// The four text-generation capabilities the app consumes.
pub trait TextAssist {
    /// Rewrite free text for clarity, preserving its meaning.
    fn refine_text(&self, text: &str) -> Result<String, AssistError>;

    /// Task strings for a checklist derived from a card's title and
    /// description.
    fn suggest_checklist(&self, title: &str, description: &str)
        -> Result<Vec<String>, AssistError>;

    /// 3-5 tag names for a note.
    fn suggest_tags(&self, title: &str, content: &str) -> Result<Vec<String>, AssistError>;

    /// A reordering of the given task ids.
    fn reorder_tasks(&self, tasks: &[TaskSlot]) -> Result<Vec<String>, AssistError>;
}

/// Parse a model reply into a string array, tolerating a markdown code
/// fence (with or without a language tag) around the JSON.
pub fn parse_string_array(reply: &str) -> Option<Vec<String>> {
    let mut body = reply.trim();
    if let Some(rest) = body.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        body = rest.strip_suffix("```").unwrap_or(rest).trim();
    }
    serde_json::from_str(body).ok()
}
