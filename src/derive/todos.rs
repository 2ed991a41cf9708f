use crate::model::{DailyTodo, State};

/// The planner entries visible on a given day: recurring todos always,
/// one-off todos only on their own date.
pub fn todos_for_day<'a>(state: &'a State, date: &str) -> Vec<&'a DailyTodo> {
    state
        .daily_todos
        .iter()
        .filter(|t| t.is_recurring || t.date == date)
        .collect()
}
