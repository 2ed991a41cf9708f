use crate::io::StorageKey;
use crate::model::{DailyTodo, State};

use super::Touched;

pub(super) fn add_todo(
    state: &mut State,
    text: String,
    date: String,
    start_time: Option<String>,
    end_time: Option<String>,
    is_recurring: bool,
    salat_prayer: Option<String>,
) -> Touched {
    let mut todo = DailyTodo::new(text, date, is_recurring);
    todo.start_time = start_time;
    todo.end_time = end_time;
    todo.salat_prayer = salat_prayer;
    state.daily_todos.push(todo);
    Touched::one(StorageKey::DailyTodos)
}

pub(super) fn update_todo(
    state: &mut State,
    todo_id: &str,
    text: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
) -> Touched {
    let Some(todo) = state.daily_todos.iter_mut().find(|t| t.id == todo_id) else {
        return Touched::none();
    };
    if let Some(text) = text {
        todo.text = text;
    }
    if start_time.is_some() {
        todo.start_time = start_time;
    }
    if end_time.is_some() {
        todo.end_time = end_time;
    }
    Touched::one(StorageKey::DailyTodos)
}

/// Flip completion for the given calendar date. Recurring todos toggle
/// their per-date entry; one-off todos toggle the flat flag and the date
/// argument is ignored.
pub(super) fn toggle_todo(state: &mut State, todo_id: &str, date: &str) -> Touched {
    let Some(todo) = state.daily_todos.iter_mut().find(|t| t.id == todo_id) else {
        return Touched::none();
    };
    if todo.is_recurring {
        let done = todo.completed_on.get(date).copied().unwrap_or(false);
        todo.completed_on.insert(date.to_string(), !done);
    } else {
        todo.is_completed = !todo.is_completed;
    }
    Touched::one(StorageKey::DailyTodos)
}

pub(super) fn delete_todo(state: &mut State, todo_id: &str) -> Touched {
    let before = state.daily_todos.len();
    state.daily_todos.retain(|t| t.id != todo_id);
    if state.daily_todos.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::DailyTodos)
}
