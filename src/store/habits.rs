use crate::io::StorageKey;
use crate::model::{Habit, HabitCompletion, State};

use super::Touched;

pub(super) fn add_habit(
    state: &mut State,
    name: String,
    icon: String,
    color: String,
    goal: u32,
    goal_unit: String,
) -> Touched {
    state
        .habits
        .push(Habit::new(name, icon, color, goal, goal_unit));
    Touched::one(StorageKey::Habits)
}

pub(super) fn update_habit(
    state: &mut State,
    habit_id: &str,
    name: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    goal: Option<u32>,
    goal_unit: Option<String>,
) -> Touched {
    let Some(habit) = state.habits.iter_mut().find(|h| h.id == habit_id) else {
        return Touched::none();
    };
    if let Some(name) = name {
        habit.name = name;
    }
    if let Some(icon) = icon {
        habit.icon = icon;
    }
    if let Some(color) = color {
        habit.color = color;
    }
    if let Some(goal) = goal {
        habit.goal = goal;
    }
    if let Some(goal_unit) = goal_unit {
        habit.goal_unit = goal_unit;
    }
    Touched::one(StorageKey::Habits)
}

/// Deletes a live habit outright; archived habits are removed through
/// the trash instead.
pub(super) fn delete_habit(state: &mut State, habit_id: &str) -> Touched {
    let before = state.habits.len();
    state.habits.retain(|h| h.id != habit_id);
    if state.habits.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Habits)
}

pub(super) fn toggle_completion(state: &mut State, habit_id: &str, date: &str) -> Touched {
    let Some(habit) = state.habits.iter_mut().find(|h| h.id == habit_id) else {
        return Touched::none();
    };
    if let Some(pos) = habit.completions.iter().position(|c| c.date == date) {
        habit.completions.remove(pos);
    } else {
        habit.completions.push(HabitCompletion {
            date: date.to_string(),
        });
    }
    Touched::one(StorageKey::Habits)
}

/// Moves the record between the live and archived collections; the flag
/// and the collection membership change in the same transition.
pub(super) fn archive_habit(state: &mut State, habit_id: &str) -> Touched {
    let Some(pos) = state.habits.iter().position(|h| h.id == habit_id) else {
        return Touched::none();
    };
    let mut habit = state.habits.remove(pos);
    habit.is_archived = true;
    state.archived_habits.push(habit);
    Touched::keys([StorageKey::Habits, StorageKey::ArchivedHabits])
}

pub(super) fn unarchive_habit(state: &mut State, habit_id: &str) -> Touched {
    let Some(pos) = state.archived_habits.iter().position(|h| h.id == habit_id) else {
        return Touched::none();
    };
    let mut habit = state.archived_habits.remove(pos);
    habit.is_archived = false;
    state.habits.push(habit);
    Touched::keys([StorageKey::Habits, StorageKey::ArchivedHabits])
}

/// Set (or clear, with empty text) the free-form note for one day.
pub(super) fn set_habit_note(
    state: &mut State,
    habit_id: &str,
    date: String,
    text: String,
) -> Touched {
    let Some(habit) = state.habits.iter_mut().find(|h| h.id == habit_id) else {
        return Touched::none();
    };
    if text.is_empty() {
        if habit.notes.remove(&date).is_none() {
            return Touched::none();
        }
    } else {
        habit.notes.insert(date, text);
    }
    Touched::one(StorageKey::Habits)
}
