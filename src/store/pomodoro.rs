use crate::io::StorageKey;
use crate::model::{
    Notification, NotificationKind, PomodoroMode, PomodoroSettings, PomodoroTask, State,
};

use super::Touched;

pub(super) fn toggle_timer(state: &mut State) -> Touched {
    state.pomodoro.is_active = !state.pomodoro.is_active;
    Touched::one(StorageKey::Pomodoro)
}

/// One-second countdown tick, floored at zero. Reaching zero is detected
/// by the interval driver, which then requests the next mode; idle ticks
/// change nothing.
pub(super) fn tick(state: &mut State) -> Touched {
    if !state.pomodoro.is_active || state.pomodoro.time_remaining == 0 {
        return Touched::none();
    }
    state.pomodoro.time_remaining -= 1;
    Touched::one(StorageKey::Pomodoro)
}

/// Advance the phase machine. Completing a pomodoro bumps the counter
/// and routes every 4th one to a long break; finishing any break routes
/// back to work. Whether the next phase starts running is governed by
/// the auto-start flags for the phase being entered.
pub(super) fn set_next_mode(state: &mut State) -> Touched {
    let p = &mut state.pomodoro;
    let (next, notify) = match p.mode {
        PomodoroMode::Pomodoro => {
            p.pomodoros_completed += 1;
            let next = if p.pomodoros_completed % 4 == 0 {
                PomodoroMode::LongBreak
            } else {
                PomodoroMode::ShortBreak
            };
            let message = match next {
                PomodoroMode::LongBreak => "Pomodoro complete! Time for a long break.",
                _ => "Pomodoro complete! Time for a short break.",
            };
            (next, Some(message.to_string()))
        }
        PomodoroMode::ShortBreak | PomodoroMode::LongBreak => (PomodoroMode::Pomodoro, None),
    };
    p.mode = next;
    p.time_remaining = p.settings.duration_for(next);
    p.is_active = match next {
        PomodoroMode::Pomodoro => p.settings.auto_start_pomodoros,
        PomodoroMode::ShortBreak | PomodoroMode::LongBreak => p.settings.auto_start_breaks,
    };

    match notify {
        Some(message) => {
            state
                .notifications
                .push(Notification::new(NotificationKind::Pomodoro, message));
            Touched::keys([StorageKey::Pomodoro, StorageKey::Notifications])
        }
        None => Touched::one(StorageKey::Pomodoro),
    }
}

/// Stop the timer and refill the current phase; the completion counter
/// survives a reset.
pub(super) fn reset(state: &mut State) -> Touched {
    let p = &mut state.pomodoro;
    p.is_active = false;
    p.time_remaining = p.settings.duration_for(p.mode);
    Touched::one(StorageKey::Pomodoro)
}

/// Replace the settings. The remaining time is refilled only when the
/// timer is idle, so an in-flight phase is never cut short or stretched.
pub(super) fn update_settings(state: &mut State, settings: PomodoroSettings) -> Touched {
    let p = &mut state.pomodoro;
    p.settings = settings;
    if !p.is_active {
        p.time_remaining = p.settings.duration_for(p.mode);
    }
    Touched::one(StorageKey::Pomodoro)
}

pub(super) fn add_task(state: &mut State, text: String) -> Touched {
    state.pomodoro_tasks.push(PomodoroTask::new(text));
    Touched::one(StorageKey::PomodoroTasks)
}

pub(super) fn toggle_task(state: &mut State, task_id: &str) -> Touched {
    let Some(task) = state.pomodoro_tasks.iter_mut().find(|t| t.id == task_id) else {
        return Touched::none();
    };
    task.is_completed = !task.is_completed;
    Touched::one(StorageKey::PomodoroTasks)
}

pub(super) fn delete_task(state: &mut State, task_id: &str) -> Touched {
    let before = state.pomodoro_tasks.len();
    state.pomodoro_tasks.retain(|t| t.id != task_id);
    if state.pomodoro_tasks.len() == before {
        return Touched::none();
    }
    let mut keys = vec![StorageKey::PomodoroTasks];
    if state.active_pomodoro_task_id.as_deref() == Some(task_id) {
        state.active_pomodoro_task_id = None;
        keys.push(StorageKey::ActivePomodoroTaskId);
    }
    Touched::Keys(keys)
}

pub(super) fn set_active_task(state: &mut State, task_id: Option<String>) -> Touched {
    if let Some(id) = &task_id {
        if !state.pomodoro_tasks.iter().any(|t| t.id == *id) {
            return Touched::none();
        }
    }
    state.active_pomodoro_task_id = task_id;
    Touched::one(StorageKey::ActivePomodoroTaskId)
}

#[cfg(test)]
mod tests {
    use super::super::{reduce, Action, Touched};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tick_only_counts_down_while_active() {
        let mut state = State::default();
        assert!(reduce(&mut state, Action::UpdatePomodoroTime).is_none());
        reduce(&mut state, Action::TogglePomodoroTimer);
        reduce(&mut state, Action::UpdatePomodoroTime);
        assert_eq!(state.pomodoro.time_remaining, 25 * 60 - 1);
    }

    #[test]
    fn tick_floors_at_zero() {
        let mut state = State::default();
        state.pomodoro.is_active = true;
        state.pomodoro.time_remaining = 1;
        reduce(&mut state, Action::UpdatePomodoroTime);
        assert_eq!(state.pomodoro.time_remaining, 0);
        assert!(reduce(&mut state, Action::UpdatePomodoroTime).is_none());
        assert_eq!(state.pomodoro.time_remaining, 0);
    }

    #[test]
    fn fourth_completed_pomodoro_earns_long_break() {
        let mut state = State::default();
        state.pomodoro.pomodoros_completed = 3;
        let touched = reduce(&mut state, Action::SetNextPomodoroMode);
        assert_eq!(state.pomodoro.mode, PomodoroMode::LongBreak);
        assert_eq!(state.pomodoro.pomodoros_completed, 4);
        assert_eq!(state.pomodoro.time_remaining, 15 * 60);
        assert_eq!(
            touched,
            Touched::keys([StorageKey::Pomodoro, StorageKey::Notifications])
        );
        assert_eq!(state.notifications[0].kind, NotificationKind::Pomodoro);
    }

    #[test]
    fn other_completions_earn_short_break() {
        let mut state = State::default();
        reduce(&mut state, Action::SetNextPomodoroMode);
        assert_eq!(state.pomodoro.mode, PomodoroMode::ShortBreak);
        assert_eq!(state.pomodoro.pomodoros_completed, 1);
        assert_eq!(state.pomodoro.time_remaining, 5 * 60);
    }

    #[test]
    fn leaving_a_break_does_not_count_a_pomodoro() {
        let mut state = State::default();
        reduce(&mut state, Action::SetNextPomodoroMode);
        let touched = reduce(&mut state, Action::SetNextPomodoroMode);
        assert_eq!(state.pomodoro.mode, PomodoroMode::Pomodoro);
        assert_eq!(state.pomodoro.pomodoros_completed, 1);
        // Break completions are silent.
        assert_eq!(touched, Touched::one(StorageKey::Pomodoro));
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn auto_start_flags_gate_the_entered_phase() {
        let mut state = State::default();
        state.pomodoro.settings.auto_start_breaks = true;
        reduce(&mut state, Action::SetNextPomodoroMode);
        assert!(state.pomodoro.is_active);
        // autoStartPomodoros is still off.
        reduce(&mut state, Action::SetNextPomodoroMode);
        assert!(!state.pomodoro.is_active);
    }

    #[test]
    fn reset_refills_current_phase_and_keeps_count() {
        let mut state = State::default();
        reduce(&mut state, Action::SetNextPomodoroMode);
        state.pomodoro.is_active = true;
        state.pomodoro.time_remaining = 7;
        reduce(&mut state, Action::ResetPomodoro);
        assert!(!state.pomodoro.is_active);
        assert_eq!(state.pomodoro.time_remaining, 5 * 60);
        assert_eq!(state.pomodoro.pomodoros_completed, 1);
    }

    #[test]
    fn settings_update_leaves_running_phase_alone() {
        let mut state = State::default();
        state.pomodoro.is_active = true;
        state.pomodoro.time_remaining = 100;
        let settings = PomodoroSettings {
            pomodoro_minutes: 50,
            ..PomodoroSettings::default()
        };
        reduce(
            &mut state,
            Action::UpdatePomodoroSettings {
                settings: settings.clone(),
            },
        );
        assert_eq!(state.pomodoro.time_remaining, 100);
        state.pomodoro.is_active = false;
        reduce(&mut state, Action::UpdatePomodoroSettings { settings });
        assert_eq!(state.pomodoro.time_remaining, 50 * 60);
    }

    #[test]
    fn deleting_active_task_clears_selection() {
        let mut state = State::default();
        reduce(
            &mut state,
            Action::AddPomodoroTask {
                text: "write report".into(),
            },
        );
        let id = state.pomodoro_tasks[0].id.clone();
        reduce(
            &mut state,
            Action::SetActivePomodoroTask {
                task_id: Some(id.clone()),
            },
        );
        let touched = reduce(&mut state, Action::DeletePomodoroTask { task_id: id });
        assert!(state.active_pomodoro_task_id.is_none());
        assert_eq!(
            touched,
            Touched::keys([
                StorageKey::PomodoroTasks,
                StorageKey::ActivePomodoroTaskId,
            ])
        );
    }

    #[test]
    fn selecting_unknown_task_is_noop() {
        let mut state = State::default();
        let touched = reduce(
            &mut state,
            Action::SetActivePomodoroTask {
                task_id: Some("ghost".into()),
            },
        );
        assert!(touched.is_none());
    }
}
