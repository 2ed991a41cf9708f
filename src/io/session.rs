use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::model::{Preferences, State};
use crate::store::{reduce, sweep_expired_trash, Action, Touched};

use super::{StorageError, StorageKey, StoragePort};

/// Owns the state and the storage port. Every mutating dispatch mirrors
/// exactly the touched keys back to storage; the reducer itself never
/// sees the port.
pub struct Session<P: StoragePort> {
    port: P,
    state: State,
}

impl<P: StoragePort> Session<P> {
    /// Load all keys (defaulting each one on absence or a malformed
    /// blob), repair a dangling active-board reference, and run the
    /// 30-day trash sweep, writing back whatever the sweep changed.
    pub fn open(port: P) -> Session<P> {
        let mut session = Session {
            state: load_state(&port),
            port,
        };

        if let Some(id) = session.state.active_board_id.clone() {
            if !session.state.boards.contains_key(&id) {
                warn!(board_id = %id, "active board does not exist, falling back");
                session.state.active_board_id = session.state.boards.keys().next().cloned();
                session.write_key(StorageKey::ActiveBoardId);
            }
        }

        for key in sweep_expired_trash(&mut session.state, Utc::now()) {
            session.write_key(key);
        }
        session
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_port(self) -> P {
        self.port
    }

    /// Run one action through the reducer and mirror the result.
    /// Incremental writes are best-effort (logged); the whole-state
    /// operations propagate failure to the caller.
    pub fn dispatch(&mut self, action: Action) -> Result<Touched, StorageError> {
        let touched = reduce(&mut self.state, action);
        match &touched {
            Touched::None => {}
            Touched::Keys(keys) => {
                for &key in keys {
                    self.write_key(key);
                }
            }
            Touched::SaveAll => self.save_all()?,
            Touched::Reset => self.port.clear()?,
        }
        Ok(touched)
    }

    /// Write every key from the current state.
    pub fn save_all(&mut self) -> Result<(), StorageError> {
        for key in StorageKey::ALL {
            let json = self.encode_key(key)?;
            self.port.save(key, &json)?;
        }
        Ok(())
    }

    fn write_key(&mut self, key: StorageKey) {
        match self.encode_key(key) {
            Ok(json) => {
                if let Err(err) = self.port.save(key, &json) {
                    warn!(%key, %err, "write failed, state and storage have diverged");
                }
            }
            Err(err) => warn!(%key, %err, "could not encode slice"),
        }
    }

    /// The JSON blob for one key as it would be persisted.
    pub fn encode_key(&self, key: StorageKey) -> Result<String, StorageError> {
        let state = &self.state;
        let result = match key {
            StorageKey::Boards => serde_json::to_string(&state.boards),
            StorageKey::ActiveBoardId => serde_json::to_string(&state.active_board_id),
            StorageKey::DailyTodos => serde_json::to_string(&state.daily_todos),
            StorageKey::Pomodoro => serde_json::to_string(&state.pomodoro),
            StorageKey::PomodoroTasks => serde_json::to_string(&state.pomodoro_tasks),
            StorageKey::ActivePomodoroTaskId => {
                serde_json::to_string(&state.active_pomodoro_task_id)
            }
            StorageKey::Notifications => serde_json::to_string(&state.notifications),
            StorageKey::Notebooks => serde_json::to_string(&state.notebooks),
            StorageKey::NotebookOrder => serde_json::to_string(&state.notebook_order),
            StorageKey::Notes => serde_json::to_string(&state.notes),
            StorageKey::Tags => serde_json::to_string(&state.tags),
            StorageKey::TrashedNotes => serde_json::to_string(&state.trashed_notes),
            StorageKey::TimelineEvents => serde_json::to_string(&state.timeline_events),
            StorageKey::Accounts => serde_json::to_string(&state.accounts),
            StorageKey::Transactions => serde_json::to_string(&state.transactions),
            StorageKey::Loans => serde_json::to_string(&state.loans),
            StorageKey::Investments => serde_json::to_string(&state.investments),
            StorageKey::QuranProgress => serde_json::to_string(&state.quran_progress),
            StorageKey::MindMaps => serde_json::to_string(&state.mind_maps),
            StorageKey::Habits => serde_json::to_string(&state.habits),
            StorageKey::ArchivedHabits => serde_json::to_string(&state.archived_habits),
            StorageKey::BookmarkFolders => serde_json::to_string(&state.bookmark_folders),
            StorageKey::Theme => serde_json::to_string(&state.prefs.theme),
            StorageKey::PrimaryColor => serde_json::to_string(&state.prefs.primary_color),
            StorageKey::AppPassword => serde_json::to_string(&state.prefs.app_password),
            StorageKey::TimeTrackerWidth => serde_json::to_string(&state.prefs.time_tracker_width),
            StorageKey::AppViewScale => serde_json::to_string(&state.prefs.app_view_scale),
            StorageKey::SalatLocation => serde_json::to_string(&state.prefs.salat_location),
            StorageKey::IsAutoColorChangeEnabled => {
                serde_json::to_string(&state.prefs.is_auto_color_change_enabled)
            }
            StorageKey::AutoColorChangeInterval => {
                serde_json::to_string(&state.prefs.auto_color_change_interval)
            }
        };
        result.map_err(|source| StorageError::Encode {
            key: key.as_str(),
            source,
        })
    }
}

/// Decode one key, treating absence and malformed JSON the same way:
/// fall back to the default silently (warn-logged for the latter).
fn decode<T: DeserializeOwned>(port: &impl StoragePort, key: StorageKey) -> Option<T> {
    let raw = port.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%key, %err, "malformed blob, using default");
            None
        }
    }
}

fn load_state(port: &impl StoragePort) -> State {
    let mut prefs = Preferences::default();
    if let Some(v) = decode(port, StorageKey::Theme) {
        prefs.theme = v;
    }
    if let Some(v) = decode(port, StorageKey::PrimaryColor) {
        prefs.primary_color = v;
    }
    if let Some(v) = decode(port, StorageKey::AppPassword) {
        prefs.app_password = v;
    }
    if let Some(v) = decode(port, StorageKey::TimeTrackerWidth) {
        prefs.time_tracker_width = v;
    }
    if let Some(v) = decode(port, StorageKey::AppViewScale) {
        prefs.app_view_scale = v;
    }
    if let Some(v) = decode(port, StorageKey::SalatLocation) {
        prefs.salat_location = v;
    }
    if let Some(v) = decode(port, StorageKey::IsAutoColorChangeEnabled) {
        prefs.is_auto_color_change_enabled = v;
    }
    if let Some(v) = decode(port, StorageKey::AutoColorChangeInterval) {
        prefs.auto_color_change_interval = v;
    }

    State {
        boards: decode(port, StorageKey::Boards).unwrap_or_default(),
        active_board_id: decode(port, StorageKey::ActiveBoardId).unwrap_or_default(),
        active_card_id: None,
        daily_todos: decode(port, StorageKey::DailyTodos).unwrap_or_default(),
        pomodoro: decode(port, StorageKey::Pomodoro).unwrap_or_default(),
        pomodoro_tasks: decode(port, StorageKey::PomodoroTasks).unwrap_or_default(),
        active_pomodoro_task_id: decode(port, StorageKey::ActivePomodoroTaskId)
            .unwrap_or_default(),
        notifications: decode(port, StorageKey::Notifications).unwrap_or_default(),
        notebooks: decode(port, StorageKey::Notebooks).unwrap_or_default(),
        notebook_order: decode(port, StorageKey::NotebookOrder).unwrap_or_default(),
        notes: decode(port, StorageKey::Notes).unwrap_or_default(),
        tags: decode(port, StorageKey::Tags).unwrap_or_default(),
        trashed_notes: decode(port, StorageKey::TrashedNotes).unwrap_or_default(),
        timeline_events: decode(port, StorageKey::TimelineEvents).unwrap_or_default(),
        accounts: decode(port, StorageKey::Accounts).unwrap_or_default(),
        transactions: decode(port, StorageKey::Transactions).unwrap_or_default(),
        loans: decode(port, StorageKey::Loans).unwrap_or_default(),
        investments: decode(port, StorageKey::Investments).unwrap_or_default(),
        quran_progress: decode(port, StorageKey::QuranProgress).unwrap_or_default(),
        mind_maps: decode(port, StorageKey::MindMaps).unwrap_or_default(),
        habits: decode(port, StorageKey::Habits).unwrap_or_default(),
        archived_habits: decode(port, StorageKey::ArchivedHabits).unwrap_or_default(),
        bookmark_folders: decode(port, StorageKey::BookmarkFolders).unwrap_or_default(),
        prefs,
    }
}
