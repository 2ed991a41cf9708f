use indexmap::IndexMap;

use super::board::{Board, BoardId, CardId};
use super::bookmark::BookmarkFolder;
use super::finance::{Account, Investment, Loan, Transaction};
use super::habit::Habit;
use super::mindmap::MindMap;
use super::notes::{Note, Notebook, NotebookId, Tag, TrashedNote};
use super::notification::Notification;
use super::pomodoro::{Pomodoro, PomodoroTask};
use super::prefs::Preferences;
use super::quran::QuranProgress;
use super::timeline::TimelineEvent;
use super::todo::DailyTodo;

/// The whole application state, one slice per storage key (plus the
/// in-memory-only `active_card_id`). All board-scoped actions implicitly
/// target `active_board_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub boards: IndexMap<BoardId, Board>,
    pub active_board_id: Option<BoardId>,
    /// Card currently open in the detail modal. Not persisted.
    pub active_card_id: Option<CardId>,
    pub daily_todos: Vec<DailyTodo>,
    pub pomodoro: Pomodoro,
    pub pomodoro_tasks: Vec<PomodoroTask>,
    pub active_pomodoro_task_id: Option<String>,
    pub notifications: Vec<Notification>,
    pub notebooks: Vec<Notebook>,
    pub notebook_order: Vec<NotebookId>,
    pub notes: Vec<Note>,
    pub tags: Vec<Tag>,
    pub trashed_notes: Vec<TrashedNote>,
    pub timeline_events: Vec<TimelineEvent>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub loans: Vec<Loan>,
    pub investments: Vec<Investment>,
    pub quran_progress: QuranProgress,
    pub mind_maps: Vec<MindMap>,
    pub habits: Vec<Habit>,
    pub archived_habits: Vec<Habit>,
    pub bookmark_folders: Vec<BookmarkFolder>,
    pub prefs: Preferences,
}

impl State {
    pub fn active_board(&self) -> Option<&Board> {
        self.boards.get(self.active_board_id.as_deref()?)
    }
}
