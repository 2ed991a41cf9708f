use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::model::{LoanKind, NotificationKind, PomodoroSettings, TransactionKind};

/// Every state transition the UI may request, as one closed tagged
/// union. Serialized with a `type` discriminant (e.g. `MOVE_CARD`) so
/// dispatches round-trip as the original wire shape.
///
/// Board-scoped variants (lists, cards, labels) implicitly target the
/// active board; without one they reduce to no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Action {
    // --- Boards ---
    AddBoard { title: String },
    RenameBoard { board_id: String, title: String },
    DeleteBoard { board_id: String },
    SetActiveBoard { board_id: String },

    // --- Lists (active board) ---
    AddList { title: String },
    RenameList { list_id: String, title: String },
    DeleteList { list_id: String },
    MoveList { list_id: String, dest_index: usize },

    // --- Cards (active board) ---
    AddCard {
        list_id: String,
        title: String,
    },
    UpdateCard {
        card_id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    SetCardDueDate {
        card_id: String,
        due_date: Option<String>,
    },
    SetCardCover {
        card_id: String,
        cover_image: Option<String>,
    },
    /// For same-list moves the caller pre-adjusts `dest_index` when it
    /// lies past the removal point; the reducer clamps but does not
    /// re-adjust.
    MoveCard {
        card_id: String,
        source_list_id: String,
        dest_list_id: String,
        dest_index: usize,
    },
    DeleteCard { card_id: String },
    RestoreCard { card_id: String },
    PermanentlyDeleteCard { card_id: String },
    /// Global: clears the active board's card trash, the note trash and
    /// the archived habits in one dispatch.
    EmptyTrash,
    SetActiveCard { card_id: Option<String> },

    // --- Labels (active board) ---
    AddLabel { name: String, color: String },
    UpdateLabel { label_id: String, name: String, color: String },
    DeleteLabel { label_id: String },
    ToggleCardLabel { card_id: String, label_id: String },

    // --- Checklists / comments / attachments (active board) ---
    AddChecklist { card_id: String, title: String },
    RenameChecklist { card_id: String, checklist_id: String, title: String },
    DeleteChecklist { card_id: String, checklist_id: String },
    AddChecklistItem { card_id: String, checklist_id: String, text: String },
    ToggleChecklistItem { card_id: String, checklist_id: String, item_id: String },
    DeleteChecklistItem { card_id: String, checklist_id: String, item_id: String },
    AddComment { card_id: String, text: String },
    DeleteComment { card_id: String, comment_id: String },
    AddAttachment { card_id: String, name: String, url: String },
    DeleteAttachment { card_id: String, attachment_id: String },

    // --- Daily todos ---
    AddTodo {
        text: String,
        date: String,
        #[serde(default)]
        start_time: Option<String>,
        #[serde(default)]
        end_time: Option<String>,
        #[serde(default)]
        is_recurring: bool,
        #[serde(default)]
        salat_prayer: Option<String>,
    },
    UpdateTodo {
        todo_id: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        start_time: Option<String>,
        #[serde(default)]
        end_time: Option<String>,
    },
    /// Recurring todos flip the per-date entry for `date`; one-off todos
    /// flip `is_completed` and ignore `date`.
    ToggleTodo { todo_id: String, date: String },
    DeleteTodo { todo_id: String },

    // --- Pomodoro ---
    TogglePomodoroTimer,
    /// One-second tick from the caller's interval timer.
    UpdatePomodoroTime,
    SetNextPomodoroMode,
    ResetPomodoro,
    UpdatePomodoroSettings { settings: PomodoroSettings },
    AddPomodoroTask { text: String },
    TogglePomodoroTask { task_id: String },
    DeletePomodoroTask { task_id: String },
    SetActivePomodoroTask { task_id: Option<String> },

    // --- Notebooks / notes / tags ---
    AddNotebook { name: String },
    RenameNotebook { notebook_id: String, name: String },
    DeleteNotebook { notebook_id: String },
    MoveNotebook { notebook_id: String, dest_index: usize },
    AddNote { notebook_id: String, title: String, content: String },
    UpdateNote {
        note_id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        content: Option<String>,
    },
    MoveNoteToNotebook { note_id: String, notebook_id: String },
    DeleteNote { note_id: String },
    RestoreNote { note_id: String },
    PermanentlyDeleteNote { note_id: String },
    AddTag { name: String, color: String },
    RenameTag { tag_id: String, name: String },
    DeleteTag { tag_id: String },
    ToggleNoteTag { note_id: String, tag_id: String },
    /// Apply AI-suggested tag names: reuse existing tags case-
    /// insensitively, synthesize the rest with palette colors.
    AddAiTagsToNote { note_id: String, tag_names: Vec<String> },

    // --- Habits ---
    AddHabit {
        name: String,
        #[serde(default)]
        icon: String,
        #[serde(default)]
        color: String,
        #[serde(default)]
        goal: Option<u32>,
        #[serde(default)]
        goal_unit: String,
    },
    UpdateHabit {
        habit_id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        goal: Option<u32>,
        #[serde(default)]
        goal_unit: Option<String>,
    },
    DeleteHabit { habit_id: String },
    ToggleHabitCompletion { habit_id: String, date: String },
    ArchiveHabit { habit_id: String },
    UnarchiveHabit { habit_id: String },
    SetHabitNote { habit_id: String, date: String, text: String },

    // --- Finance ---
    AddAccount { name: String, initial_balance: f64 },
    UpdateAccount { account_id: String, name: String },
    DeleteAccount { account_id: String },
    AddTransaction {
        account_id: String,
        kind: TransactionKind,
        amount: f64,
        #[serde(default)]
        category: String,
        #[serde(default)]
        description: String,
        date: String,
    },
    DeleteTransaction { transaction_id: String },
    AddLoan { counterparty: String, kind: LoanKind, initial_amount: f64 },
    DeleteLoan { loan_id: String },
    /// Composite: appends a payment, bumps the loan aggregate,
    /// synthesizes a transaction and adjusts the account, atomically.
    RecordLoanPayment { loan_id: String, account_id: String, amount: f64, date: String },
    AddInvestment { name: String, invested_amount: f64 },
    DeleteInvestment { investment_id: String },
    /// Composite like `RecordLoanPayment`; always credits the account.
    RecordProfit { investment_id: String, account_id: String, amount: f64, date: String },

    // --- Mind maps ---
    AddMindMap { name: String },
    RenameMindMap { mindmap_id: String, name: String },
    DeleteMindMap { mindmap_id: String },
    /// A payload carrying both `items` and `display_order` is a content
    /// edit and pushes history; anything less leaves history untouched.
    UpdateMindMap {
        mindmap_id: String,
        #[serde(default)]
        items: Option<HashMap<String, Value>>,
        #[serde(default)]
        display_order: Option<Vec<String>>,
    },
    UndoMindMap { mindmap_id: String },
    RedoMindMap { mindmap_id: String },

    // --- Timeline ---
    AddTimelineEvent {
        title: String,
        #[serde(default)]
        description: Option<String>,
        date: String,
        #[serde(default)]
        color: Option<String>,
    },
    UpdateTimelineEvent {
        event_id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        date: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    DeleteTimelineEvent { event_id: String },

    // --- Bookmarks ---
    AddBookmarkFolder { name: String },
    RenameBookmarkFolder { folder_id: String, name: String },
    DeleteBookmarkFolder { folder_id: String },
    AddBookmark { folder_id: String, title: String, url: String },
    DeleteBookmark { folder_id: String, bookmark_id: String },

    // --- Quran memorization ---
    ToggleAyahMemorized { surah: u16, ayah: u16 },
    SetSurahMemorized { surah: u16, memorized: bool },

    // --- Notifications ---
    AddNotification { kind: NotificationKind, message: String },
    MarkNotificationRead { notification_id: String },
    MarkAllNotificationsRead,
    ClearNotifications,

    // --- Preferences ---
    SetTheme { theme: String },
    SetPrimaryColor { color: String },
    SetAppPassword { password: Option<String> },
    SetTimeTrackerWidth { width: u32 },
    SetAppViewScale { scale: f64 },
    SetSalatLocation { location: Option<String> },
    SetAutoColorChange { enabled: bool, interval: u32 },
    /// Explicit "save everything" — the only action besides reset that
    /// persists the whole state at once.
    SaveSettings,
    /// Wipes all persisted keys and reinstalls hardcoded defaults. The
    /// caller is expected to reload the UI afterwards.
    ResetSettings,
}
