pub mod action;
mod board;
mod finance;
mod habits;
mod mindmap;
mod misc;
mod notes;
mod pomodoro;
mod todos;

pub use action::Action;

use chrono::{DateTime, Duration, Utc};

use crate::io::StorageKey;
use crate::model::State;

/// Days a trashed card or note survives before the startup sweep
/// purges it.
pub const TRASH_RETENTION_DAYS: i64 = 30;

/// What a reducer branch changed, so the session can mirror exactly the
/// touched slices to storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Touched {
    /// Structural no-op; nothing to persist.
    None,
    Keys(Vec<StorageKey>),
    /// Persist the whole state (SAVE_SETTINGS).
    SaveAll,
    /// Storage was wiped and defaults reinstalled (RESET_SETTINGS).
    Reset,
}

impl Touched {
    pub fn none() -> Touched {
        Touched::None
    }

    pub fn one(key: StorageKey) -> Touched {
        Touched::Keys(vec![key])
    }

    pub fn keys(keys: impl IntoIterator<Item = StorageKey>) -> Touched {
        Touched::Keys(keys.into_iter().collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Touched::None)
    }
}

/// The central state machine: total, synchronous, never panics on a
/// well-formed action. Malformed payloads (missing entities, stale ids)
/// are guard-checked no-ops.
pub fn reduce(state: &mut State, action: Action) -> Touched {
    use Action::*;
    match action {
        // Boards
        AddBoard { title } => board::add_board(state, title),
        RenameBoard { board_id, title } => board::rename_board(state, &board_id, title),
        DeleteBoard { board_id } => board::delete_board(state, &board_id),
        SetActiveBoard { board_id } => board::set_active_board(state, &board_id),

        // Lists
        AddList { title } => board::add_list(state, title),
        RenameList { list_id, title } => board::rename_list(state, &list_id, title),
        DeleteList { list_id } => board::delete_list(state, &list_id),
        MoveList {
            list_id,
            dest_index,
        } => board::move_list(state, &list_id, dest_index),

        // Cards
        AddCard { list_id, title } => board::add_card(state, &list_id, title),
        UpdateCard {
            card_id,
            title,
            description,
        } => board::update_card(state, &card_id, title, description),
        SetCardDueDate { card_id, due_date } => board::set_card_due_date(state, &card_id, due_date),
        SetCardCover {
            card_id,
            cover_image,
        } => board::set_card_cover(state, &card_id, cover_image),
        MoveCard {
            card_id,
            source_list_id,
            dest_list_id,
            dest_index,
        } => board::move_card(state, &card_id, &source_list_id, &dest_list_id, dest_index),
        DeleteCard { card_id } => board::delete_card(state, &card_id),
        RestoreCard { card_id } => board::restore_card(state, &card_id),
        PermanentlyDeleteCard { card_id } => board::permanently_delete_card(state, &card_id),
        EmptyTrash => board::empty_trash(state),
        SetActiveCard { card_id } => board::set_active_card(state, card_id),

        // Labels
        AddLabel { name, color } => board::add_label(state, name, color),
        UpdateLabel {
            label_id,
            name,
            color,
        } => board::update_label(state, &label_id, name, color),
        DeleteLabel { label_id } => board::delete_label(state, &label_id),
        ToggleCardLabel { card_id, label_id } => {
            board::toggle_card_label(state, &card_id, &label_id)
        }

        // Checklists / comments / attachments
        AddChecklist { card_id, title } => board::add_checklist(state, &card_id, title),
        RenameChecklist {
            card_id,
            checklist_id,
            title,
        } => board::rename_checklist(state, &card_id, &checklist_id, title),
        DeleteChecklist {
            card_id,
            checklist_id,
        } => board::delete_checklist(state, &card_id, &checklist_id),
        AddChecklistItem {
            card_id,
            checklist_id,
            text,
        } => board::add_checklist_item(state, &card_id, &checklist_id, text),
        ToggleChecklistItem {
            card_id,
            checklist_id,
            item_id,
        } => board::toggle_checklist_item(state, &card_id, &checklist_id, &item_id),
        DeleteChecklistItem {
            card_id,
            checklist_id,
            item_id,
        } => board::delete_checklist_item(state, &card_id, &checklist_id, &item_id),
        AddComment { card_id, text } => board::add_comment(state, &card_id, text),
        DeleteComment {
            card_id,
            comment_id,
        } => board::delete_comment(state, &card_id, &comment_id),
        AddAttachment { card_id, name, url } => board::add_attachment(state, &card_id, name, url),
        DeleteAttachment {
            card_id,
            attachment_id,
        } => board::delete_attachment(state, &card_id, &attachment_id),

        // Daily todos
        AddTodo {
            text,
            date,
            start_time,
            end_time,
            is_recurring,
            salat_prayer,
        } => todos::add_todo(
            state,
            text,
            date,
            start_time,
            end_time,
            is_recurring,
            salat_prayer,
        ),
        UpdateTodo {
            todo_id,
            text,
            start_time,
            end_time,
        } => todos::update_todo(state, &todo_id, text, start_time, end_time),
        ToggleTodo { todo_id, date } => todos::toggle_todo(state, &todo_id, &date),
        DeleteTodo { todo_id } => todos::delete_todo(state, &todo_id),

        // Pomodoro
        TogglePomodoroTimer => pomodoro::toggle_timer(state),
        UpdatePomodoroTime => pomodoro::tick(state),
        SetNextPomodoroMode => pomodoro::set_next_mode(state),
        ResetPomodoro => pomodoro::reset(state),
        UpdatePomodoroSettings { settings } => pomodoro::update_settings(state, settings),
        AddPomodoroTask { text } => pomodoro::add_task(state, text),
        TogglePomodoroTask { task_id } => pomodoro::toggle_task(state, &task_id),
        DeletePomodoroTask { task_id } => pomodoro::delete_task(state, &task_id),
        SetActivePomodoroTask { task_id } => pomodoro::set_active_task(state, task_id),

        // Notebooks / notes / tags
        AddNotebook { name } => notes::add_notebook(state, name),
        RenameNotebook { notebook_id, name } => notes::rename_notebook(state, &notebook_id, name),
        DeleteNotebook { notebook_id } => notes::delete_notebook(state, &notebook_id),
        MoveNotebook {
            notebook_id,
            dest_index,
        } => notes::move_notebook(state, &notebook_id, dest_index),
        AddNote {
            notebook_id,
            title,
            content,
        } => notes::add_note(state, &notebook_id, title, content),
        UpdateNote {
            note_id,
            title,
            content,
        } => notes::update_note(state, &note_id, title, content),
        MoveNoteToNotebook {
            note_id,
            notebook_id,
        } => notes::move_note_to_notebook(state, &note_id, &notebook_id),
        DeleteNote { note_id } => notes::delete_note(state, &note_id),
        RestoreNote { note_id } => notes::restore_note(state, &note_id),
        PermanentlyDeleteNote { note_id } => notes::permanently_delete_note(state, &note_id),
        AddTag { name, color } => notes::add_tag(state, name, color),
        RenameTag { tag_id, name } => notes::rename_tag(state, &tag_id, name),
        DeleteTag { tag_id } => notes::delete_tag(state, &tag_id),
        ToggleNoteTag { note_id, tag_id } => notes::toggle_note_tag(state, &note_id, &tag_id),
        AddAiTagsToNote { note_id, tag_names } => {
            notes::add_ai_tags_to_note(state, &note_id, tag_names)
        }

        // Habits
        AddHabit {
            name,
            icon,
            color,
            goal,
            goal_unit,
        } => habits::add_habit(state, name, icon, color, goal.unwrap_or(1), goal_unit),
        UpdateHabit {
            habit_id,
            name,
            icon,
            color,
            goal,
            goal_unit,
        } => habits::update_habit(state, &habit_id, name, icon, color, goal, goal_unit),
        DeleteHabit { habit_id } => habits::delete_habit(state, &habit_id),
        ToggleHabitCompletion { habit_id, date } => {
            habits::toggle_completion(state, &habit_id, &date)
        }
        ArchiveHabit { habit_id } => habits::archive_habit(state, &habit_id),
        UnarchiveHabit { habit_id } => habits::unarchive_habit(state, &habit_id),
        SetHabitNote {
            habit_id,
            date,
            text,
        } => habits::set_habit_note(state, &habit_id, date, text),

        // Finance
        AddAccount {
            name,
            initial_balance,
        } => finance::add_account(state, name, initial_balance),
        UpdateAccount { account_id, name } => finance::update_account(state, &account_id, name),
        DeleteAccount { account_id } => finance::delete_account(state, &account_id),
        AddTransaction {
            account_id,
            kind,
            amount,
            category,
            description,
            date,
        } => finance::add_transaction(state, &account_id, kind, amount, category, description, date),
        DeleteTransaction { transaction_id } => finance::delete_transaction(state, &transaction_id),
        AddLoan {
            counterparty,
            kind,
            initial_amount,
        } => finance::add_loan(state, counterparty, kind, initial_amount),
        DeleteLoan { loan_id } => finance::delete_loan(state, &loan_id),
        RecordLoanPayment {
            loan_id,
            account_id,
            amount,
            date,
        } => finance::record_loan_payment(state, &loan_id, &account_id, amount, date),
        AddInvestment {
            name,
            invested_amount,
        } => finance::add_investment(state, name, invested_amount),
        DeleteInvestment { investment_id } => finance::delete_investment(state, &investment_id),
        RecordProfit {
            investment_id,
            account_id,
            amount,
            date,
        } => finance::record_profit(state, &investment_id, &account_id, amount, date),

        // Mind maps
        AddMindMap { name } => mindmap::add_mindmap(state, name),
        RenameMindMap { mindmap_id, name } => mindmap::rename_mindmap(state, &mindmap_id, name),
        DeleteMindMap { mindmap_id } => mindmap::delete_mindmap(state, &mindmap_id),
        UpdateMindMap {
            mindmap_id,
            items,
            display_order,
        } => mindmap::update_mindmap(state, &mindmap_id, items, display_order),
        UndoMindMap { mindmap_id } => mindmap::undo_mindmap(state, &mindmap_id),
        RedoMindMap { mindmap_id } => mindmap::redo_mindmap(state, &mindmap_id),

        // Timeline
        AddTimelineEvent {
            title,
            description,
            date,
            color,
        } => misc::add_timeline_event(state, title, description, date, color),
        UpdateTimelineEvent {
            event_id,
            title,
            description,
            date,
            color,
        } => misc::update_timeline_event(state, &event_id, title, description, date, color),
        DeleteTimelineEvent { event_id } => misc::delete_timeline_event(state, &event_id),

        // Bookmarks
        AddBookmarkFolder { name } => misc::add_bookmark_folder(state, name),
        RenameBookmarkFolder { folder_id, name } => {
            misc::rename_bookmark_folder(state, &folder_id, name)
        }
        DeleteBookmarkFolder { folder_id } => misc::delete_bookmark_folder(state, &folder_id),
        AddBookmark {
            folder_id,
            title,
            url,
        } => misc::add_bookmark(state, &folder_id, title, url),
        DeleteBookmark {
            folder_id,
            bookmark_id,
        } => misc::delete_bookmark(state, &folder_id, &bookmark_id),

        // Quran
        ToggleAyahMemorized { surah, ayah } => misc::toggle_ayah_memorized(state, surah, ayah),
        SetSurahMemorized { surah, memorized } => {
            misc::set_surah_memorized(state, surah, memorized)
        }

        // Notifications
        AddNotification { kind, message } => misc::add_notification(state, kind, message),
        MarkNotificationRead { notification_id } => {
            misc::mark_notification_read(state, &notification_id)
        }
        MarkAllNotificationsRead => misc::mark_all_notifications_read(state),
        ClearNotifications => misc::clear_notifications(state),

        // Preferences
        SetTheme { theme } => misc::set_theme(state, theme),
        SetPrimaryColor { color } => misc::set_primary_color(state, color),
        SetAppPassword { password } => misc::set_app_password(state, password),
        SetTimeTrackerWidth { width } => misc::set_time_tracker_width(state, width),
        SetAppViewScale { scale } => misc::set_app_view_scale(state, scale),
        SetSalatLocation { location } => misc::set_salat_location(state, location),
        SetAutoColorChange { enabled, interval } => {
            misc::set_auto_color_change(state, enabled, interval)
        }
        SaveSettings => Touched::SaveAll,
        ResetSettings => {
            *state = State::default();
            Touched::Reset
        }
    }
}

/// Startup purge: drop trashed cards and notes whose `deleted_at` is more
/// than 30 days old. Entries with unparseable timestamps are kept, the
/// same way the original tolerated them. Returns the keys that changed.
pub fn sweep_expired_trash(state: &mut State, now: DateTime<Utc>) -> Vec<StorageKey> {
    let cutoff = now - Duration::days(TRASH_RETENTION_DAYS);
    let expired = |deleted_at: &str| match DateTime::parse_from_rfc3339(deleted_at) {
        Ok(ts) => ts.with_timezone(&Utc) < cutoff,
        Err(_) => false,
    };

    let mut touched = Vec::new();

    let mut boards_changed = false;
    for board in state.boards.values_mut() {
        let before = board.trashed_cards.len();
        board.trashed_cards.retain(|_, t| !expired(&t.deleted_at));
        if board.trashed_cards.len() != before {
            boards_changed = true;
        }
    }
    if boards_changed {
        touched.push(StorageKey::Boards);
    }

    let before = state.trashed_notes.len();
    state.trashed_notes.retain(|t| !expired(&t.deleted_at));
    if state.trashed_notes.len() != before {
        touched.push(StorageKey::TrashedNotes);
    }

    touched
}
