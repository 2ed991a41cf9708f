/// The closed set of persisted storage keys, one JSON blob each. Key
/// names match the original browser-storage layout so existing data
/// round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Boards,
    ActiveBoardId,
    DailyTodos,
    Pomodoro,
    PomodoroTasks,
    ActivePomodoroTaskId,
    Notifications,
    Notebooks,
    NotebookOrder,
    Notes,
    Tags,
    TrashedNotes,
    TimelineEvents,
    Accounts,
    Transactions,
    Loans,
    Investments,
    QuranProgress,
    MindMaps,
    Habits,
    ArchivedHabits,
    BookmarkFolders,
    Theme,
    PrimaryColor,
    AppPassword,
    TimeTrackerWidth,
    AppViewScale,
    SalatLocation,
    IsAutoColorChangeEnabled,
    AutoColorChangeInterval,
}

impl StorageKey {
    pub const ALL: [StorageKey; 30] = [
        StorageKey::Boards,
        StorageKey::ActiveBoardId,
        StorageKey::DailyTodos,
        StorageKey::Pomodoro,
        StorageKey::PomodoroTasks,
        StorageKey::ActivePomodoroTaskId,
        StorageKey::Notifications,
        StorageKey::Notebooks,
        StorageKey::NotebookOrder,
        StorageKey::Notes,
        StorageKey::Tags,
        StorageKey::TrashedNotes,
        StorageKey::TimelineEvents,
        StorageKey::Accounts,
        StorageKey::Transactions,
        StorageKey::Loans,
        StorageKey::Investments,
        StorageKey::QuranProgress,
        StorageKey::MindMaps,
        StorageKey::Habits,
        StorageKey::ArchivedHabits,
        StorageKey::BookmarkFolders,
        StorageKey::Theme,
        StorageKey::PrimaryColor,
        StorageKey::AppPassword,
        StorageKey::TimeTrackerWidth,
        StorageKey::AppViewScale,
        StorageKey::SalatLocation,
        StorageKey::IsAutoColorChangeEnabled,
        StorageKey::AutoColorChangeInterval,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Boards => "boards",
            StorageKey::ActiveBoardId => "activeBoardId",
            StorageKey::DailyTodos => "dailyTodos",
            StorageKey::Pomodoro => "pomodoro",
            StorageKey::PomodoroTasks => "pomodoroTasks",
            StorageKey::ActivePomodoroTaskId => "activePomodoroTaskId",
            StorageKey::Notifications => "notifications",
            StorageKey::Notebooks => "notebooks",
            StorageKey::NotebookOrder => "notebookOrder",
            StorageKey::Notes => "notes",
            StorageKey::Tags => "tags",
            StorageKey::TrashedNotes => "trashedNotes",
            StorageKey::TimelineEvents => "timelineEvents",
            StorageKey::Accounts => "accounts",
            StorageKey::Transactions => "transactions",
            StorageKey::Loans => "loans",
            StorageKey::Investments => "investments",
            StorageKey::QuranProgress => "quranProgress",
            StorageKey::MindMaps => "mindMaps",
            StorageKey::Habits => "habits",
            StorageKey::ArchivedHabits => "archivedHabits",
            StorageKey::BookmarkFolders => "bookmarkFolders",
            StorageKey::Theme => "theme",
            StorageKey::PrimaryColor => "primaryColor",
            StorageKey::AppPassword => "appPassword",
            StorageKey::TimeTrackerWidth => "timeTrackerWidth",
            StorageKey::AppViewScale => "appViewScale",
            StorageKey::SalatLocation => "salatLocation",
            StorageKey::IsAutoColorChangeEnabled => "isAutoColorChangeEnabled",
            StorageKey::AutoColorChangeInterval => "autoColorChangeInterval",
        }
    }

    pub fn parse(name: &str) -> Option<StorageKey> {
        StorageKey::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
