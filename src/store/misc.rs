use std::collections::BTreeSet;

use crate::io::StorageKey;
use crate::model::{
    quran, Bookmark, BookmarkFolder, Notification, NotificationKind, State, TimelineEvent,
};

use super::Touched;

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

pub(super) fn add_timeline_event(
    state: &mut State,
    title: String,
    description: Option<String>,
    date: String,
    color: Option<String>,
) -> Touched {
    let mut event = TimelineEvent::new(title, date);
    event.description = description;
    event.color = color;
    state.timeline_events.push(event);
    Touched::one(StorageKey::TimelineEvents)
}

pub(super) fn update_timeline_event(
    state: &mut State,
    event_id: &str,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    color: Option<String>,
) -> Touched {
    let Some(event) = state.timeline_events.iter_mut().find(|e| e.id == event_id) else {
        return Touched::none();
    };
    if let Some(title) = title {
        event.title = title;
    }
    if description.is_some() {
        event.description = description;
    }
    if let Some(date) = date {
        event.date = date;
    }
    if color.is_some() {
        event.color = color;
    }
    Touched::one(StorageKey::TimelineEvents)
}

pub(super) fn delete_timeline_event(state: &mut State, event_id: &str) -> Touched {
    let before = state.timeline_events.len();
    state.timeline_events.retain(|e| e.id != event_id);
    if state.timeline_events.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::TimelineEvents)
}

// ---------------------------------------------------------------------------
// Bookmarks
// ---------------------------------------------------------------------------

pub(super) fn add_bookmark_folder(state: &mut State, name: String) -> Touched {
    state.bookmark_folders.push(BookmarkFolder::new(name));
    Touched::one(StorageKey::BookmarkFolders)
}

pub(super) fn rename_bookmark_folder(state: &mut State, folder_id: &str, name: String) -> Touched {
    let Some(folder) = state.bookmark_folders.iter_mut().find(|f| f.id == folder_id) else {
        return Touched::none();
    };
    folder.name = name;
    Touched::one(StorageKey::BookmarkFolders)
}

/// Bookmarks live inside their folder, so they go with it.
pub(super) fn delete_bookmark_folder(state: &mut State, folder_id: &str) -> Touched {
    let before = state.bookmark_folders.len();
    state.bookmark_folders.retain(|f| f.id != folder_id);
    if state.bookmark_folders.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::BookmarkFolders)
}

pub(super) fn add_bookmark(
    state: &mut State,
    folder_id: &str,
    title: String,
    url: String,
) -> Touched {
    let Some(folder) = state.bookmark_folders.iter_mut().find(|f| f.id == folder_id) else {
        return Touched::none();
    };
    folder.bookmarks.push(Bookmark::new(title, url));
    Touched::one(StorageKey::BookmarkFolders)
}

pub(super) fn delete_bookmark(state: &mut State, folder_id: &str, bookmark_id: &str) -> Touched {
    let Some(folder) = state.bookmark_folders.iter_mut().find(|f| f.id == folder_id) else {
        return Touched::none();
    };
    let before = folder.bookmarks.len();
    folder.bookmarks.retain(|b| b.id != bookmark_id);
    if folder.bookmarks.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::BookmarkFolders)
}

// ---------------------------------------------------------------------------
// Quran memorization
// ---------------------------------------------------------------------------

pub(super) fn toggle_ayah_memorized(state: &mut State, surah: u16, ayah: u16) -> Touched {
    let Some(total) = quran::verse_count(surah) else {
        return Touched::none();
    };
    if ayah == 0 || ayah > total {
        return Touched::none();
    }
    let entry = state.quran_progress.entry(surah).or_default();
    if !entry.remove(&ayah) {
        entry.insert(ayah);
    }
    if entry.is_empty() {
        state.quran_progress.remove(&surah);
    }
    Touched::one(StorageKey::QuranProgress)
}

/// Mark or clear a whole surah at once.
pub(super) fn set_surah_memorized(state: &mut State, surah: u16, memorized: bool) -> Touched {
    let Some(total) = quran::verse_count(surah) else {
        return Touched::none();
    };
    if memorized {
        state
            .quran_progress
            .insert(surah, (1..=total).collect::<BTreeSet<u16>>());
    } else if state.quran_progress.remove(&surah).is_none() {
        return Touched::none();
    }
    Touched::one(StorageKey::QuranProgress)
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

pub(super) fn add_notification(
    state: &mut State,
    kind: NotificationKind,
    message: String,
) -> Touched {
    state.notifications.push(Notification::new(kind, message));
    Touched::one(StorageKey::Notifications)
}

pub(super) fn mark_notification_read(state: &mut State, notification_id: &str) -> Touched {
    let Some(n) = state
        .notifications
        .iter_mut()
        .find(|n| n.id == notification_id)
    else {
        return Touched::none();
    };
    if n.is_read {
        return Touched::none();
    }
    n.is_read = true;
    Touched::one(StorageKey::Notifications)
}

pub(super) fn mark_all_notifications_read(state: &mut State) -> Touched {
    if state.notifications.iter().all(|n| n.is_read) {
        return Touched::none();
    }
    for n in &mut state.notifications {
        n.is_read = true;
    }
    Touched::one(StorageKey::Notifications)
}

pub(super) fn clear_notifications(state: &mut State) -> Touched {
    if state.notifications.is_empty() {
        return Touched::none();
    }
    state.notifications.clear();
    Touched::one(StorageKey::Notifications)
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

pub(super) fn set_theme(state: &mut State, theme: String) -> Touched {
    state.prefs.theme = theme;
    Touched::one(StorageKey::Theme)
}

pub(super) fn set_primary_color(state: &mut State, color: String) -> Touched {
    state.prefs.primary_color = color;
    Touched::one(StorageKey::PrimaryColor)
}

pub(super) fn set_app_password(state: &mut State, password: Option<String>) -> Touched {
    state.prefs.app_password = password;
    Touched::one(StorageKey::AppPassword)
}

pub(super) fn set_time_tracker_width(state: &mut State, width: u32) -> Touched {
    state.prefs.time_tracker_width = width;
    Touched::one(StorageKey::TimeTrackerWidth)
}

pub(super) fn set_app_view_scale(state: &mut State, scale: f64) -> Touched {
    state.prefs.app_view_scale = scale;
    Touched::one(StorageKey::AppViewScale)
}

pub(super) fn set_salat_location(state: &mut State, location: Option<String>) -> Touched {
    state.prefs.salat_location = location;
    Touched::one(StorageKey::SalatLocation)
}

pub(super) fn set_auto_color_change(state: &mut State, enabled: bool, interval: u32) -> Touched {
    state.prefs.is_auto_color_change_enabled = enabled;
    state.prefs.auto_color_change_interval = interval;
    Touched::keys([
        StorageKey::IsAutoColorChangeEnabled,
        StorageKey::AutoColorChangeInterval,
    ])
}

#[cfg(test)]
mod tests {
    use super::super::{reduce, Action, Touched};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_ayah_is_self_inverse_and_prunes_empty_surahs() {
        let mut state = State::default();
        reduce(&mut state, Action::ToggleAyahMemorized { surah: 1, ayah: 3 });
        assert!(state.quran_progress[&1].contains(&3));
        reduce(&mut state, Action::ToggleAyahMemorized { surah: 1, ayah: 3 });
        assert!(!state.quran_progress.contains_key(&1));
    }

    #[test]
    fn out_of_range_ayah_is_rejected() {
        let mut state = State::default();
        // Surah 1 has 7 ayahs.
        assert!(reduce(&mut state, Action::ToggleAyahMemorized { surah: 1, ayah: 8 }).is_none());
        assert!(reduce(&mut state, Action::ToggleAyahMemorized { surah: 1, ayah: 0 }).is_none());
        assert!(
            reduce(&mut state, Action::ToggleAyahMemorized { surah: 115, ayah: 1 }).is_none()
        );
        assert!(state.quran_progress.is_empty());
    }

    #[test]
    fn set_surah_memorized_fills_every_ayah() {
        let mut state = State::default();
        reduce(
            &mut state,
            Action::SetSurahMemorized {
                surah: 114,
                memorized: true,
            },
        );
        assert_eq!(state.quran_progress[&114].len(), 6);
        reduce(
            &mut state,
            Action::SetSurahMemorized {
                surah: 114,
                memorized: false,
            },
        );
        assert!(state.quran_progress.is_empty());
    }

    #[test]
    fn notification_read_flags() {
        let mut state = State::default();
        for i in 0..3 {
            reduce(
                &mut state,
                Action::AddNotification {
                    kind: NotificationKind::System,
                    message: format!("n{i}"),
                },
            );
        }
        let first = state.notifications[0].id.clone();
        reduce(
            &mut state,
            Action::MarkNotificationRead {
                notification_id: first,
            },
        );
        assert!(state.notifications[0].is_read);
        assert!(!state.notifications[1].is_read);

        reduce(&mut state, Action::MarkAllNotificationsRead);
        assert!(state.notifications.iter().all(|n| n.is_read));
        // All read already: marking again is a no-op.
        assert!(reduce(&mut state, Action::MarkAllNotificationsRead).is_none());

        reduce(&mut state, Action::ClearNotifications);
        assert!(state.notifications.is_empty());
        assert!(reduce(&mut state, Action::ClearNotifications).is_none());
    }

    #[test]
    fn bookmark_lives_and_dies_with_its_folder() {
        let mut state = State::default();
        reduce(
            &mut state,
            Action::AddBookmarkFolder {
                name: "Reading".into(),
            },
        );
        let folder_id = state.bookmark_folders[0].id.clone();
        reduce(
            &mut state,
            Action::AddBookmark {
                folder_id: folder_id.clone(),
                title: "rust book".into(),
                url: "https://doc.rust-lang.org/book/".into(),
            },
        );
        assert_eq!(state.bookmark_folders[0].bookmarks.len(), 1);
        reduce(&mut state, Action::DeleteBookmarkFolder { folder_id });
        assert!(state.bookmark_folders.is_empty());
    }

    #[test]
    fn timeline_update_keeps_omitted_fields() {
        let mut state = State::default();
        reduce(
            &mut state,
            Action::AddTimelineEvent {
                title: "Moved".into(),
                description: Some("to the new place".into()),
                date: "2023-09-01".into(),
                color: None,
            },
        );
        let id = state.timeline_events[0].id.clone();
        reduce(
            &mut state,
            Action::UpdateTimelineEvent {
                event_id: id,
                title: None,
                description: None,
                date: Some("2023-09-02".into()),
                color: Some("#22c55e".into()),
            },
        );
        let event = &state.timeline_events[0];
        assert_eq!(event.title, "Moved");
        assert_eq!(event.description.as_deref(), Some("to the new place"));
        assert_eq!(event.date, "2023-09-02");
    }

    #[test]
    fn scalar_prefs_touch_their_own_keys() {
        let mut state = State::default();
        assert_eq!(
            reduce(&mut state, Action::SetTheme { theme: "light".into() }),
            Touched::one(StorageKey::Theme)
        );
        assert_eq!(
            reduce(
                &mut state,
                Action::SetAutoColorChange {
                    enabled: true,
                    interval: 10,
                }
            ),
            Touched::keys([
                StorageKey::IsAutoColorChangeEnabled,
                StorageKey::AutoColorChangeInterval,
            ])
        );
        assert_eq!(state.prefs.theme, "light");
        assert!(state.prefs.is_auto_color_change_enabled);
        assert_eq!(state.prefs.auto_color_change_interval, 10);
    }
}
