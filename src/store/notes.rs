use crate::io::StorageKey;
use crate::model::{Note, Notebook, State, Tag, TrashedNote, TAG_PALETTE};
use crate::util::now_ts;

use super::Touched;

// ---------------------------------------------------------------------------
// Notebooks
// ---------------------------------------------------------------------------

pub(super) fn add_notebook(state: &mut State, name: String) -> Touched {
    let notebook = Notebook::new(name);
    state.notebook_order.push(notebook.id.clone());
    state.notebooks.push(notebook);
    Touched::keys([StorageKey::Notebooks, StorageKey::NotebookOrder])
}

pub(super) fn rename_notebook(state: &mut State, notebook_id: &str, name: String) -> Touched {
    let Some(notebook) = state.notebooks.iter_mut().find(|n| n.id == notebook_id) else {
        return Touched::none();
    };
    notebook.name = name;
    Touched::one(StorageKey::Notebooks)
}

/// Cascades: every note in the notebook moves to the note trash, all
/// stamped with the same `deleted_at`.
pub(super) fn delete_notebook(state: &mut State, notebook_id: &str) -> Touched {
    let before = state.notebooks.len();
    state.notebooks.retain(|n| n.id != notebook_id);
    if state.notebooks.len() == before {
        return Touched::none();
    }
    state.notebook_order.retain(|id| id != notebook_id);

    let deleted_at = now_ts();
    let mut remaining = Vec::with_capacity(state.notes.len());
    for note in state.notes.drain(..) {
        if note.notebook_id == notebook_id {
            state.trashed_notes.push(TrashedNote {
                note,
                deleted_at: deleted_at.clone(),
            });
        } else {
            remaining.push(note);
        }
    }
    state.notes = remaining;

    Touched::keys([
        StorageKey::Notebooks,
        StorageKey::NotebookOrder,
        StorageKey::Notes,
        StorageKey::TrashedNotes,
    ])
}

pub(super) fn move_notebook(state: &mut State, notebook_id: &str, dest_index: usize) -> Touched {
    let Some(pos) = state.notebook_order.iter().position(|id| id == notebook_id) else {
        return Touched::none();
    };
    let id = state.notebook_order.remove(pos);
    let idx = dest_index.min(state.notebook_order.len());
    state.notebook_order.insert(idx, id);
    Touched::one(StorageKey::NotebookOrder)
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

pub(super) fn add_note(
    state: &mut State,
    notebook_id: &str,
    title: String,
    content: String,
) -> Touched {
    if !state.notebooks.iter().any(|n| n.id == notebook_id) {
        return Touched::none();
    }
    state
        .notes
        .push(Note::new(notebook_id.to_string(), title, content));
    Touched::one(StorageKey::Notes)
}

pub(super) fn update_note(
    state: &mut State,
    note_id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Touched {
    let Some(note) = state.notes.iter_mut().find(|n| n.id == note_id) else {
        return Touched::none();
    };
    if let Some(title) = title {
        note.title = title;
    }
    if let Some(content) = content {
        note.content = content;
    }
    note.updated_at = now_ts();
    Touched::one(StorageKey::Notes)
}

pub(super) fn move_note_to_notebook(
    state: &mut State,
    note_id: &str,
    notebook_id: &str,
) -> Touched {
    if !state.notebooks.iter().any(|n| n.id == notebook_id) {
        return Touched::none();
    }
    let Some(note) = state.notes.iter_mut().find(|n| n.id == note_id) else {
        return Touched::none();
    };
    note.notebook_id = notebook_id.to_string();
    note.updated_at = now_ts();
    Touched::one(StorageKey::Notes)
}

pub(super) fn delete_note(state: &mut State, note_id: &str) -> Touched {
    let Some(pos) = state.notes.iter().position(|n| n.id == note_id) else {
        return Touched::none();
    };
    let note = state.notes.remove(pos);
    state.trashed_notes.push(TrashedNote {
        note,
        deleted_at: now_ts(),
    });
    Touched::keys([StorageKey::Notes, StorageKey::TrashedNotes])
}

/// A restored note whose notebook has since been deleted lands in the
/// first remaining notebook; with no notebooks at all it stays trashed.
pub(super) fn restore_note(state: &mut State, note_id: &str) -> Touched {
    let Some(pos) = state.trashed_notes.iter().position(|t| t.note.id == note_id) else {
        return Touched::none();
    };
    let trashed = state.trashed_notes.remove(pos);
    let mut note = trashed.note;
    if !state.notebooks.iter().any(|n| n.id == note.notebook_id) {
        match state.notebooks.first() {
            Some(first) => note.notebook_id = first.id.clone(),
            None => {
                state.trashed_notes.insert(
                    pos,
                    TrashedNote {
                        note,
                        deleted_at: trashed.deleted_at,
                    },
                );
                return Touched::none();
            }
        }
    }
    state.notes.push(note);
    Touched::keys([StorageKey::Notes, StorageKey::TrashedNotes])
}

pub(super) fn permanently_delete_note(state: &mut State, note_id: &str) -> Touched {
    let before = state.trashed_notes.len();
    state.trashed_notes.retain(|t| t.note.id != note_id);
    if state.trashed_notes.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::TrashedNotes)
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

pub(super) fn add_tag(state: &mut State, name: String, color: String) -> Touched {
    state.tags.push(Tag::new(name, color));
    Touched::one(StorageKey::Tags)
}

pub(super) fn rename_tag(state: &mut State, tag_id: &str, name: String) -> Touched {
    let Some(tag) = state.tags.iter_mut().find(|t| t.id == tag_id) else {
        return Touched::none();
    };
    tag.name = name;
    Touched::one(StorageKey::Tags)
}

/// Strips the tag from every note rather than cascading deletion.
pub(super) fn delete_tag(state: &mut State, tag_id: &str) -> Touched {
    let before = state.tags.len();
    state.tags.retain(|t| t.id != tag_id);
    if state.tags.len() == before {
        return Touched::none();
    }
    for note in &mut state.notes {
        note.tag_ids.retain(|id| id != tag_id);
    }
    Touched::keys([StorageKey::Tags, StorageKey::Notes])
}

pub(super) fn toggle_note_tag(state: &mut State, note_id: &str, tag_id: &str) -> Touched {
    if !state.tags.iter().any(|t| t.id == tag_id) {
        return Touched::none();
    }
    let Some(note) = state.notes.iter_mut().find(|n| n.id == note_id) else {
        return Touched::none();
    };
    if let Some(pos) = note.tag_ids.iter().position(|id| id == tag_id) {
        note.tag_ids.remove(pos);
    } else {
        note.tag_ids.push(tag_id.to_string());
    }
    Touched::one(StorageKey::Notes)
}

/// Attach AI-suggested tag names to a note. Names are matched against
/// existing tags case-insensitively; misses synthesize a new tag with a
/// palette color indexed by the tag count at creation time.
pub(super) fn add_ai_tags_to_note(
    state: &mut State,
    note_id: &str,
    tag_names: Vec<String>,
) -> Touched {
    if !state.notes.iter().any(|n| n.id == note_id) {
        return Touched::none();
    }

    let mut created_any = false;
    let mut attach = Vec::new();
    for name in tag_names {
        let existing = state
            .tags
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(&name));
        let id = match existing {
            Some(tag) => tag.id.clone(),
            None => {
                let color = TAG_PALETTE[state.tags.len() % TAG_PALETTE.len()];
                let tag = Tag::new(name, color.to_string());
                let id = tag.id.clone();
                state.tags.push(tag);
                created_any = true;
                id
            }
        };
        attach.push(id);
    }

    let Some(note) = state.notes.iter_mut().find(|n| n.id == note_id) else {
        return Touched::none();
    };
    for id in attach {
        if !note.tag_ids.contains(&id) {
            note.tag_ids.push(id);
        }
    }

    if created_any {
        Touched::keys([StorageKey::Notes, StorageKey::Tags])
    } else {
        Touched::one(StorageKey::Notes)
    }
}
