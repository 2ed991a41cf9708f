use crate::io::StorageKey;
use crate::model::{
    Attachment, Board, Card, Checklist, ChecklistItem, Comment, Label, List, Notification,
    NotificationKind, State, TrashedCard,
};
use crate::util::{new_id, now_ts};

use super::Touched;

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

pub(super) fn add_board(state: &mut State, title: String) -> Touched {
    let board = Board::new(title);
    state.active_board_id = Some(board.id.clone());
    state.boards.insert(board.id.clone(), board);
    Touched::keys([StorageKey::Boards, StorageKey::ActiveBoardId])
}

pub(super) fn rename_board(state: &mut State, board_id: &str, title: String) -> Touched {
    match state.boards.get_mut(board_id) {
        Some(board) => {
            board.title = title;
            Touched::one(StorageKey::Boards)
        }
        None => Touched::none(),
    }
}

pub(super) fn delete_board(state: &mut State, board_id: &str) -> Touched {
    if state.boards.shift_remove(board_id).is_none() {
        return Touched::none();
    }
    if state.active_board_id.as_deref() == Some(board_id) {
        state.active_board_id = state.boards.keys().next().cloned();
        return Touched::keys([StorageKey::Boards, StorageKey::ActiveBoardId]);
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn set_active_board(state: &mut State, board_id: &str) -> Touched {
    if !state.boards.contains_key(board_id) {
        return Touched::none();
    }
    state.active_board_id = Some(board_id.to_string());
    Touched::one(StorageKey::ActiveBoardId)
}

/// The board all board-scoped actions implicitly target.
fn active_board_mut<'a>(state: &'a mut State) -> Option<&'a mut Board> {
    let id = state.active_board_id.clone()?;
    state.boards.get_mut(&id)
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

pub(super) fn add_list(state: &mut State, title: String) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let list = List::new(title);
    board.list_order.push(list.id.clone());
    board.lists.insert(list.id.clone(), list);
    Touched::one(StorageKey::Boards)
}

pub(super) fn rename_list(state: &mut State, list_id: &str, title: String) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    match board.lists.get_mut(list_id) {
        Some(list) => {
            list.title = title;
            Touched::one(StorageKey::Boards)
        }
        None => Touched::none(),
    }
}

/// Deleting a list deletes the cards it holds outright (they never were
/// in any other list).
pub(super) fn delete_list(state: &mut State, list_id: &str) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let Some(list) = board.lists.shift_remove(list_id) else {
        return Touched::none();
    };
    board.list_order.retain(|id| id != list_id);
    for card_id in &list.card_ids {
        board.cards.remove(card_id);
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn move_list(state: &mut State, list_id: &str, dest_index: usize) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let Some(pos) = board.list_order.iter().position(|id| id == list_id) else {
        return Touched::none();
    };
    let id = board.list_order.remove(pos);
    let idx = dest_index.min(board.list_order.len());
    board.list_order.insert(idx, id);
    Touched::one(StorageKey::Boards)
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

pub(super) fn add_card(state: &mut State, list_id: &str, title: String) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    if !board.lists.contains_key(list_id) {
        return Touched::none();
    }
    let card = Card::new(title);
    if let Some(list) = board.lists.get_mut(list_id) {
        list.card_ids.push(card.id.clone());
    }
    board.cards.insert(card.id.clone(), card);
    Touched::one(StorageKey::Boards)
}

pub(super) fn update_card(
    state: &mut State,
    card_id: &str,
    title: Option<String>,
    description: Option<String>,
) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let Some(card) = board.cards.get_mut(card_id) else {
        return Touched::none();
    };
    if let Some(title) = title {
        card.title = title;
    }
    if let Some(description) = description {
        card.description = Some(description);
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn set_card_due_date(
    state: &mut State,
    card_id: &str,
    due_date: Option<String>,
) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let Some(card) = board.cards.get_mut(card_id) else {
        return Touched::none();
    };
    card.due_date = due_date;
    Touched::one(StorageKey::Boards)
}

pub(super) fn set_card_cover(
    state: &mut State,
    card_id: &str,
    cover_image: Option<String>,
) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let Some(card) = board.cards.get_mut(card_id) else {
        return Touched::none();
    };
    card.cover_image = cover_image;
    Touched::one(StorageKey::Boards)
}

/// Splice the card out of the source list and into the destination.
/// Cross-list moves announce themselves with a board-activity
/// notification; same-list reordering is silent.
pub(super) fn move_card(
    state: &mut State,
    card_id: &str,
    source_list_id: &str,
    dest_list_id: &str,
    dest_index: usize,
) -> Touched {
    let Some(board_id) = state.active_board_id.clone() else {
        return Touched::none();
    };
    let Some(board) = state.boards.get_mut(&board_id) else {
        return Touched::none();
    };
    if !board.cards.contains_key(card_id) || !board.lists.contains_key(dest_list_id) {
        return Touched::none();
    }

    let cross_list = source_list_id != dest_list_id;
    let message = if cross_list {
        let card_title = board.cards.get(card_id).map(|c| c.title.clone());
        let from = board.lists.get(source_list_id).map(|l| l.title.clone());
        let to = board.lists.get(dest_list_id).map(|l| l.title.clone());
        match (card_title, from, to) {
            (Some(card), Some(from), Some(to)) => {
                Some(format!("Card \"{card}\" moved from \"{from}\" to \"{to}\""))
            }
            _ => None,
        }
    } else {
        None
    };

    {
        let Some(source) = board.lists.get_mut(source_list_id) else {
            return Touched::none();
        };
        let Some(pos) = source.card_ids.iter().position(|c| c == card_id) else {
            return Touched::none();
        };
        source.card_ids.remove(pos);
    }
    if let Some(dest) = board.lists.get_mut(dest_list_id) {
        let idx = dest_index.min(dest.card_ids.len());
        dest.card_ids.insert(idx, card_id.to_string());
    }

    match message {
        Some(message) => {
            state
                .notifications
                .push(Notification::new(NotificationKind::BoardActivity, message));
            Touched::keys([StorageKey::Boards, StorageKey::Notifications])
        }
        None => Touched::one(StorageKey::Boards),
    }
}

/// Move the card into the board trash (not a copy: it leaves `cards` and
/// its list in the same transition). Closes the detail modal if it was
/// showing this card.
pub(super) fn delete_card(state: &mut State, card_id: &str) -> Touched {
    let Some(board_id) = state.active_board_id.clone() else {
        return Touched::none();
    };
    let Some(board) = state.boards.get_mut(&board_id) else {
        return Touched::none();
    };
    let Some(card) = board.cards.remove(card_id) else {
        return Touched::none();
    };

    let mut original_list_id = String::new();
    for list in board.lists.values_mut() {
        if let Some(pos) = list.card_ids.iter().position(|c| c == card_id) {
            list.card_ids.remove(pos);
            original_list_id = list.id.clone();
            break;
        }
    }

    board.trashed_cards.insert(
        card_id.to_string(),
        TrashedCard {
            card,
            deleted_at: now_ts(),
            original_list_id,
        },
    );

    if state.active_card_id.as_deref() == Some(card_id) {
        state.active_card_id = None;
    }
    Touched::one(StorageKey::Boards)
}

/// Pull a card back out of the trash. When the original list has been
/// deleted since, fall back to the board's first list and say so.
pub(super) fn restore_card(state: &mut State, card_id: &str) -> Touched {
    let Some(board_id) = state.active_board_id.clone() else {
        return Touched::none();
    };
    let Some(board) = state.boards.get_mut(&board_id) else {
        return Touched::none();
    };
    let Some(trashed) = board.trashed_cards.remove(card_id) else {
        return Touched::none();
    };

    let (target, fell_back) = if board.lists.contains_key(&trashed.original_list_id) {
        (trashed.original_list_id.clone(), false)
    } else if let Some(first) = board.first_list_id().cloned() {
        (first, true)
    } else {
        // Nowhere to restore into; leave the card in the trash.
        board.trashed_cards.insert(card_id.to_string(), trashed);
        return Touched::none();
    };

    let card_title = trashed.card.title.clone();
    let target_title = board
        .lists
        .get(&target)
        .map(|l| l.title.clone())
        .unwrap_or_default();
    board.cards.insert(trashed.card.id.clone(), trashed.card);
    if let Some(list) = board.lists.get_mut(&target) {
        list.card_ids.push(card_id.to_string());
    }

    if fell_back {
        state.notifications.push(Notification::new(
            NotificationKind::BoardActivity,
            format!(
                "Card \"{card_title}\" restored to \"{target_title}\" because its original list was deleted"
            ),
        ));
        return Touched::keys([StorageKey::Boards, StorageKey::Notifications]);
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn permanently_delete_card(state: &mut State, card_id: &str) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    match board.trashed_cards.remove(card_id) {
        Some(_) => Touched::one(StorageKey::Boards),
        None => Touched::none(),
    }
}

/// Global: active board's card trash, the note trash and the archived
/// habits all go at once.
pub(super) fn empty_trash(state: &mut State) -> Touched {
    let mut keys = Vec::new();
    if let Some(board) = active_board_mut(state) {
        board.trashed_cards.clear();
        keys.push(StorageKey::Boards);
    }
    state.trashed_notes.clear();
    keys.push(StorageKey::TrashedNotes);
    state.archived_habits.clear();
    keys.push(StorageKey::ArchivedHabits);
    Touched::Keys(keys)
}

/// Open (or close, with `None`) the card detail modal. In-memory only.
pub(super) fn set_active_card(state: &mut State, card_id: Option<String>) -> Touched {
    state.active_card_id = card_id;
    Touched::Keys(Vec::new())
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub(super) fn add_label(state: &mut State, name: String, color: String) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let label = Label {
        id: new_id(),
        name,
        color,
    };
    board.labels.insert(label.id.clone(), label);
    Touched::one(StorageKey::Boards)
}

pub(super) fn update_label(
    state: &mut State,
    label_id: &str,
    name: String,
    color: String,
) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    let Some(label) = board.labels.get_mut(label_id) else {
        return Touched::none();
    };
    label.name = name;
    label.color = color;
    Touched::one(StorageKey::Boards)
}

/// Cascades: the label disappears from every card on the board.
pub(super) fn delete_label(state: &mut State, label_id: &str) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    if board.labels.shift_remove(label_id).is_none() {
        return Touched::none();
    }
    for card in board.cards.values_mut() {
        card.label_ids.retain(|id| id != label_id);
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn toggle_card_label(state: &mut State, card_id: &str, label_id: &str) -> Touched {
    let Some(board) = active_board_mut(state) else {
        return Touched::none();
    };
    if !board.labels.contains_key(label_id) {
        return Touched::none();
    }
    let Some(card) = board.cards.get_mut(card_id) else {
        return Touched::none();
    };
    if let Some(pos) = card.label_ids.iter().position(|id| id == label_id) {
        card.label_ids.remove(pos);
    } else {
        card.label_ids.push(label_id.to_string());
    }
    Touched::one(StorageKey::Boards)
}

// ---------------------------------------------------------------------------
// Checklists, comments, attachments
// ---------------------------------------------------------------------------

fn card_mut<'a>(state: &'a mut State, card_id: &str) -> Option<&'a mut Card> {
    active_board_mut(state)?.cards.get_mut(card_id)
}

pub(super) fn add_checklist(state: &mut State, card_id: &str, title: String) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    card.checklists.push(Checklist {
        id: new_id(),
        title,
        items: Vec::new(),
    });
    Touched::one(StorageKey::Boards)
}

pub(super) fn rename_checklist(
    state: &mut State,
    card_id: &str,
    checklist_id: &str,
    title: String,
) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let Some(checklist) = card.checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Touched::none();
    };
    checklist.title = title;
    Touched::one(StorageKey::Boards)
}

pub(super) fn delete_checklist(state: &mut State, card_id: &str, checklist_id: &str) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let before = card.checklists.len();
    card.checklists.retain(|c| c.id != checklist_id);
    if card.checklists.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn add_checklist_item(
    state: &mut State,
    card_id: &str,
    checklist_id: &str,
    text: String,
) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let Some(checklist) = card.checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Touched::none();
    };
    checklist.items.push(ChecklistItem {
        id: new_id(),
        text,
        is_completed: false,
    });
    Touched::one(StorageKey::Boards)
}

pub(super) fn toggle_checklist_item(
    state: &mut State,
    card_id: &str,
    checklist_id: &str,
    item_id: &str,
) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let Some(checklist) = card.checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Touched::none();
    };
    let Some(item) = checklist.items.iter_mut().find(|i| i.id == item_id) else {
        return Touched::none();
    };
    item.is_completed = !item.is_completed;
    Touched::one(StorageKey::Boards)
}

pub(super) fn delete_checklist_item(
    state: &mut State,
    card_id: &str,
    checklist_id: &str,
    item_id: &str,
) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let Some(checklist) = card.checklists.iter_mut().find(|c| c.id == checklist_id) else {
        return Touched::none();
    };
    let before = checklist.items.len();
    checklist.items.retain(|i| i.id != item_id);
    if checklist.items.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn add_comment(state: &mut State, card_id: &str, text: String) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    card.comments.push(Comment {
        id: new_id(),
        text,
        created_at: now_ts(),
    });
    Touched::one(StorageKey::Boards)
}

pub(super) fn delete_comment(state: &mut State, card_id: &str, comment_id: &str) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let before = card.comments.len();
    card.comments.retain(|c| c.id != comment_id);
    if card.comments.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Boards)
}

pub(super) fn add_attachment(
    state: &mut State,
    card_id: &str,
    name: String,
    url: String,
) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    card.attachments.push(Attachment {
        id: new_id(),
        name,
        url,
    });
    Touched::one(StorageKey::Boards)
}

pub(super) fn delete_attachment(state: &mut State, card_id: &str, attachment_id: &str) -> Touched {
    let Some(card) = card_mut(state, card_id) else {
        return Touched::none();
    };
    let before = card.attachments.len();
    card.attachments.retain(|a| a.id != attachment_id);
    if card.attachments.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Boards)
}

#[cfg(test)]
mod tests {
    use super::super::{reduce, Action, Touched};
    use super::*;
    use pretty_assertions::assert_eq;

    /// State with one active board and a card in the first list.
    fn board_with_card() -> (State, String, String, String) {
        let mut state = State::default();
        reduce(
            &mut state,
            Action::AddBoard {
                title: "Work".into(),
            },
        );
        let board = state.active_board().unwrap();
        let todo_list = board.list_order[0].clone();
        let done_list = board.list_order[2].clone();
        reduce(
            &mut state,
            Action::AddCard {
                list_id: todo_list.clone(),
                title: "Card X".into(),
            },
        );
        let card_id = state
            .active_board()
            .unwrap()
            .cards
            .keys()
            .next()
            .unwrap()
            .clone();
        (state, todo_list, done_list, card_id)
    }

    fn live_card_count(state: &State) -> usize {
        state.active_board().unwrap().cards.len()
    }

    fn list_card_total(state: &State) -> usize {
        state
            .active_board()
            .unwrap()
            .lists
            .values()
            .map(|l| l.card_ids.len())
            .sum()
    }

    #[test]
    fn add_board_becomes_active() {
        let mut state = State::default();
        let touched = reduce(
            &mut state,
            Action::AddBoard {
                title: "Home".into(),
            },
        );
        assert_eq!(
            touched,
            Touched::keys([StorageKey::Boards, StorageKey::ActiveBoardId])
        );
        assert_eq!(state.active_board().unwrap().title, "Home");
    }

    #[test]
    fn board_scoped_actions_are_noops_without_active_board() {
        let mut state = State::default();
        let touched = reduce(
            &mut state,
            Action::AddList {
                title: "orphan".into(),
            },
        );
        assert!(touched.is_none());
    }

    #[test]
    fn delete_active_board_falls_back_to_first_remaining() {
        let mut state = State::default();
        reduce(&mut state, Action::AddBoard { title: "A".into() });
        let first = state.active_board_id.clone().unwrap();
        reduce(&mut state, Action::AddBoard { title: "B".into() });
        let second = state.active_board_id.clone().unwrap();
        reduce(&mut state, Action::DeleteBoard { board_id: second });
        assert_eq!(state.active_board_id, Some(first));
    }

    #[test]
    fn move_card_cross_list_emits_notification() {
        let (mut state, todo_list, done_list, card_id) = board_with_card();
        let touched = reduce(
            &mut state,
            Action::MoveCard {
                card_id: card_id.clone(),
                source_list_id: todo_list.clone(),
                dest_list_id: done_list.clone(),
                dest_index: 0,
            },
        );
        assert_eq!(
            touched,
            Touched::keys([StorageKey::Boards, StorageKey::Notifications])
        );
        let board = state.active_board().unwrap();
        assert!(board.lists[&todo_list].card_ids.is_empty());
        assert_eq!(board.lists[&done_list].card_ids, vec![card_id]);
        assert_eq!(state.notifications.len(), 1);
        let n = &state.notifications[0];
        assert_eq!(n.kind, NotificationKind::BoardActivity);
        assert!(n.message.contains("Card X"));
    }

    #[test]
    fn move_card_same_list_is_silent() {
        let (mut state, todo_list, _, card_a) = board_with_card();
        reduce(
            &mut state,
            Action::AddCard {
                list_id: todo_list.clone(),
                title: "Card Y".into(),
            },
        );
        let touched = reduce(
            &mut state,
            Action::MoveCard {
                card_id: card_a.clone(),
                source_list_id: todo_list.clone(),
                dest_list_id: todo_list.clone(),
                dest_index: 1,
            },
        );
        assert_eq!(touched, Touched::one(StorageKey::Boards));
        assert!(state.notifications.is_empty());
        let board = state.active_board().unwrap();
        assert_eq!(board.lists[&todo_list].card_ids[1], card_a);
    }

    #[test]
    fn move_card_clamps_out_of_range_index() {
        let (mut state, todo_list, done_list, card_id) = board_with_card();
        reduce(
            &mut state,
            Action::MoveCard {
                card_id: card_id.clone(),
                source_list_id: todo_list,
                dest_list_id: done_list.clone(),
                dest_index: 99,
            },
        );
        let board = state.active_board().unwrap();
        assert_eq!(board.lists[&done_list].card_ids, vec![card_id]);
    }

    #[test]
    fn move_card_to_missing_list_is_noop() {
        let (mut state, todo_list, _, card_id) = board_with_card();
        let touched = reduce(
            &mut state,
            Action::MoveCard {
                card_id,
                source_list_id: todo_list,
                dest_list_id: "gone".into(),
                dest_index: 0,
            },
        );
        assert!(touched.is_none());
    }

    #[test]
    fn delete_card_moves_to_trash_not_copy() {
        let (mut state, _, _, card_id) = board_with_card();
        assert_eq!(live_card_count(&state), 1);
        reduce(
            &mut state,
            Action::DeleteCard {
                card_id: card_id.clone(),
            },
        );
        let board = state.active_board().unwrap();
        assert_eq!(board.cards.len(), 0);
        assert_eq!(list_card_total(&state), 0);
        let trashed = &state.active_board().unwrap().trashed_cards[&card_id];
        assert_eq!(trashed.card.title, "Card X");
        assert!(!trashed.original_list_id.is_empty());
    }

    #[test]
    fn delete_card_closes_open_modal() {
        let (mut state, _, _, card_id) = board_with_card();
        state.active_card_id = Some(card_id.clone());
        reduce(&mut state, Action::DeleteCard { card_id });
        assert!(state.active_card_id.is_none());
    }

    #[test]
    fn delete_other_card_keeps_modal_open() {
        let (mut state, todo_list, _, card_a) = board_with_card();
        reduce(
            &mut state,
            Action::AddCard {
                list_id: todo_list,
                title: "Other".into(),
            },
        );
        let card_b = state
            .active_board()
            .unwrap()
            .cards
            .keys()
            .find(|id| **id != card_a)
            .unwrap()
            .clone();
        state.active_card_id = Some(card_a.clone());
        reduce(&mut state, Action::DeleteCard { card_id: card_b });
        assert_eq!(state.active_card_id, Some(card_a));
    }

    #[test]
    fn delete_then_restore_round_trips_card_fields() {
        let (mut state, todo_list, _, card_id) = board_with_card();
        reduce(
            &mut state,
            Action::UpdateCard {
                card_id: card_id.clone(),
                title: None,
                description: Some("details".into()),
            },
        );
        let before = state.active_board().unwrap().cards[&card_id].clone();

        reduce(
            &mut state,
            Action::DeleteCard {
                card_id: card_id.clone(),
            },
        );
        reduce(
            &mut state,
            Action::RestoreCard {
                card_id: card_id.clone(),
            },
        );

        let board = state.active_board().unwrap();
        assert_eq!(board.cards[&card_id], before);
        assert!(board.trashed_cards.is_empty());
        assert_eq!(board.lists[&todo_list].card_ids, vec![card_id]);
    }

    #[test]
    fn restore_falls_back_to_first_list_with_notification() {
        let (mut state, todo_list, _, card_id) = board_with_card();
        reduce(
            &mut state,
            Action::DeleteCard {
                card_id: card_id.clone(),
            },
        );
        reduce(
            &mut state,
            Action::DeleteList {
                list_id: todo_list.clone(),
            },
        );
        let touched = reduce(
            &mut state,
            Action::RestoreCard {
                card_id: card_id.clone(),
            },
        );
        assert_eq!(
            touched,
            Touched::keys([StorageKey::Boards, StorageKey::Notifications])
        );
        let board = state.active_board().unwrap();
        let first = board.first_list_id().unwrap().clone();
        assert_ne!(first, todo_list);
        assert_eq!(board.lists[&first].card_ids, vec![card_id]);
        assert_eq!(state.notifications.len(), 1);
        assert!(state.notifications[0].message.contains("original list"));
    }

    #[test]
    fn card_count_is_conserved_across_add_move_delete() {
        let (mut state, todo_list, done_list, card_id) = board_with_card();
        reduce(
            &mut state,
            Action::AddCard {
                list_id: done_list.clone(),
                title: "Second".into(),
            },
        );
        assert_eq!(live_card_count(&state), list_card_total(&state));
        reduce(
            &mut state,
            Action::MoveCard {
                card_id: card_id.clone(),
                source_list_id: todo_list,
                dest_list_id: done_list,
                dest_index: 1,
            },
        );
        assert_eq!(live_card_count(&state), list_card_total(&state));
        reduce(&mut state, Action::DeleteCard { card_id });
        assert_eq!(live_card_count(&state), list_card_total(&state));
    }

    #[test]
    fn empty_trash_clears_cards_notes_and_archived_habits() {
        let (mut state, _, _, card_id) = board_with_card();
        reduce(&mut state, Action::DeleteCard { card_id });
        state.trashed_notes.push(crate::model::TrashedNote {
            note: crate::model::Note::new("nb".into(), "n".into(), String::new()),
            deleted_at: now_ts(),
        });
        state.archived_habits.push(crate::model::Habit::new(
            "old".into(),
            String::new(),
            String::new(),
            1,
            "times".into(),
        ));
        let touched = reduce(&mut state, Action::EmptyTrash);
        assert_eq!(
            touched,
            Touched::keys([
                StorageKey::Boards,
                StorageKey::TrashedNotes,
                StorageKey::ArchivedHabits,
            ])
        );
        assert!(state.active_board().unwrap().trashed_cards.is_empty());
        assert!(state.trashed_notes.is_empty());
        assert!(state.archived_habits.is_empty());
    }

    #[test]
    fn delete_label_strips_it_from_every_card() {
        let (mut state, _, _, card_id) = board_with_card();
        reduce(
            &mut state,
            Action::AddLabel {
                name: "urgent".into(),
                color: "#f00".into(),
            },
        );
        let label_id = state
            .active_board()
            .unwrap()
            .labels
            .keys()
            .next()
            .unwrap()
            .clone();
        reduce(
            &mut state,
            Action::ToggleCardLabel {
                card_id: card_id.clone(),
                label_id: label_id.clone(),
            },
        );
        assert_eq!(
            state.active_board().unwrap().cards[&card_id].label_ids,
            vec![label_id.clone()]
        );
        reduce(&mut state, Action::DeleteLabel { label_id });
        let board = state.active_board().unwrap();
        assert!(board.labels.is_empty());
        assert!(board.cards[&card_id].label_ids.is_empty());
    }

    #[test]
    fn checklist_item_lifecycle() {
        let (mut state, _, _, card_id) = board_with_card();
        reduce(
            &mut state,
            Action::AddChecklist {
                card_id: card_id.clone(),
                title: "Steps".into(),
            },
        );
        let checklist_id = state.active_board().unwrap().cards[&card_id].checklists[0]
            .id
            .clone();
        reduce(
            &mut state,
            Action::AddChecklistItem {
                card_id: card_id.clone(),
                checklist_id: checklist_id.clone(),
                text: "step 1".into(),
            },
        );
        let item_id = state.active_board().unwrap().cards[&card_id].checklists[0].items[0]
            .id
            .clone();
        reduce(
            &mut state,
            Action::ToggleChecklistItem {
                card_id: card_id.clone(),
                checklist_id: checklist_id.clone(),
                item_id: item_id.clone(),
            },
        );
        assert!(
            state.active_board().unwrap().cards[&card_id].checklists[0].items[0].is_completed
        );
        reduce(
            &mut state,
            Action::DeleteChecklistItem {
                card_id: card_id.clone(),
                checklist_id,
                item_id,
            },
        );
        assert!(state.active_board().unwrap().cards[&card_id].checklists[0]
            .items
            .is_empty());
    }

    #[test]
    fn update_missing_card_is_noop() {
        let (mut state, _, _, _) = board_with_card();
        let snapshot = state.clone();
        let touched = reduce(
            &mut state,
            Action::UpdateCard {
                card_id: "missing".into(),
                title: Some("x".into()),
                description: None,
            },
        );
        assert!(touched.is_none());
        assert_eq!(state, snapshot);
    }
}
