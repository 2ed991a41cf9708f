//! End-to-end scenarios through `Session` backed by a real on-disk
//! `DirStore`: each test opens a store in a temp directory, dispatches a
//! workflow, and checks both the in-memory state and what survives a
//! reopen.

use lifeboard::derive;
use lifeboard::io::{DirStore, Session, StorageKey};
use lifeboard::model::{LoanKind, State, TransactionKind};
use lifeboard::store::Action;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Session<DirStore> {
    Session::open(DirStore::open(dir.path()).unwrap())
}

fn dispatch(session: &mut Session<DirStore>, action: Action) {
    session.dispatch(action).unwrap();
}

fn card_conservation_holds(state: &State) -> bool {
    state.boards.values().all(|board| {
        let in_lists: usize = board.lists.values().map(|l| l.card_ids.len()).sum();
        board.cards.len() == in_lists
    })
}

#[test]
fn board_workflow_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);

    dispatch(&mut session, Action::AddBoard { title: "Work".into() });
    let board = session.state().active_board().unwrap();
    let todo_list = board.list_order[0].clone();
    let done_list = board.list_order[2].clone();

    dispatch(
        &mut session,
        Action::AddCard {
            list_id: todo_list.clone(),
            title: "Ship release".into(),
        },
    );
    let card_id = session
        .state()
        .active_board()
        .unwrap()
        .cards
        .keys()
        .next()
        .unwrap()
        .clone();
    dispatch(
        &mut session,
        Action::MoveCard {
            card_id: card_id.clone(),
            source_list_id: todo_list,
            dest_list_id: done_list.clone(),
            dest_index: 0,
        },
    );
    assert!(card_conservation_holds(session.state()));
    assert_eq!(session.state().notifications.len(), 1);

    let expected = session.state().clone();
    let reopened = open(&dir);
    assert_eq!(*reopened.state(), expected);
    assert_eq!(
        reopened.state().active_board().unwrap().lists[&done_list].card_ids,
        vec![card_id]
    );
}

#[test]
fn delete_restore_is_identity_and_conserves_cards() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);

    dispatch(&mut session, Action::AddBoard { title: "Home".into() });
    let list_id = session.state().active_board().unwrap().list_order[0].clone();
    for title in ["a", "b", "c"] {
        dispatch(
            &mut session,
            Action::AddCard {
                list_id: list_id.clone(),
                title: title.into(),
            },
        );
    }
    let before = session.state().clone();
    let card_id = before
        .active_board()
        .unwrap()
        .cards
        .keys()
        .nth(1)
        .unwrap()
        .clone();

    dispatch(&mut session, Action::DeleteCard { card_id: card_id.clone() });
    assert!(card_conservation_holds(session.state()));
    assert_eq!(session.state().active_board().unwrap().cards.len(), 2);

    dispatch(&mut session, Action::RestoreCard { card_id });
    assert!(card_conservation_holds(session.state()));
    let board = session.state().active_board().unwrap();
    let original = before.active_board().unwrap();
    assert_eq!(board.cards, original.cards);
    assert!(board.trashed_cards.is_empty());
    // Restore appends to the list, so compare membership, not order.
    let mut restored: Vec<_> = board.lists[&list_id].card_ids.clone();
    let mut expected: Vec<_> = original.lists[&list_id].card_ids.clone();
    restored.sort();
    expected.sort();
    assert_eq!(restored, expected);
}

#[test]
fn balance_invariant_holds_through_a_finance_session() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);

    dispatch(
        &mut session,
        Action::AddAccount {
            name: "Checking".into(),
            initial_balance: 1000.0,
        },
    );
    let account_id = session.state().accounts[0].id.clone();

    let check = |state: &State| {
        let account = &state.accounts[0];
        assert_eq!(
            derive::finance::computed_balance(state, &account.id),
            Some(account.current_balance)
        );
    };

    dispatch(
        &mut session,
        Action::AddTransaction {
            account_id: account_id.clone(),
            kind: TransactionKind::Expense,
            amount: 120.0,
            category: "Groceries".into(),
            description: String::new(),
            date: "2024-03-01".into(),
        },
    );
    check(session.state());

    dispatch(
        &mut session,
        Action::AddLoan {
            counterparty: "Sam".into(),
            kind: LoanKind::Lent,
            initial_amount: 300.0,
        },
    );
    let loan_id = session.state().loans[0].id.clone();
    dispatch(
        &mut session,
        Action::RecordLoanPayment {
            loan_id: loan_id.clone(),
            account_id: account_id.clone(),
            amount: 100.0,
            date: "2024-03-02".into(),
        },
    );
    check(session.state());
    assert_eq!(
        derive::finance::loan_outstanding(&session.state().loans[0]),
        200.0
    );

    dispatch(
        &mut session,
        Action::AddInvestment {
            name: "Fund".into(),
            invested_amount: 500.0,
        },
    );
    let inv_id = session.state().investments[0].id.clone();
    dispatch(
        &mut session,
        Action::RecordProfit {
            investment_id: inv_id,
            account_id: account_id.clone(),
            amount: 40.0,
            date: "2024-03-03".into(),
        },
    );
    check(session.state());

    let tx_id = session.state().transactions[0].id.clone();
    dispatch(&mut session, Action::DeleteTransaction { transaction_id: tx_id });
    check(session.state());
    assert_eq!(session.state().accounts[0].current_balance, 1140.0);

    // The whole ledger survives on disk.
    let reopened = open(&dir);
    check(reopened.state());
    assert_eq!(reopened.state().transactions.len(), 2);
}

#[test]
fn pomodoro_cycle_reaches_long_break_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);

    // Three full work+break cycles, then a fourth work phase.
    for _ in 0..3 {
        dispatch(&mut session, Action::SetNextPomodoroMode);
        dispatch(&mut session, Action::SetNextPomodoroMode);
    }
    dispatch(&mut session, Action::SetNextPomodoroMode);

    let state = session.state();
    assert_eq!(state.pomodoro.pomodoros_completed, 4);
    assert_eq!(state.pomodoro.time_remaining, 15 * 60);
    // One notification per completed pomodoro.
    assert_eq!(state.notifications.len(), 4);

    let reopened = open(&dir);
    assert_eq!(reopened.state().pomodoro, session.state().pomodoro);
}

#[test]
fn recurring_toggle_round_trips_through_storage() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    dispatch(
        &mut session,
        Action::AddTodo {
            text: "review inbox".into(),
            date: "2024-03-01".into(),
            start_time: None,
            end_time: None,
            is_recurring: true,
            salat_prayer: None,
        },
    );
    let todo_id = session.state().daily_todos[0].id.clone();
    dispatch(
        &mut session,
        Action::ToggleTodo {
            todo_id: todo_id.clone(),
            date: "2024-03-05".into(),
        },
    );

    let reopened = open(&dir);
    assert!(reopened.state().daily_todos[0].is_done_on("2024-03-05"));
    assert!(!reopened.state().daily_todos[0].is_done_on("2024-03-06"));

    let mut session = reopened;
    dispatch(
        &mut session,
        Action::ToggleTodo {
            todo_id,
            date: "2024-03-05".into(),
        },
    );
    assert!(!session.state().daily_todos[0].is_done_on("2024-03-05"));
}

#[test]
fn mind_map_history_laws_hold_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    dispatch(&mut session, Action::AddMindMap { name: "plan".into() });
    let id = session.state().mind_maps[0].id.clone();

    let n = 5;
    for i in 0..n {
        let label = format!("node{i}");
        dispatch(
            &mut session,
            Action::UpdateMindMap {
                mindmap_id: id.clone(),
                items: Some(
                    [(label.clone(), serde_json::json!({ "text": label }))]
                        .into_iter()
                        .collect(),
                ),
                display_order: Some(vec![label]),
            },
        );
    }
    let data = &session.state().mind_maps[0].data;
    assert_eq!(data.history.len(), n + 1);
    assert_eq!(data.history_index, n);

    let final_data = data.clone();
    for _ in 0..n {
        dispatch(&mut session, Action::UndoMindMap { mindmap_id: id.clone() });
    }
    assert!(session.state().mind_maps[0].data.items.is_empty());
    for _ in 0..n {
        dispatch(&mut session, Action::RedoMindMap { mindmap_id: id.clone() });
    }
    assert_eq!(session.state().mind_maps[0].data, final_data);

    let reopened = open(&dir);
    assert_eq!(reopened.state().mind_maps[0].data, final_data);
}

#[test]
fn reset_wipes_the_data_directory() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    dispatch(&mut session, Action::AddBoard { title: "Gone".into() });
    dispatch(
        &mut session,
        Action::AddNotebook {
            name: "Also gone".into(),
        },
    );
    assert!(dir.path().join("boards.json").exists());

    dispatch(&mut session, Action::ResetSettings);
    assert_eq!(*session.state(), State::default());
    assert!(!dir.path().join("boards.json").exists());

    let reopened = open(&dir);
    assert_eq!(*reopened.state(), State::default());
}

#[test]
fn scalar_prefs_persist_under_their_own_files() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    dispatch(&mut session, Action::SetTheme { theme: "light".into() });
    dispatch(
        &mut session,
        Action::SetAppPassword {
            password: Some("1234".into()),
        },
    );
    assert!(dir.path().join("theme.json").exists());
    assert!(dir.path().join("appPassword.json").exists());
    assert!(!dir.path().join("primaryColor.json").exists());

    let reopened = open(&dir);
    assert_eq!(reopened.state().prefs.theme, "light");
    assert!(reopened.state().prefs.password_matches("1234"));
    assert!(!reopened.state().prefs.password_matches("wrong"));
    // Untouched prefs keep their defaults.
    assert_eq!(reopened.state().prefs.primary_color, "#3b82f6");
}

#[test]
fn habit_streaks_derive_from_persisted_completions() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    dispatch(
        &mut session,
        Action::AddHabit {
            name: "run".into(),
            icon: "🏃".into(),
            color: "#22c55e".into(),
            goal: None,
            goal_unit: "times".into(),
        },
    );
    let habit_id = session.state().habits[0].id.clone();
    for date in ["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-05"] {
        dispatch(
            &mut session,
            Action::ToggleHabitCompletion {
                habit_id: habit_id.clone(),
                date: date.into(),
            },
        );
    }

    let reopened = open(&dir);
    let habit = &reopened.state().habits[0];
    let day = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    assert_eq!(derive::habits::longest_streak(habit), 3);
    assert_eq!(derive::habits::current_streak(habit, day("2024-03-03")), 3);
    assert_eq!(derive::habits::current_streak(habit, day("2024-03-05")), 1);
    assert_eq!(derive::habits::current_streak(habit, day("2024-03-04")), 0);
}

#[test]
fn quran_progress_round_trips_as_json_object() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    dispatch(
        &mut session,
        Action::SetSurahMemorized {
            surah: 112,
            memorized: true,
        },
    );
    dispatch(&mut session, Action::ToggleAyahMemorized { surah: 2, ayah: 255 });

    let reopened = open(&dir);
    let progress = &reopened.state().quran_progress;
    assert!(derive::quran::is_surah_completed(progress, 112));
    assert!(!derive::quran::is_surah_completed(progress, 2));
    assert_eq!(derive::quran::overall_progress(progress), (5, 6236));
}
