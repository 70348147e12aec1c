//! Key-level scenarios and invariants of the edit dispatcher.

use core_actions::{Action, EditKind, MotionKind, Outcome, dispatch, translate_key};
use core_config::ReadOptions;
use core_events::{KeyCode, KeyEvent};
use core_state::{EditSession, HistoryStore};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run_keys(session: &mut EditSession, opts: &ReadOptions, history: &mut HistoryStore, keys: &[KeyEvent]) {
    for k in keys {
        if let Some(action) = translate_key(k) {
            dispatch(action, session, opts, history);
        }
    }
}

fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|c| KeyEvent::plain(KeyCode::Char(c))).collect()
}

#[test]
fn word_left_then_delete_word_scenario() {
    let opts = ReadOptions::default();
    let mut h = HistoryStore::default();
    let mut s = EditSession::new("");
    run_keys(&mut s, &opts, &mut h, &typed("hello wor"));
    assert_eq!(s.cursor, 9);

    let mut fresh = EditSession::new("hello wor");
    dispatch(Action::Motion(MotionKind::WordLeft), &mut fresh, &opts, &mut h);
    assert_eq!(fresh.cursor, 6);

    run_keys(&mut s, &opts, &mut h, &[KeyEvent::ctrl(KeyCode::Char('w'))]);
    assert_eq!(s.contents(), "hello ");
    assert_eq!(s.cursor, 6);
}

#[test]
fn tab_completion_scenario() {
    let opts = ReadOptions::default().with_autocomplete(["cat", "clear"]);
    let mut h = HistoryStore::default();
    let mut s = EditSession::new("");
    run_keys(
        &mut s,
        &opts,
        &mut h,
        &[KeyEvent::plain(KeyCode::Char('c')), KeyEvent::plain(KeyCode::Tab)],
    );
    assert_eq!(s.contents(), "cat");
    assert_eq!(s.cursor, 3);
}

#[test]
fn typing_then_accept_records_history() {
    let opts = ReadOptions::default();
    let mut h = HistoryStore::default();
    let mut s = EditSession::new("");
    run_keys(&mut s, &opts, &mut h, &typed("make test"));
    let r = dispatch(Action::Accept, &mut s, &opts, &mut h);
    assert_eq!(r.outcome, Some(Outcome::Accepted("make test".into())));
    assert_eq!(h.last(), Some("make test"));
}

#[test]
fn undo_walks_back_through_each_keystroke() {
    let opts = ReadOptions::default();
    let mut h = HistoryStore::default();
    let mut s = EditSession::new("");
    run_keys(&mut s, &opts, &mut h, &typed("abc"));
    run_keys(&mut s, &opts, &mut h, &[KeyEvent::ctrl(KeyCode::Char('z'))]);
    assert_eq!(s.contents(), "ab");
    run_keys(&mut s, &opts, &mut h, &[KeyEvent::ctrl(KeyCode::Char('u'))]);
    assert_eq!(s.contents(), "a");
    run_keys(&mut s, &opts, &mut h, &[KeyEvent::ctrl(KeyCode::Char('y'))]);
    assert_eq!((s.contents().as_str(), s.cursor), ("ab", 2));
    // A fresh edit drops the redo branch.
    run_keys(&mut s, &opts, &mut h, &typed("x"));
    assert_eq!(s.undo_stack().redo_depth(), 0);
}

#[test]
fn word_delete_at_start_turns_preview_into_live_text() {
    let opts = ReadOptions::default();
    let mut h = HistoryStore::from_entries(["older", "newer"]);
    let mut s = EditSession::new("");
    dispatch(Action::HistoryPrev, &mut s, &opts, &mut h);
    dispatch(Action::HistoryPrev, &mut s, &opts, &mut h);
    assert_eq!(s.contents(), "older");
    dispatch(Action::Motion(MotionKind::LineStart), &mut s, &opts, &mut h);
    dispatch(Action::Edit(EditKind::DeleteWordBackward), &mut s, &opts, &mut h);
    let r = dispatch(Action::HistoryNext, &mut s, &opts, &mut h);
    assert!(!r.dirty);
    assert_eq!(s.contents(), "older");
    assert_eq!(s.history_index, None);
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-z ,.]".prop_map(|s| Action::Edit(EditKind::InsertChar(s.chars().next().unwrap_or('a')))),
        Just(Action::Edit(EditKind::Backspace)),
        Just(Action::Edit(EditKind::DeleteUnder)),
        Just(Action::Edit(EditKind::DeleteWordBackward)),
        Just(Action::Motion(MotionKind::Left)),
        Just(Action::Motion(MotionKind::Right)),
        Just(Action::Motion(MotionKind::WordLeft)),
        Just(Action::Motion(MotionKind::WordRight)),
        Just(Action::Motion(MotionKind::LineStart)),
        Just(Action::Motion(MotionKind::LineEnd)),
        Just(Action::HistoryPrev),
        Just(Action::HistoryNext),
        Just(Action::Undo),
        Just(Action::Redo),
        Just(Action::Complete),
    ]
}

proptest! {
    #[test]
    fn cursor_stays_within_buffer(
        prefill in "[a-z ]{0,12}",
        actions in proptest::collection::vec(action_strategy(), 0..80),
    ) {
        let opts = ReadOptions::default().with_autocomplete(["alpha", "beta", "a.b"]);
        let mut h = HistoryStore::from_entries(["first entry", "x", "second, entry"]);
        let mut s = EditSession::new(&prefill);
        for a in actions {
            dispatch(a, &mut s, &opts, &mut h);
            prop_assert!(s.cursor <= s.buffer.len());
        }
    }

    #[test]
    fn undo_then_redo_restores_state(
        prefill in "[a-z ]{0,12}",
        cursor_seed in 0usize..16,
        action in action_strategy(),
    ) {
        let opts = ReadOptions::default().with_autocomplete(["alpha", "beta"]);
        let mut h = HistoryStore::from_entries(["one", "two"]);
        let mut s = EditSession::new(&prefill);
        s.cursor = cursor_seed % (s.buffer.len() + 1);
        let depth = s.undo_stack().undo_depth();
        dispatch(action, &mut s, &opts, &mut h);
        if s.undo_stack().undo_depth() > depth {
            let after = (s.contents(), s.cursor);
            prop_assert!(s.undo());
            prop_assert!(s.redo());
            prop_assert_eq!((s.contents(), s.cursor), after);
        }
    }

    #[test]
    fn history_round_trip_restores_live_buffer(
        entries in proptest::collection::vec("[a-z]{1,6}", 1..8),
        live in "[a-z ]{0,10}",
    ) {
        let opts = ReadOptions::default();
        let mut h = HistoryStore::from_entries(entries.iter().cloned());
        let n = h.len();
        let mut s = EditSession::new(&live);
        for _ in 0..n {
            dispatch(Action::HistoryPrev, &mut s, &opts, &mut h);
        }
        prop_assert_eq!(s.history_index, Some(0));
        for _ in 0..n {
            dispatch(Action::HistoryNext, &mut s, &opts, &mut h);
        }
        prop_assert_eq!(s.history_index, None);
        prop_assert_eq!(s.contents(), live);
    }
}
