//! Cursor movement. Navigation is not undoable, so nothing here snapshots.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditSession;
use core_text::word::{find_word_end, find_word_start};

pub(crate) fn handle_motion(kind: MotionKind, session: &mut EditSession) -> DispatchResult {
    let before = session.cursor;
    let len = session.buffer.len();
    session.cursor = match kind {
        MotionKind::Left => before.saturating_sub(1),
        MotionKind::Right => (before + 1).min(len),
        MotionKind::WordLeft => find_word_start(&session.buffer, before),
        MotionKind::WordRight => find_word_end(&session.buffer, before),
        MotionKind::LineStart => 0,
        MotionKind::LineEnd => len,
    };
    tracing::trace!(target: "actions.dispatch", op = "motion", ?kind, from = before, to = session.cursor, "motion");
    DispatchResult::from_changed(session.cursor != before)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(text: &str, cursor: usize, kind: MotionKind) -> usize {
        let mut s = EditSession::new(text);
        s.cursor = cursor;
        handle_motion(kind, &mut s);
        s.cursor
    }

    #[test]
    fn char_motions_stop_at_edges() {
        assert_eq!(moved("abc", 0, MotionKind::Left), 0);
        assert_eq!(moved("abc", 3, MotionKind::Right), 3);
        assert_eq!(moved("abc", 1, MotionKind::Right), 2);
    }

    #[test]
    fn word_left_from_end_of_partial_word() {
        assert_eq!(moved("hello wor", 9, MotionKind::WordLeft), 6);
        assert_eq!(moved("hello wor", 6, MotionKind::WordLeft), 0);
    }

    #[test]
    fn word_right_crosses_punctuation_run_in_one_step() {
        assert_eq!(moved("a, b", 1, MotionKind::WordRight), 4);
    }

    #[test]
    fn home_end_and_no_snapshot() {
        let mut s = EditSession::new("abc");
        handle_motion(MotionKind::LineStart, &mut s);
        assert_eq!(s.cursor, 0);
        handle_motion(MotionKind::LineEnd, &mut s);
        assert_eq!(s.cursor, 3);
        assert_eq!(s.undo_stack().undo_depth(), 0);
    }
}
