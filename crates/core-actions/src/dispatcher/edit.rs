//! Text mutation: insert, backspace, delete, delete word.
//!
//! Each mutation snapshots the pre-edit state and drops out of history
//! preview. Backspace at 0 and delete at the end touch nothing.

use super::DispatchResult;
use crate::EditKind;
use core_state::EditSession;
use core_text::word::find_word_start;

pub(crate) fn handle_edit(kind: EditKind, session: &mut EditSession) -> DispatchResult {
    let before = session.cursor;
    let changed = match kind {
        EditKind::InsertChar(c) => {
            begin_mutation(session);
            session.cursor = session.buffer.insert_char(before, c);
            true
        }
        EditKind::Backspace => {
            if before == 0 {
                false
            } else {
                begin_mutation(session);
                session.buffer.remove(before - 1..before);
                session.cursor = before - 1;
                true
            }
        }
        EditKind::DeleteUnder => {
            if before >= session.buffer.len() {
                false
            } else {
                begin_mutation(session);
                session.buffer.remove(before..before + 1);
                true
            }
        }
        // Unlike the single-char deletes this always snapshots, even at 0.
        EditKind::DeleteWordBackward => {
            begin_mutation(session);
            let start = find_word_start(&session.buffer, before);
            session.buffer.remove(start..before);
            session.cursor = start;
            true
        }
    };
    if changed {
        tracing::trace!(target: "actions.dispatch", op = op_name(kind), from = before, to = session.cursor, len = session.buffer.len(), "edit");
    }
    DispatchResult::from_changed(changed)
}

// Inserted characters stay out of the log; the input may be masked.
fn op_name(kind: EditKind) -> &'static str {
    match kind {
        EditKind::InsertChar(_) => "insert_char",
        EditKind::Backspace => "backspace",
        EditKind::DeleteUnder => "delete_under",
        EditKind::DeleteWordBackward => "delete_word_backward",
    }
}

fn begin_mutation(session: &mut EditSession) {
    session.push_undo();
    session.reset_history_navigation();
}
