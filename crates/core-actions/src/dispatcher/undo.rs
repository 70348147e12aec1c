//! Undo / Redo dispatch over the session's snapshot stacks.

use super::DispatchResult;
use core_state::EditSession;

pub(crate) fn handle_undo(session: &mut EditSession) -> DispatchResult {
    let changed = session.undo();
    tracing::trace!(target: "actions.dispatch", op = "undo", changed, cursor = session.cursor, "undo");
    DispatchResult::from_changed(changed)
}

pub(crate) fn handle_redo(session: &mut EditSession) -> DispatchResult {
    let changed = session.redo();
    tracing::trace!(target: "actions.dispatch", op = "redo", changed, cursor = session.cursor, "redo");
    DispatchResult::from_changed(changed)
}
