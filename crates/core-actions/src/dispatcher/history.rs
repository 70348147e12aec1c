//! History recall (Up / Down).
//!
//! Previous never wraps past the oldest entry; next past the newest restores
//! the live text saved when browsing began.

use super::DispatchResult;
use core_state::{EditSession, HistoryStore};

pub(crate) fn handle_prev(session: &mut EditSession, history: &HistoryStore) -> DispatchResult {
    let target = match session.history_index {
        None if history.is_empty() => return DispatchResult::clean(),
        None => {
            session.push_undo();
            session.original_input = session.contents();
            history.len() - 1
        }
        Some(i) if i > 0 => {
            session.push_undo();
            i - 1
        }
        Some(_) => return DispatchResult::clean(),
    };
    let Some(entry) = history.get(target) else {
        return DispatchResult::clean();
    };
    session.history_index = Some(target);
    session.load_text(entry);
    tracing::trace!(target: "actions.dispatch", op = "history_prev", index = target, len = session.buffer.len(), "history");
    DispatchResult::dirty()
}

pub(crate) fn handle_next(session: &mut EditSession, history: &HistoryStore) -> DispatchResult {
    let Some(i) = session.history_index else {
        return DispatchResult::clean();
    };
    session.push_undo();
    match history.get(i + 1) {
        Some(entry) => {
            session.history_index = Some(i + 1);
            session.load_text(entry);
        }
        None => {
            session.history_index = None;
            let live = std::mem::take(&mut session.original_input);
            session.load_text(&live);
            session.original_input = live;
        }
    }
    tracing::trace!(target: "actions.dispatch", op = "history_next", index = ?session.history_index, len = session.buffer.len(), "history");
    DispatchResult::dirty()
}
