//! Dispatcher applying `Action` to an `EditSession`.
//!
//! Decomposed by concern:
//! * `motion`   - cursor movement (never snapshotted)
//! * `edit`     - insert / delete mutations
//! * `history`  - previous / next history recall
//! * `undo`     - undo / redo
//! * `complete` - Tab autocomplete
//!
//! Every handler leaves `cursor <= buffer.len()`.

use crate::{Action, Outcome};
use core_config::ReadOptions;
use core_state::{EditSession, HistoryStore};

mod complete;
mod edit;
mod history;
mod motion;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// A redraw is needed.
    pub dirty: bool,
    /// Set when the session is over.
    pub outcome: Option<Outcome>,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            outcome: None,
        }
    }

    pub fn clean() -> Self {
        Self {
            dirty: false,
            outcome: None,
        }
    }

    pub fn finish(outcome: Outcome) -> Self {
        Self {
            dirty: false,
            outcome: Some(outcome),
        }
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed { Self::dirty() } else { Self::clean() }
    }
}

/// Apply an action to session state.
pub fn dispatch(
    action: Action,
    session: &mut EditSession,
    opts: &ReadOptions,
    history: &mut HistoryStore,
) -> DispatchResult {
    let result = match action {
        Action::Motion(kind) => motion::handle_motion(kind, session),
        Action::Edit(kind) => edit::handle_edit(kind, session),
        Action::HistoryPrev => history::handle_prev(session, history),
        Action::HistoryNext => history::handle_next(session, history),
        Action::Undo => undo::handle_undo(session),
        Action::Redo => undo::handle_redo(session),
        Action::Complete => complete::handle_complete(session, opts),
        Action::Accept => {
            let text = session.contents();
            if opts.add_returned_value_to_history {
                history.add(&text);
            }
            tracing::trace!(target: "actions.dispatch", op = "accept", len = text.chars().count(), "finish");
            DispatchResult::finish(Outcome::Accepted(text))
        }
        Action::Cancel => {
            let value = opts
                .escape_returns_original_input
                .then(|| session.initial_input().to_string());
            tracing::trace!(target: "actions.dispatch", op = "cancel", returns_value = value.is_some(), "finish");
            DispatchResult::finish(Outcome::Cancelled(value))
        }
    };
    debug_assert!(session.cursor <= session.buffer.len());
    result
}
