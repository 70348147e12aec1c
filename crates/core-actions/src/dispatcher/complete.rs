//! Tab autocomplete: replace the token under the cursor with the first
//! matching candidate.

use super::DispatchResult;
use core_config::ReadOptions;
use core_state::EditSession;
use core_text::complete::first_completion;
use core_text::word::{find_word_start, token_end};

pub(crate) fn handle_complete(session: &mut EditSession, opts: &ReadOptions) -> DispatchResult {
    let ac = &opts.autocomplete;
    if !opts.autocomplete_active() || ac.items.is_empty() {
        return DispatchResult::clean();
    }
    let cursor = session.cursor;
    let start = find_word_start(&session.buffer, cursor);
    let token = session.buffer.slice(start..cursor).unwrap_or_default();
    if token.chars().count() < ac.min_length {
        return DispatchResult::clean();
    }
    let Some(candidate) = first_completion(&token, &ac.items, ac.case_sensitive) else {
        return DispatchResult::clean();
    };
    let end = token_end(&session.buffer, cursor);
    session.push_undo();
    session.reset_history_navigation();
    session.buffer.remove(start..end);
    session.cursor = session.buffer.insert_str(start, candidate);
    tracing::trace!(target: "actions.dispatch", op = "complete", start, end, to = session.cursor, "complete");
    DispatchResult::dirty()
}
