//! Editing session state: live buffer, cursor, history navigation and the
//! undo/redo stacks.
//!
//! History navigation:
//! - `history_index == None` is the live edit; `Some(i)` previews entry `i`.
//! - `original_input` is the live buffer saved when browsing begins and is
//!   restored when navigating forward past the newest entry.
//! - Content edits and autocomplete drop back to the live edit without
//!   restoring `original_input`; the previewed text simply becomes the live
//!   text.
//!
//! Undo snapshots are whole-buffer clones (cheap: the buffer is a rope).
//! Cursor movement is never snapshotted.

use core_text::LineBuffer;

pub mod history;
pub mod undo;

pub use history::{HISTORY_DEFAULT_MAX, HistoryStore};
pub use undo::{InputStateSnapshot, UNDO_HISTORY_KEEP, UNDO_HISTORY_MAX, UndoRedoStack};

#[derive(Debug)]
pub struct EditSession {
    /// Text being edited.
    pub buffer: LineBuffer,
    /// Character offset; `cursor <= buffer.len()` after every operation.
    pub cursor: usize,
    pub history_index: Option<usize>,
    pub original_input: String,
    initial: String,
    undo: UndoRedoStack,
}

impl EditSession {
    /// Start a session on `prefill`, cursor at its end.
    pub fn new(prefill: &str) -> Self {
        let buffer = LineBuffer::from(prefill);
        let cursor = buffer.len();
        Self {
            buffer,
            cursor,
            history_index: None,
            original_input: prefill.to_string(),
            initial: prefill.to_string(),
            undo: UndoRedoStack::new(),
        }
    }

    /// Text the session started with; what a cancel may hand back.
    pub fn initial_input(&self) -> &str {
        &self.initial
    }

    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    pub fn snapshot(&self) -> InputStateSnapshot {
        InputStateSnapshot::new(&self.buffer, self.cursor)
    }

    pub fn is_browsing_history(&self) -> bool {
        self.history_index.is_some()
    }

    /// Push the current state onto the undo stack (clears redo).
    pub fn push_undo(&mut self) {
        self.undo.push_snapshot(&self.buffer, self.cursor);
    }

    pub fn undo_stack(&self) -> &UndoRedoStack {
        &self.undo
    }

    /// Drop back to live editing without restoring `original_input`.
    pub fn reset_history_navigation(&mut self) {
        self.history_index = None;
    }

    /// Replace the buffer with `text` and park the cursor at its end.
    pub fn load_text(&mut self, text: &str) {
        self.buffer.set(text);
        self.cursor = self.buffer.len();
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.buffer.len());
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.undo.undo(&mut self.buffer, &mut self.cursor);
        if changed {
            self.sync_original_after_restore();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.undo.redo(&mut self.buffer, &mut self.cursor);
        if changed {
            self.sync_original_after_restore();
        }
        changed
    }

    fn sync_original_after_restore(&mut self) {
        if self.history_index.is_none() {
            self.original_input = self.buffer.contents();
        }
    }
}
