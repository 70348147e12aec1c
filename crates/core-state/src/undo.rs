use core_text::LineBuffer;
use tracing::trace;

/// Stack size that triggers compaction.
pub const UNDO_HISTORY_MAX: usize = 100;
/// Number of most recent snapshots kept after compaction.
pub const UNDO_HISTORY_KEEP: usize = 50;

/// Immutable `(buffer, cursor)` pair; the unit of undo/redo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputStateSnapshot {
    pub buffer: LineBuffer,
    pub cursor: usize,
}

impl InputStateSnapshot {
    pub fn new(buffer: &LineBuffer, cursor: usize) -> Self {
        Self {
            buffer: buffer.clone(),
            cursor,
        }
    }
}

/// Two bounded stacks of snapshots.
///
/// Overflow is not LRU: once a stack grows past [`UNDO_HISTORY_MAX`] it is
/// compacted in one step to its [`UNDO_HISTORY_KEEP`] most recent entries.
#[derive(Debug, Default)]
pub struct UndoRedoStack {
    undo_stack: Vec<InputStateSnapshot>,
    redo_stack: Vec<InputStateSnapshot>,
}

impl UndoRedoStack {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record the pre-mutation state. Any pending redo history is discarded.
    pub fn push_snapshot(&mut self, buffer: &LineBuffer, cursor: usize) {
        push_bounded(
            &mut self.undo_stack,
            InputStateSnapshot::new(buffer, cursor),
        );
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), len = buffer.len(), cursor, "push_snapshot");
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Swap the current state with the newest undo snapshot. The cursor is
    /// clamped to the restored buffer. Returns false when nothing to undo.
    pub fn undo(&mut self, buffer: &mut LineBuffer, cursor: &mut usize) -> bool {
        let Some(last) = self.undo_stack.pop() else {
            return false;
        };
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        push_bounded(
            &mut self.redo_stack,
            InputStateSnapshot::new(buffer, *cursor),
        );
        restore(last, buffer, cursor);
        true
    }

    /// Mirror of [`UndoRedoStack::undo`] using the redo stack.
    pub fn redo(&mut self, buffer: &mut LineBuffer, cursor: &mut usize) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), undo_depth = self.undo_stack.len(), "redo_pop");
        push_bounded(
            &mut self.undo_stack,
            InputStateSnapshot::new(buffer, *cursor),
        );
        restore(next, buffer, cursor);
        true
    }
}

fn push_bounded(stack: &mut Vec<InputStateSnapshot>, snap: InputStateSnapshot) {
    stack.push(snap);
    if stack.len() > UNDO_HISTORY_MAX {
        let drop_count = stack.len() - UNDO_HISTORY_KEEP;
        stack.drain(..drop_count);
        trace!(target: "state.undo", kept = stack.len(), dropped = drop_count, "stack_compacted");
    }
}

fn restore(snap: InputStateSnapshot, buffer: &mut LineBuffer, cursor: &mut usize) {
    *buffer = snap.buffer;
    *cursor = snap.cursor.min(buffer.len());
}
