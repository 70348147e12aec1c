//! Line-editing actions and the dispatcher that applies them to an
//! `EditSession`.
//!
//! Keys become `Action`s in `key_translator`; every action maps to exactly one
//! operation in `dispatcher`. Actions carry no state of their own.

pub mod dispatcher;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    WordLeft,
    WordRight,
    LineStart,
    LineEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    Backspace,
    DeleteUnder,
    DeleteWordBackward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    HistoryPrev,
    HistoryNext,
    Undo,
    Redo,
    Complete,
    Accept,
    Cancel,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(String),
    /// Cancelled; carries the pre-edit text when configured to return it.
    Cancelled(Option<String>),
}

impl Outcome {
    /// Collapse to the value a caller receives: accepted text, or the cancel
    /// fallback (possibly nothing).
    pub fn into_value(self) -> Option<String> {
        match self {
            Outcome::Accepted(s) => Some(s),
            Outcome::Cancelled(v) => v,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}
