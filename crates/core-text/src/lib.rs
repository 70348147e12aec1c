//! Rope-backed line buffer addressed by character offsets.
//!
//! Column counting in the line editor is per character (no grapheme or
//! wide-cell handling), so every offset here is a `char` index and the cursor
//! invariant is simply `0 <= cursor <= len()`.

use ropey::Rope;
use std::fmt;
use std::ops::Range;

pub mod complete;
pub mod word;

/// The in-progress text of one editing session.
///
/// Cloning is cheap (ropes share structure), which is what makes whole-buffer
/// undo snapshots affordable.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    rope: Rope,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn char_at(&self, idx: usize) -> Option<char> {
        if idx < self.len() {
            Some(self.rope.char(idx))
        } else {
            None
        }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    /// Insert a character at `idx`, clamped to the end of the buffer. Returns
    /// the offset just past the inserted character.
    pub fn insert_char(&mut self, idx: usize, c: char) -> usize {
        let idx = idx.min(self.len());
        self.rope.insert_char(idx, c);
        idx + 1
    }

    /// Insert `text` at `idx` (clamped). Returns the offset just past it.
    pub fn insert_str(&mut self, idx: usize, text: &str) -> usize {
        let idx = idx.min(self.len());
        self.rope.insert(idx, text);
        idx + text.chars().count()
    }

    /// Remove the characters in `range`. Ranges reaching past the end are
    /// clipped; an empty or inverted range is a no-op. Returns the number of
    /// characters removed.
    pub fn remove(&mut self, range: Range<usize>) -> usize {
        let end = range.end.min(self.len());
        if range.start >= end {
            return 0;
        }
        self.rope.remove(range.start..end);
        end - range.start
    }

    /// Copy of the characters in `range`, or `None` when the range does not
    /// lie inside the buffer.
    pub fn slice(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || range.end > self.len() {
            return None;
        }
        Some(self.rope.slice(range).to_string())
    }

    /// Replace the whole content.
    pub fn set(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    pub fn contents(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl From<String> for LineBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

// Content stays out of Debug output: buffers may hold masked input.
impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer").field("len", &self.len()).finish()
    }
}
