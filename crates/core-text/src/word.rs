//! Word-boundary scanning over a `LineBuffer`.
//!
//! A word is a maximal run of non-boundary characters. Boundary characters
//! are whitespace plus a fixed set of ASCII punctuation. Scans first hop over
//! a run of boundaries when they start on one, so repeated jumps cross a
//! cluster of punctuation in a single step.

use crate::LineBuffer;

/// ASCII punctuation and symbols that delimit words (whitespace is checked
/// separately). `-` and `_` are deliberately absent so identifiers such as
/// `foo-bar` or `snake_case` move as one word.
pub const BOUNDARY_CHARS: &[char] = &[
    '"', '\'', '/', '(', ')', '[', ']', '{', '}', ',', '.', ';', ':', '!', '?', '@', '#', '$',
    '%', '^', '&', '*', '+', '=', '|', '\\', '<', '>', '~', '`',
];

pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_CHARS.contains(&c)
}

/// Start offset of the word ending at (or before) `pos`.
///
/// Scans backward from `pos - 1`: a boundary run is skipped first (only when
/// the scan starts on one), then the word run.
pub fn find_word_start(buf: &LineBuffer, pos: usize) -> usize {
    let mut cur = pos.min(buf.len());
    let at = |i: usize| buf.char_at(i).map(is_boundary).unwrap_or(true);
    if cur > 0 && at(cur - 1) {
        while cur > 0 && at(cur - 1) {
            cur -= 1;
        }
    }
    while cur > 0 && !at(cur - 1) {
        cur -= 1;
    }
    cur
}

/// End offset (exclusive) of the word starting at (or after) `pos`; mirror of
/// [`find_word_start`].
pub fn find_word_end(buf: &LineBuffer, pos: usize) -> usize {
    let len = buf.len();
    let mut cur = pos.min(len);
    let at = |i: usize| buf.char_at(i).map(is_boundary).unwrap_or(true);
    if cur < len && at(cur) {
        while cur < len && at(cur) {
            cur += 1;
        }
    }
    while cur < len && !at(cur) {
        cur += 1;
    }
    cur
}

/// End of the token the cursor is inside: skips only non-boundary characters,
/// never crossing into the next word.
pub fn token_end(buf: &LineBuffer, pos: usize) -> usize {
    let len = buf.len();
    let mut cur = pos.min(len);
    while cur < len && buf.char_at(cur).is_some_and(|c| !is_boundary(c)) {
        cur += 1;
    }
    cur
}

/// True when `pos` is at the end of the buffer or sits on a boundary.
pub fn is_at_end_of_word(buf: &LineBuffer, pos: usize) -> bool {
    buf.char_at(pos).is_none_or(is_boundary)
}

/// The typed prefix of the token under the cursor: `find_word_start(cursor)..cursor`.
pub fn current_word(buf: &LineBuffer, cursor: usize) -> String {
    if cursor == 0 || buf.is_empty() {
        return String::new();
    }
    let cursor = cursor.min(buf.len());
    let start = find_word_start(buf, cursor);
    buf.slice(start..cursor).unwrap_or_default()
}
