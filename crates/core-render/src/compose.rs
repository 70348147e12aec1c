//! Display composition: decides which part of the buffer is visible, where
//! the cursor lands on screen and whether an inline suggestion fits.
//!
//! Pure; recomputed on every redraw. Steps:
//! 1. line breaks become one visible glyph each, so column == offset;
//! 2. a suggestion is derived from the autocomplete candidates;
//! 3. a configured window is re-centered on the cursor;
//! 4. the result is fitted to the available width (full, truncated with
//!    markers, or a bare cursor offset when too narrow).

use crate::viewport::Viewport;
use core_config::ReadOptions;
use core_text::LineBuffer;
use core_text::complete::first_completion;
use core_text::word::{current_word, is_at_end_of_word};
use tracing::trace;

/// Glyph standing in for a structural line break.
pub const LINE_BREAK_GLYPH: char = '↵';
/// Marker for content hidden beyond either edge.
pub const ELLIPSIS: char = '…';
/// Columns reserved for markers when truncating.
pub const ELLIPSIS_RESERVE: usize = 3;
/// Narrowest width that still gets truncated content instead of an offset.
pub const MIN_TRUNCATE_WIDTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayInfo {
    pub before_cursor: String,
    pub suggestion: String,
    pub after_cursor: String,
    /// On-screen column of the cursor relative to the anchor; always the
    /// character length of `before_cursor`.
    pub cursor_column: usize,
    pub has_suggestion: bool,
}

impl DisplayInfo {
    /// Total printable characters.
    pub fn width(&self) -> usize {
        self.before_cursor.chars().count()
            + self.suggestion.chars().count()
            + self.after_cursor.chars().count()
    }
}

fn visible_char(c: char) -> char {
    match c {
        '\n' | '\r' => LINE_BREAK_GLYPH,
        other => other,
    }
}

/// Remainder of the first matching candidate beyond the typed token, when the
/// cursor sits at the end of a long-enough token.
pub fn suggestion_for(buf: &LineBuffer, cursor: usize, opts: &ReadOptions) -> Option<String> {
    let ac = &opts.autocomplete;
    if !opts.autocomplete_active() || ac.items.is_empty() {
        return None;
    }
    let word = current_word(buf, cursor);
    let word_len = word.chars().count();
    if word_len < ac.min_length || !is_at_end_of_word(buf, cursor) {
        return None;
    }
    let candidate = first_completion(&word, &ac.items, ac.case_sensitive)?;
    let rest: String = candidate.chars().skip(word_len).collect();
    (!rest.is_empty()).then_some(rest)
}

pub fn compose(
    buf: &LineBuffer,
    cursor: usize,
    opts: &ReadOptions,
    viewport: Viewport,
) -> DisplayInfo {
    let cursor = cursor.min(buf.len());
    let text: Vec<char> = buf.chars().map(visible_char).collect();
    let avail = viewport.available;
    // Too narrow for truncation means too narrow for a suggestion as well.
    let suggestion = if avail > MIN_TRUNCATE_WIDTH {
        suggestion_for(buf, cursor, opts).unwrap_or_default()
    } else {
        String::new()
    };

    let (visible, vcursor) = match viewport.window {
        Some(w) if text.len() > w => {
            let start = cursor.saturating_sub(w / 2).min(text.len() - w);
            (&text[start..start + w], cursor - start)
        }
        _ => (&text[..], cursor),
    };

    let sug_len = suggestion.chars().count();
    if visible.len() + sug_len <= avail {
        trace!(target: "render", path = "full", len = visible.len(), suggestion = sug_len, avail, "compose");
        let has_suggestion = !suggestion.is_empty();
        return DisplayInfo {
            before_cursor: visible[..vcursor].iter().collect(),
            after_cursor: visible[vcursor..].iter().collect(),
            suggestion,
            cursor_column: vcursor,
            has_suggestion,
        };
    }
    if avail > MIN_TRUNCATE_WIDTH {
        trace!(target: "render", path = "truncated", len = visible.len(), avail, "compose");
        return truncate(visible, vcursor, avail);
    }
    trace!(target: "render", path = "narrow", avail, "compose");
    // Absolute buffer offset, not the window-relative `vcursor`.
    let indicator = cursor.to_string();
    if indicator.len() <= avail {
        DisplayInfo {
            cursor_column: indicator.len(),
            before_cursor: indicator,
            ..DisplayInfo::default()
        }
    } else {
        DisplayInfo::default()
    }
}

/// Split `avail - 3` columns between the two sides of the cursor, each capped
/// at half. Leftover columns go to the before side when it still has hidden
/// content, otherwise to the after side. Suggestions are dropped.
fn truncate(text: &[char], cursor: usize, avail: usize) -> DisplayInfo {
    let space = avail - ELLIPSIS_RESERVE;
    let before = &text[..cursor];
    let after = &text[cursor..];

    let mut before_len = before.len().min(space / 2);
    let mut after_len = after.len().min(space - before_len);
    if before_len + after_len < space {
        if before.len() > before_len {
            before_len = before.len().min(space - after_len);
        } else if after.len() > after_len {
            after_len = after.len().min(space - before_len);
        }
    }

    let show_start = cursor > before_len;
    let show_end = cursor + after_len < text.len();

    let mut before_cursor = String::new();
    if show_start {
        before_cursor.push(ELLIPSIS);
    }
    before_cursor.extend(&before[before.len() - before_len..]);
    let cursor_column = usize::from(show_start) + before_len;

    let mut after_cursor: String = after[..after_len].iter().collect();
    if show_end {
        after_cursor.push(ELLIPSIS);
    }

    DisplayInfo {
        before_cursor,
        suggestion: String::new(),
        after_cursor,
        cursor_column,
        has_suggestion: false,
    }
}
