//! Display composition and painting for the line editor.
//!
//! `compose` decides what is visible; `Renderer` paints that decision at the
//! session's fixed anchor. A repaint never clears the screen: it blanks the
//! session's own columns with spaces and rewrites them, leaving unrelated
//! terminal content untouched.

use anyhow::Result;
use core_config::ReadOptions;
use core_terminal::{Terminal, safe_move_to};
use core_text::LineBuffer;
use tracing::trace;

pub mod compose;
pub mod viewport;
pub mod writer;

pub use compose::{DisplayInfo, compose};
pub use viewport::Viewport;
use writer::Writer;

/// Paints composed lines at a fixed anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    anchor: (u16, u16),
    mask: Option<char>,
}

impl Renderer {
    pub fn new(anchor: (u16, u16), opts: &ReadOptions) -> Self {
        let mask = opts
            .masked_input
            .enabled
            .then_some(opts.masked_input.mask_char);
        Self { anchor, mask }
    }

    pub fn anchor(&self) -> (u16, u16) {
        self.anchor
    }

    /// Viewport for the terminal's current width.
    pub fn viewport<T: Terminal + ?Sized>(&self, term: &T, opts: &ReadOptions) -> Result<Viewport> {
        let (cols, _) = term.size()?;
        Ok(Viewport::for_options(cols, self.anchor.0, opts))
    }

    /// Compose and paint in one step; returns what was painted.
    pub fn draw<T: Terminal + ?Sized>(
        &self,
        term: &mut T,
        buf: &LineBuffer,
        cursor: usize,
        opts: &ReadOptions,
    ) -> Result<DisplayInfo> {
        let viewport = self.viewport(term, opts)?;
        let info = compose(buf, cursor, opts, viewport);
        self.paint(term, &info, viewport)?;
        Ok(info)
    }

    pub fn paint<T: Terminal + ?Sized>(
        &self,
        term: &mut T,
        info: &DisplayInfo,
        viewport: Viewport,
    ) -> Result<()> {
        let (col, row) = self.anchor;
        let mut w = Writer::new();
        w.move_to(col, row);
        w.print(" ".repeat(viewport.available));
        w.move_to(col, row);
        w.print(self.masked(&info.before_cursor));
        if info.has_suggestion {
            w.print_dimmed(info.suggestion.as_str());
        }
        w.print(self.masked(&info.after_cursor));
        let (cursor_col, cursor_row) = self.cursor_cell(info);
        w.move_to(cursor_col, cursor_row);
        trace!(target: "render", avail = viewport.available, cursor_col = info.cursor_column, suggestion = info.has_suggestion, "paint");
        w.flush(term)
    }

    /// Move the cursor back to where painting `info` left it, after other
    /// output has been written past it.
    pub fn restore_cursor<T: Terminal + ?Sized>(&self, term: &mut T, info: &DisplayInfo) -> Result<()> {
        let (col, row) = self.cursor_cell(info);
        safe_move_to(term, col, row);
        term.flush()
    }

    fn cursor_cell(&self, info: &DisplayInfo) -> (u16, u16) {
        let (col, row) = self.anchor;
        let cursor_col = usize::from(col).saturating_add(info.cursor_column);
        (u16::try_from(cursor_col).unwrap_or(u16::MAX), row)
    }

    fn masked(&self, text: &str) -> String {
        match self.mask {
            Some(m) => std::iter::repeat_n(m, text.chars().count()).collect(),
            None => text.to_string(),
        }
    }
}
