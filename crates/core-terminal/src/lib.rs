//! Terminal collaborator abstraction and crossterm implementation.
//!
//! The editor only ever needs a handful of primitives: read one decoded key,
//! write text (plain or de-emphasized), get/set the cursor cell and query the
//! viewport size. Everything else (escape parsing, raw mode) stays behind
//! this trait so sessions can run headless against [`ScriptedTerminal`].

use anyhow::Result;
use core_events::KeyEvent;
use crossterm::{
    cursor::{self, MoveTo},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, is_raw_mode_enabled},
};
use std::io::{Stdout, Write, stdout};
use std::ops::{Deref, DerefMut};
use tracing::warn;

pub mod capabilities;
pub mod scripted;
pub use capabilities::TerminalCapabilities;
pub use scripted::{ScriptStep, ScriptedTerminal};

pub trait Terminal {
    /// Block until the next decoded key.
    fn read_key(&mut self) -> Result<KeyEvent>;
    fn write(&mut self, text: &str) -> Result<()>;
    /// Write in a de-emphasized style (used for inline suggestions).
    fn write_dimmed(&mut self, text: &str) -> Result<()>;
    /// Current cursor cell as (column, row).
    fn cursor_position(&mut self) -> Result<(u16, u16)>;
    fn move_to(&mut self, col: u16, row: u16) -> Result<()>;
    /// Viewport size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
    fn flush(&mut self) -> Result<()>;
    /// Prepare for key-at-a-time input. Default: nothing to do.
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }
    fn leave(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn read_key(&mut self) -> Result<KeyEvent> {
        (**self).read_key()
    }
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
    fn write_dimmed(&mut self, text: &str) -> Result<()> {
        (**self).write_dimmed(text)
    }
    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        (**self).cursor_position()
    }
    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        (**self).move_to(col, row)
    }
    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
    fn enter(&mut self) -> Result<()> {
        (**self).enter()
    }
    fn leave(&mut self) -> Result<()> {
        (**self).leave()
    }
}

/// Place the cursor, clamping the target to the terminal's current size.
///
/// A resize between measurement and paint can leave a computed target off
/// screen; the clamp absorbs that. If placement still fails the cursor falls
/// back to column 0 of the current row, and after that the failure is only
/// logged.
pub fn safe_move_to<T: Terminal + ?Sized>(term: &mut T, col: u16, row: u16) {
    let (cols, rows) = term.size().unwrap_or((1, 1));
    let col = col.min(cols.saturating_sub(1));
    let row = row.min(rows.saturating_sub(1));
    if let Err(e) = term.move_to(col, row) {
        warn!(target: "terminal", col, row, error = %e, "cursor_placement_failed");
        let fallback_row = term.cursor_position().map(|(_, r)| r).unwrap_or(0);
        if let Err(e) = term.move_to(0, fallback_row) {
            warn!(target: "terminal", error = %e, "cursor_fallback_failed");
        }
    }
}

/// Inline (non alternate-screen) crossterm terminal on stdout.
pub struct CrosstermTerminal {
    out: Stdout,
    enabled_raw: bool,
    color: bool,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self::with_capabilities(TerminalCapabilities::detect())
    }

    /// Without color the suggestion falls back to the dim attribute.
    pub fn with_capabilities(caps: TerminalCapabilities) -> Self {
        Self {
            out: stdout(),
            enabled_raw: false,
            color: caps.color,
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> Result<KeyEvent> {
        self.out.flush()?;
        core_input::read_key()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn write_dimmed(&mut self, text: &str) -> Result<()> {
        if self.color {
            queue!(
                self.out,
                SetForegroundColor(Color::DarkGrey),
                Print(text),
                ResetColor
            )?;
        } else {
            queue!(
                self.out,
                SetAttribute(Attribute::Dim),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        self.out.flush()?;
        Ok(cursor::position()?)
    }

    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        if !is_raw_mode_enabled()? {
            enable_raw_mode()?;
            self.enabled_raw = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        self.out.flush()?;
        if self.enabled_raw {
            disable_raw_mode()?;
            self.enabled_raw = false;
        }
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// RAII guard: enters on creation, leaves on drop, even on early return or panic.
pub struct TerminalGuard<'a, T: Terminal + ?Sized> {
    term: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> TerminalGuard<'a, T> {
    pub fn enter(term: &'a mut T) -> Result<Self> {
        term.enter()?;
        Ok(Self { term })
    }
}

impl<T: Terminal + ?Sized> Deref for TerminalGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.term
    }
}

impl<T: Terminal + ?Sized> DerefMut for TerminalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.term
    }
}

impl<T: Terminal + ?Sized> Drop for TerminalGuard<'_, T> {
    fn drop(&mut self) {
        let _ = self.term.leave();
    }
}
