//! Batched terminal commands for one repaint.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is flushed mid-frame.
//! * Positions are absolute; every `MoveTo` is clamped to the terminal's
//!   size at flush time, not at build time.
//! * A `Writer` is a short-lived value built per frame.

use anyhow::Result;
use core_terminal::{Terminal, safe_move_to};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    Print(String),
    /// De-emphasized text (inline suggestion).
    PrintDimmed(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn print_dimmed<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::PrintDimmed(s));
        }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn flush<T: Terminal + ?Sized>(self, term: &mut T) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => safe_move_to(term, x, y),
                Command::Print(s) => term.write(&s)?,
                Command::PrintDimmed(s) => term.write_dimmed(&s)?,
            }
        }
        term.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_terminal::ScriptedTerminal;

    #[test]
    fn empty_prints_are_dropped() {
        let mut w = Writer::new();
        w.print("");
        w.print_dimmed(String::new());
        w.move_to(1, 1);
        assert_eq!(w.commands(), &[Command::MoveTo(1, 1)]);
    }

    #[test]
    fn flush_applies_in_order() {
        let mut t = ScriptedTerminal::new(10, 2);
        let mut w = Writer::new();
        w.move_to(2, 1);
        w.print("ab");
        w.print_dimmed("c");
        w.move_to(3, 1);
        w.flush(&mut t).unwrap();
        assert_eq!(t.row_text(1), "  abc");
        assert_eq!(t.dimmed_text(1), "c");
        assert_eq!(t.cursor(), (3, 1));
    }
}
