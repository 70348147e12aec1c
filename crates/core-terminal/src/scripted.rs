//! In-memory terminal that replays a key script against a character grid.
//!
//! Used by tests across the workspace to run full sessions headless and then
//! inspect exactly which cells were painted, which were dimmed, and where the
//! cursor was left.

use crate::Terminal;
use anyhow::{Result, bail};
use core_events::{KeyCode, KeyEvent};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Key(KeyEvent),
    /// Applied as soon as the key before it has been read, so the session
    /// sees the new size before its next read.
    Resize(u16, u16),
}

#[derive(Debug, Clone)]
pub struct ScriptedTerminal {
    cols: u16,
    rows: u16,
    cells: Vec<Vec<char>>,
    dimmed: Vec<Vec<bool>>,
    col: u16,
    row: u16,
    script: VecDeque<ScriptStep>,
    transcript: String,
    entered: bool,
    enter_count: usize,
}

impl ScriptedTerminal {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![' '; cols as usize]; rows as usize],
            dimmed: vec![vec![false; cols as usize]; rows as usize],
            col: 0,
            row: 0,
            script: VecDeque::new(),
            transcript: String::new(),
            entered: false,
            enter_count: 0,
        }
    }

    /// Start with the cursor at a given cell (e.g. after a prompt).
    pub fn with_cursor(mut self, col: u16, row: u16) -> Self {
        self.col = col.min(self.cols.saturating_sub(1));
        self.row = row.min(self.rows.saturating_sub(1));
        self
    }

    pub fn key(mut self, key: KeyEvent) -> Self {
        self.script.push_back(ScriptStep::Key(key));
        self
    }

    pub fn keys(mut self, keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        self.script.extend(keys.into_iter().map(ScriptStep::Key));
        self
    }

    /// Queue one plain `Char` key per character of `text`.
    pub fn typed(self, text: &str) -> Self {
        self.keys(text.chars().map(|c| KeyEvent::plain(KeyCode::Char(c))))
    }

    pub fn resize(mut self, cols: u16, rows: u16) -> Self {
        self.script.push_back(ScriptStep::Resize(cols, rows));
        self
    }

    pub fn cursor(&self) -> (u16, u16) {
        (self.col, self.row)
    }

    /// Row content with trailing blanks removed.
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Only the dimmed cells of a row, in order.
    pub fn dimmed_text(&self, row: u16) -> String {
        let (Some(cells), Some(dim)) = (self.cells.get(row as usize), self.dimmed.get(row as usize))
        else {
            return String::new();
        };
        cells
            .iter()
            .zip(dim)
            .filter(|(_, d)| **d)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Everything ever written, in order, without cursor movement.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn remaining_steps(&self) -> usize {
        self.script.len()
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enter_count(&self) -> usize {
        self.enter_count
    }

    fn put(&mut self, text: &str, dim: bool) {
        self.transcript.push_str(text);
        for c in text.chars() {
            match c {
                '\r' => self.col = 0,
                '\n' => self.line_feed(),
                _ => {
                    if self.col >= self.cols {
                        self.col = 0;
                        self.line_feed();
                    }
                    let (r, k) = (self.row as usize, self.col as usize);
                    if let (Some(cell), Some(d)) = (
                        self.cells.get_mut(r).and_then(|row| row.get_mut(k)),
                        self.dimmed.get_mut(r).and_then(|row| row.get_mut(k)),
                    ) {
                        *cell = c;
                        *d = dim;
                    }
                    self.col += 1;
                }
            }
        }
    }

    fn line_feed(&mut self) {
        if self.row + 1 < self.rows {
            self.row += 1;
        } else if !self.cells.is_empty() {
            self.cells.remove(0);
            self.dimmed.remove(0);
            self.cells.push(vec![' '; self.cols as usize]);
            self.dimmed.push(vec![false; self.cols as usize]);
        }
    }

    fn apply_pending_resizes(&mut self) {
        while let Some(&ScriptStep::Resize(c, r)) = self.script.front() {
            self.script.pop_front();
            self.apply_resize(c, r);
        }
    }

    fn apply_resize(&mut self, cols: u16, rows: u16) {
        self.cells.resize(rows as usize, vec![' '; cols as usize]);
        self.dimmed.resize(rows as usize, vec![false; cols as usize]);
        for row in &mut self.cells {
            row.resize(cols as usize, ' ');
        }
        for row in &mut self.dimmed {
            row.resize(cols as usize, false);
        }
        self.cols = cols;
        self.rows = rows;
        self.col = self.col.min(cols.saturating_sub(1));
        self.row = self.row.min(rows.saturating_sub(1));
    }
}

impl Terminal for ScriptedTerminal {
    fn read_key(&mut self) -> Result<KeyEvent> {
        self.apply_pending_resizes();
        match self.script.pop_front() {
            Some(ScriptStep::Key(k)) => {
                self.apply_pending_resizes();
                Ok(k)
            }
            _ => bail!("key script exhausted"),
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.put(text, false);
        Ok(())
    }

    fn write_dimmed(&mut self, text: &str) -> Result<()> {
        self.put(text, true);
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        Ok((self.col, self.row))
    }

    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        if col >= self.cols || row >= self.rows {
            bail!("cursor target ({col}, {row}) outside {}x{}", self.cols, self.rows);
        }
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        self.enter_count += 1;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }
}
