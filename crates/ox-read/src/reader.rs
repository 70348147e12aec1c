//! The session loop: read a key, dispatch it, repaint.
//!
//! Before each blocking read the terminal size is compared with the last one
//! seen; a change repaints the current state without consuming a key. The
//! anchor cell is captured once, after the leading text, and every repaint
//! starts there.

use crate::{ReadError, global_history};
use core_actions::{Outcome, dispatch, translate_key};
use core_config::ReadOptions;
use core_events::{KeyCode, KeyEvent};
use core_render::Renderer;
use core_state::{EditSession, HistoryStore};
use core_terminal::{Terminal, TerminalGuard};
use std::sync::PoisonError;
use tracing::{debug, info};

/// A reusable line reader bound to one terminal.
///
/// Without [`Reader::with_history`] sessions share the process-wide store from
/// [`global_history`].
pub struct Reader<'h, T: Terminal> {
    term: T,
    options: ReadOptions,
    history: Option<&'h mut HistoryStore>,
}

impl<'h, T: Terminal> Reader<'h, T> {
    pub fn new(term: T, mut options: ReadOptions) -> Self {
        options.normalize();
        Self {
            term,
            options,
            history: None,
        }
    }

    /// Use a caller-owned history store instead of the shared one.
    pub fn with_history(mut self, history: &'h mut HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    pub fn terminal(&self) -> &T {
        &self.term
    }

    pub fn into_terminal(self) -> T {
        self.term
    }

    /// Run one session. `leading_text` is written first; editing starts right
    /// after it with `prefill` in the buffer.
    pub fn read(&mut self, prefill: &str, leading_text: &str) -> Result<Outcome, ReadError> {
        match self.history.take() {
            Some(history) => {
                let result = run_session(&mut self.term, &self.options, history, prefill, leading_text);
                self.history = Some(history);
                result
            }
            None => {
                let mut shared = global_history()
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                run_session(&mut self.term, &self.options, &mut shared, prefill, leading_text)
            }
        }
    }
}

fn run_session<T: Terminal + ?Sized>(
    term: &mut T,
    options: &ReadOptions,
    history: &mut HistoryStore,
    prefill: &str,
    leading_text: &str,
) -> Result<Outcome, ReadError> {
    let mut term = TerminalGuard::enter(term)?;
    if !leading_text.is_empty() {
        term.write(leading_text)?;
    }
    let anchor = term.cursor_position()?;
    let renderer = Renderer::new(anchor, options);
    let mut session = EditSession::new(prefill);
    let mut last_size = term.size()?;
    info!(target: "runtime", col = anchor.0, row = anchor.1, cols = last_size.0, rows = last_size.1, "session_start");
    let mut shown = renderer.draw(&mut *term, &session.buffer, session.cursor, options)?;

    let outcome = loop {
        let size = term.size()?;
        if size != last_size {
            debug!(target: "runtime", cols = size.0, rows = size.1, "resize");
            last_size = size;
            shown = renderer.draw(&mut *term, &session.buffer, session.cursor, options)?;
        }

        let key = term.read_key()?;
        if let Some(action) = translate_key(&key) {
            let result = dispatch(action, &mut session, options, history);
            if let Some(outcome) = result.outcome {
                break outcome;
            }
            if result.dirty {
                shown = renderer.draw(&mut *term, &session.buffer, session.cursor, options)?;
            }
        }
        if options.debug {
            echo_key(&mut *term, &key, options)?;
            renderer.restore_cursor(&mut *term, &shown)?;
        }
    };

    if options.newline_on_exit {
        term.write("\r\n")?;
    }
    term.flush()?;
    info!(target: "runtime", accepted = outcome.is_accepted(), "session_end");
    Ok(outcome)
}

/// Diagnostic echo of the last key, written at the cursor. The next repaint
/// blanks it; the caller puts the cursor back on the edit position.
fn echo_key<T: Terminal + ?Sized>(
    term: &mut T,
    key: &KeyEvent,
    options: &ReadOptions,
) -> anyhow::Result<()> {
    let (name, ch) = match key.code {
        KeyCode::Char(_) if options.masked_input.enabled => {
            ("Char".to_string(), options.masked_input.mask_char)
        }
        KeyCode::Char(c) => ("Char".to_string(), c),
        other => (format!("{other:?}"), ' '),
    };
    term.write(&format!(
        " [key: {name}, char: {ch:?}, mods: {:#05b}]",
        key.mods.bits()
    ))?;
    term.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_terminal::ScriptedTerminal;
    use pretty_assertions::assert_eq;

    fn session(term: ScriptedTerminal, options: ReadOptions) -> (Outcome, ScriptedTerminal) {
        let mut history = HistoryStore::default();
        let mut reader = Reader::new(term, options).with_history(&mut history);
        let outcome = reader.read("", "").unwrap();
        (outcome, reader.into_terminal())
    }

    #[test]
    fn guard_is_released_after_session() {
        let term = ScriptedTerminal::new(40, 3).typed("ok").key(KeyEvent::plain(KeyCode::Enter));
        let (outcome, term) = session(term, ReadOptions::default());
        assert_eq!(outcome, Outcome::Accepted("ok".into()));
        assert!(!term.is_entered());
        assert_eq!(term.enter_count(), 1);
    }

    #[test]
    fn exhausted_script_is_a_terminal_error() {
        let mut history = HistoryStore::default();
        let mut reader =
            Reader::new(ScriptedTerminal::new(40, 3).typed("x"), ReadOptions::default()).with_history(&mut history);
        let err = reader.read("", "").unwrap_err();
        assert!(matches!(err, ReadError::Terminal(_)));
        assert!(!reader.terminal().is_entered());
    }

    #[test]
    fn debug_echo_masks_typed_chars() {
        let options = ReadOptions {
            debug: true,
            ..ReadOptions::default().masked('*')
        };
        let term = ScriptedTerminal::new(80, 3).typed("pw").key(KeyEvent::plain(KeyCode::Enter));
        let (outcome, term) = session(term, options);
        assert_eq!(outcome, Outcome::Accepted("pw".into()));
        assert!(term.transcript().contains("char: '*'"));
        assert!(!term.transcript().contains("'p'"));
    }

    #[test]
    fn debug_echo_leaves_cursor_on_edit_position() {
        let options = ReadOptions {
            debug: true,
            newline_on_exit: false,
            ..ReadOptions::default()
        };
        let term = ScriptedTerminal::new(80, 3)
            .typed("ab")
            .key(KeyEvent::plain(KeyCode::Left))
            .key(KeyEvent::plain(KeyCode::Other))
            .key(KeyEvent::plain(KeyCode::Enter));
        let (outcome, term) = session(term, options);
        assert_eq!(outcome, Outcome::Accepted("ab".into()));
        assert!(term.transcript().contains("key: Other"));
        assert_eq!(term.cursor(), (1, 0));
    }
}
