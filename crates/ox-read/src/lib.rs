//! Readline-style single-line input for terminal programs.
//!
//! ```no_run
//! let name = ox_read::read("", "name: ", ox_read::ReadOptions::default())?;
//! # Ok::<(), ox_read::ReadError>(())
//! ```
//!
//! `read` and `read_nullable` drive the process's own terminal and share one
//! history store. `Reader` takes any [`Terminal`] and an optional private
//! store.

use core_terminal::{CrosstermTerminal, TerminalCapabilities};
use std::sync::{LazyLock, Mutex, PoisonError};

mod error;
mod reader;

pub use core_actions::Outcome;
pub use core_config::{AutocompleteOptions, MaskOptions, ReadOptions};
pub use core_state::HistoryStore;
pub use core_terminal::Terminal;
pub use error::ReadError;
pub use reader::Reader;

static GLOBAL_HISTORY: LazyLock<Mutex<HistoryStore>> =
    LazyLock::new(|| Mutex::new(HistoryStore::default()));

/// History shared by every session that does not bring its own store. Lives
/// for the rest of the process.
pub fn global_history() -> &'static Mutex<HistoryStore> {
    &GLOBAL_HISTORY
}

/// Read one line. On cancel returns the original input when
/// `escape_returns_original_input` is set, otherwise an empty string.
pub fn read(prefill: &str, leading_text: &str, options: ReadOptions) -> Result<String, ReadError> {
    Ok(read_nullable(prefill, leading_text, options)?.unwrap_or_default())
}

/// Like [`read`], but a cancel without an original-input fallback is `None`.
pub fn read_nullable(
    prefill: &str,
    leading_text: &str,
    options: ReadOptions,
) -> Result<Option<String>, ReadError> {
    let caps = TerminalCapabilities::detect();
    if !caps.interactive {
        return Err(ReadError::NotATerminal);
    }
    global_history()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .set_max_size(options.history_capacity);
    let mut reader = Reader::new(CrosstermTerminal::with_capabilities(caps), options);
    Ok(reader.read(prefill, leading_text)?.into_value())
}
