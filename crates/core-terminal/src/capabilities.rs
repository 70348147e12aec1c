//! Terminal capability probing.
//!
//! Cheap, run once per session. Only records what the reader needs to decide
//! whether an interactive session is possible at all.

use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    /// Both stdin and stdout are attached to a terminal.
    pub interactive: bool,
    /// `NO_COLOR` is unset, so the dimmed suggestion style may use color.
    pub color: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub const fn new(interactive: bool, color: bool) -> Self {
        Self { interactive, color }
    }
}
