use thiserror::Error;

/// Error returned from a read session. Both variants end the session; there
/// is nothing to retry against the same terminal.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The terminal collaborator failed (write, cursor query, key read).
    #[error("terminal error: {0:#}")]
    Terminal(#[from] anyhow::Error),

    /// Standard input or output is not attached to a terminal.
    #[error("not attached to an interactive terminal")]
    NotATerminal,
}
