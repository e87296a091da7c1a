use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no character pool specified")]
    NoPool,

    #[error("no input for {0}")]
    NoInput(String),

    #[error(transparent)]
    Password(#[from] passforge_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Readline(#[from] ReadlineError),

    #[error(transparent)]
    Clipboard(#[from] arboard::Error),
}

impl Error {
    /// Determine if this error was caused by the user
    /// interrupting a prompt.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Readline(ReadlineError::Interrupted))
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoPool
            | Error::Password(passforge_password::Error::EmptyPool) => 2,
            _ => 1,
        }
    }
}
