use rustyline::{error::ReadlineError, history::MemHistory, Editor};

use crate::{Error, Result};

pub(crate) fn basic_editor() -> Result<Editor<(), MemHistory>> {
    Ok(Editor::<(), MemHistory>::with_history(
        Default::default(),
        MemHistory::new(),
    )?)
}

/// Read a line that may be the empty string.
///
/// End of input is an error naming the prompt.
pub fn read_line_allow_empty(prompt: &str) -> Result<String> {
    let mut rl = basic_editor()?;
    match rl.readline(prompt) {
        Ok(line) => Ok(line.trim().to_owned()),
        Err(e) => Err(readline_error(prompt, e)),
    }
}

fn readline_error(prompt: &str, e: ReadlineError) -> Error {
    match e {
        ReadlineError::Eof => {
            Error::NoInput(prompt.trim().trim_end_matches(':').to_owned())
        }
        _ => Error::Readline(e),
    }
}
