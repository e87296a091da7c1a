//! Passphrases chosen from a word list.
use crate::{csprng, Error, Result};
use rand::seq::SliceRandom;
use std::path::Path;

/// Words used when no word list is supplied.
pub const DEFAULT_WORDS: &[&str] = &[
    "correct", "horse", "battery", "staple", "alpha", "bravo", "charlie",
];

/// Default number of words in a passphrase.
pub const DEFAULT_NUM_WORDS: usize = 14;

/// Read a word list with one word per line.
///
/// Lines are trimmed and blank lines are ignored.
pub fn read_wordlist(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect())
}

/// Generate a passphrase of `num_words` words chosen
/// with replacement from `words`.
pub fn generate_passphrase<S: AsRef<str>>(
    words: &[S],
    num_words: usize,
    separator: &str,
) -> Result<String> {
    if num_words == 0 {
        return Err(Error::InvalidLength);
    }

    let mut rng = csprng();
    let parts = (0..num_words)
        .map(|_| words.choose(&mut rng).map(|w| w.as_ref()))
        .collect::<Option<Vec<&str>>>()
        .ok_or(Error::EmptyWordList)?;
    Ok(parts.join(separator))
}
