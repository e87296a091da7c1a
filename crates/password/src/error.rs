use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a requested length is zero.
    #[error("length must be positive")]
    InvalidLength,

    /// Error generated when the character pool is empty.
    #[error("empty character pool")]
    EmptyPool,

    /// Error generated when no candidate satisfied a policy
    /// within the number of allowed attempts.
    #[error("failed to generate password after {0} tries")]
    PolicyExhausted(usize),

    /// Error generated when too many words are given
    /// to the combination generator.
    #[error("at most {max} words may be combined, got {actual}")]
    TooManyWords {
        /// Maximum number of words.
        max: usize,
        /// Number of words supplied.
        actual: usize,
    },

    /// Error generated when a word list contains no words.
    #[error("word list is empty")]
    EmptyWordList,

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated converting to and from JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
