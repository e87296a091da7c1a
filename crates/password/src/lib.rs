#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Password generation, mask expansion and wordlist
//! mangling for the `passforge` command line tool.

pub mod combine;
pub mod digest;
mod error;
pub mod generator;
pub mod mangle;
pub mod mask;
pub mod passphrase;
pub mod policy;
pub mod pool;
pub mod profile;

pub use error::Error;
pub use generator::{entropy_bits, generate_password};
pub use mask::generate_mask;
pub use policy::{ensure_policy, generate_with_policy, Policy, PolicyKind};
pub use pool::{build_pool, CharClass};

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numerical digits.
pub const DIGITS: &str = "0123456789";

/// Symbols available to generated passwords.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/";
