//! Random password generator.
use crate::{csprng, Error, Result};
use rand::Rng;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Generate a password of `length` characters chosen
/// uniformly from `pool`.
pub fn generate_password(length: usize, pool: &str) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidLength);
    }

    let chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return Err(Error::EmptyPool);
    }

    let mut rng = csprng();
    Ok((0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

/// Rough estimate of the entropy in bits for a password
/// of `length` characters drawn from a pool of `pool_size`.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Pick a single random character from a non-empty alphabet.
pub(crate) fn random_char(rng: &mut impl Rng, alphabet: &str) -> char {
    let chars: Vec<char> = alphabet.chars().collect();
    chars[rng.gen_range(0..chars.len())]
}
