//! Mask pattern expansion.
//!
//! A mask mixes literal characters with two character
//! tokens naming a class to sample from:
//!
//! | Token | Class             |
//! |-------|-------------------|
//! | `?l`  | lowercase letters |
//! | `?u`  | uppercase letters |
//! | `?d`  | digits            |
//! | `?s`  | symbols           |
//!
//! A `?` that is not followed by a known class is copied
//! literally, as is every other character.
use crate::{csprng, generator::random_char, CharClass};

/// Token prefix.
pub const TOKEN_PREFIX: char = '?';

/// Element of a parsed mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Literal(char),
    Class(CharClass),
}

fn segments(mask: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut chars = mask.chars().peekable();
    while let Some(c) = chars.next() {
        if c == TOKEN_PREFIX {
            if let Some(class) =
                chars.peek().copied().and_then(CharClass::from_mask_token)
            {
                chars.next();
                out.push(Segment::Class(class));
                continue;
            }
        }
        out.push(Segment::Literal(c));
    }
    out
}

/// Generate one password from a mask.
pub fn generate_mask(mask: &str) -> String {
    let mut rng = csprng();
    segments(mask)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(c) => c,
            Segment::Class(class) => random_char(&mut rng, class.alphabet()),
        })
        .collect()
}

/// Number of characters a mask expands to.
pub fn mask_length(mask: &str) -> usize {
    segments(mask).len()
}

/// Number of distinct passwords a mask can produce.
///
/// Saturates at `u128::MAX`.
pub fn mask_keyspace(mask: &str) -> u128 {
    segments(mask).into_iter().fold(1u128, |acc, segment| {
        match segment {
            Segment::Literal(_) => acc,
            Segment::Class(class) => {
                acc.saturating_mul(class.alphabet().chars().count() as u128)
            }
        }
    })
}
