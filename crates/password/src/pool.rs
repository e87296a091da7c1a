//! Character classes and pool construction.
use crate::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

/// Class of characters a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Lowercase ASCII letters.
    Lower,
    /// Uppercase ASCII letters.
    Upper,
    /// Numerical digits.
    Digit,
    /// Punctuation symbols.
    Symbol,
}

impl CharClass {
    /// All character classes in pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Alphabet for this class.
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Determine if a character belongs to this class.
    pub fn contains(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Resolve the class for a mask token character.
    pub fn from_mask_token(token: char) -> Option<Self> {
        match token {
            'l' => Some(CharClass::Lower),
            'u' => Some(CharClass::Upper),
            'd' => Some(CharClass::Digit),
            's' => Some(CharClass::Symbol),
            _ => None,
        }
    }
}

/// Build a character pool from the enabled classes.
///
/// Classes are appended in the order upper, lower,
/// digits then symbols; when every flag is false the
/// pool is empty.
pub fn build_pool(
    use_upper: bool,
    use_lower: bool,
    use_digits: bool,
    use_symbols: bool,
) -> String {
    let enabled = [use_upper, use_lower, use_digits, use_symbols];
    CharClass::ALL
        .iter()
        .zip(enabled)
        .filter(|(_, on)| *on)
        .map(|(class, _)| class.alphabet())
        .collect()
}
