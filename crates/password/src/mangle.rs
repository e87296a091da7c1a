//! Word mangling rules used to build guessing wordlists.
use crate::csprng;
use indexmap::IndexSet;
use rand::Rng;

/// Leetspeak substitutions in the order they are applied
/// when generating variants.
pub const LEET_MAP: &[(char, char)] = &[
    ('a', '@'),
    ('o', '0'),
    ('i', '1'),
    ('e', '3'),
    ('s', '$'),
    ('t', '7'),
];

/// Exclusive upper bound for numeric suffixes.
pub const SUFFIX_LIMIT: u32 = 1000;

fn leet_char(c: char) -> Option<char> {
    let lower = c.to_ascii_lowercase();
    LEET_MAP
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| *to)
}

/// Substitute every leetspeak candidate in a word,
/// ignoring case.
pub fn leet(word: &str) -> String {
    word.chars().map(|c| leet_char(c).unwrap_or(c)).collect()
}

/// Single substitution leetspeak variants of a word.
///
/// Yields the word followed by, for each substitution whose
/// letter appears in the word, the word with the lowercase
/// letter replaced and the word with the uppercase letter
/// replaced. Duplicates are removed keeping the first.
pub fn leet_variants(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    let mut variants = IndexSet::new();
    variants.insert(word.to_owned());
    for (from, to) in LEET_MAP {
        if lower.contains(*from) {
            let to = to.to_string();
            variants.insert(word.replace(*from, &to));
            variants.insert(word.replace(from.to_ascii_uppercase(), &to));
        }
    }
    variants.into_iter().collect()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Uppercase every letter that follows a non-letter and
/// lowercase all other letters.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_cased = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }
    out
}

/// Reverse the characters of a word.
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// Case variants of a word: original, lower, upper
/// and title case.
///
/// Variants may repeat; callers deduplicate.
pub fn case_variants(word: &str) -> [String; 4] {
    [
        word.to_owned(),
        word.to_lowercase(),
        word.to_uppercase(),
        title_case(word),
    ]
}

/// Append a random number below [SUFFIX_LIMIT] to a word.
pub fn numeric_suffix(word: &str) -> String {
    let suffix = csprng().gen_range(0..SUFFIX_LIMIT);
    format!("{}{}", word, suffix)
}
