//! Word combinations built from personal data.
use crate::{
    csprng,
    mangle::{capitalize, case_variants, leet, reverse},
    Error, Result,
};
use indexmap::IndexSet;
use rand::seq::SliceRandom;

/// Maximum number of words accepted by [permutations].
///
/// Five words produce 325 permutations.
pub const MAX_COMBINE_WORDS: usize = 5;

/// The four standard combinations of name, nickname
/// and date of birth.
pub fn build_combos(name: &str, nick: &str, dob: &str) -> [String; 4] {
    [
        format!("{}{}", name, dob),
        format!("{}{}", nick, dob),
        format!("{}{}", name, nick),
        format!("{}{}{}", name, nick, dob),
    ]
}

/// Every non-empty ordered permutation of the non-empty
/// input words, concatenated and deduplicated.
pub fn permutations<S: AsRef<str>>(words: &[S]) -> Result<IndexSet<String>> {
    let words: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty())
        .collect();

    if words.len() > MAX_COMBINE_WORDS {
        return Err(Error::TooManyWords {
            max: MAX_COMBINE_WORDS,
            actual: words.len(),
        });
    }

    let mut combos = IndexSet::new();
    let mut used = vec![false; words.len()];
    let mut current = Vec::with_capacity(words.len());
    for size in 1..=words.len() {
        arrange(&words, size, &mut used, &mut current, &mut combos);
    }
    Ok(combos)
}

fn arrange<'a>(
    words: &[&'a str],
    size: usize,
    used: &mut [bool],
    current: &mut Vec<&'a str>,
    combos: &mut IndexSet<String>,
) {
    if current.len() == size {
        combos.insert(current.concat());
        return;
    }
    for index in 0..words.len() {
        if used[index] {
            continue;
        }
        used[index] = true;
        current.push(words[index]);
        arrange(words, size, used, current, combos);
        current.pop();
        used[index] = false;
    }
}

/// Permutations of the words expanded with lowercase,
/// uppercase and capitalized variants in random order.
pub fn combine_randomized<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>> {
    let mut variants = IndexSet::new();
    for combo in permutations(words)? {
        variants.insert(combo.to_lowercase());
        variants.insert(combo.to_uppercase());
        variants.insert(capitalize(&combo));
    }
    let mut output: Vec<String> = variants.into_iter().collect();
    output.shuffle(&mut csprng());
    Ok(output)
}

/// Mangling applied to every profile combination.
#[derive(Debug, Default, Clone, Copy)]
pub struct MangleOptions {
    /// Apply leetspeak substitutions.
    pub leet: bool,
    /// Reverse the result.
    pub reverse: bool,
}

/// Wordlist for a profile of name, nickname and birthdate.
///
/// Spaces are removed from the inputs, each standard
/// combination is expanded into its case variants and the
/// mangling options are applied, leetspeak first. The
/// result keeps the order of first occurrence.
pub fn profile_wordlist(
    name: &str,
    nick: &str,
    dob: &str,
    options: MangleOptions,
) -> Vec<String> {
    let name = name.replace(' ', "");
    let nick = nick.replace(' ', "");
    let dob = dob.replace(' ', "");

    let mut output = IndexSet::new();
    for combo in build_combos(&name, &nick, &dob) {
        for variant in case_variants(&combo) {
            let mut word = variant;
            if options.leet {
                word = leet(&word);
            }
            if options.reverse {
                word = reverse(&word);
            }
            output.insert(word);
        }
    }
    output.into_iter().collect()
}
