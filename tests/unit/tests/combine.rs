use passforge_password::{
    combine::{
        build_combos, combine_randomized, permutations, profile_wordlist,
        MangleOptions, MAX_COMBINE_WORDS,
    },
    Error,
};
use std::collections::HashSet;

#[test]
fn combine_two_words() {
    let combos = permutations(&["a", "b"]).unwrap();
    let expected: HashSet<&str> = ["a", "b", "ab", "ba"].into_iter().collect();
    let actual: HashSet<&str> = combos.iter().map(|c| c.as_str()).collect();
    assert_eq!(expected, actual);
}

#[test]
fn combine_randomized_case_variants() {
    let combos = combine_randomized(&["a", "b"]).unwrap();
    let actual: HashSet<&str> = combos.iter().map(|c| c.as_str()).collect();
    assert_eq!(combos.len(), actual.len());

    let expected: HashSet<&str> =
        ["a", "b", "ab", "ba", "A", "B", "AB", "BA", "Ab", "Ba"]
            .into_iter()
            .collect();
    assert_eq!(expected, actual);
}

#[test]
fn combine_permutation_count() {
    let words = ["andi", "12031995", "ace", "x", "y"];
    let combos = permutations(&words).unwrap();
    assert_eq!(325, combos.len());
}

#[test]
fn combine_deduplicates() {
    let combos = permutations(&["a", "a"]).unwrap();
    assert_eq!(2, combos.len());
    assert!(combos.contains("a"));
    assert!(combos.contains("aa"));
}

#[test]
fn combine_skips_empty_words() {
    let combos = permutations(&["andi", "", "ace"]).unwrap();
    assert_eq!(4, combos.len());
    assert!(combos.contains("andiace"));
    assert!(combos.contains("aceandi"));

    let combos = permutations::<&str>(&[]).unwrap();
    assert!(combos.is_empty());
}

#[test]
fn combine_too_many_words() {
    let words = vec!["w"; MAX_COMBINE_WORDS + 1];
    match permutations(&words) {
        Err(Error::TooManyWords { max, actual }) => {
            assert_eq!(MAX_COMBINE_WORDS, max);
            assert_eq!(MAX_COMBINE_WORDS + 1, actual);
        }
        _ => panic!("expecting too many words error"),
    }
}

#[test]
fn standard_combos() {
    assert_eq!(
        [
            "andi1995".to_owned(),
            "ace1995".to_owned(),
            "andiace".to_owned(),
            "andiace1995".to_owned(),
        ],
        build_combos("andi", "ace", "1995")
    );
}

#[test]
fn profile_wordlist_case_variants() {
    let words = profile_wordlist(
        "ken reinhart",
        "Kent",
        "1990",
        MangleOptions::default(),
    );
    assert_eq!(14, words.len());
    assert_eq!("kenreinhart1990", words[0]);
    assert!(words.contains(&"KENREINHART1990".to_owned()));
    assert!(words.contains(&"Kenreinhartkent1990".to_owned()));
    assert!(words.contains(&"kent1990".to_owned()));

    let unique: HashSet<&String> = words.iter().collect();
    assert_eq!(words.len(), unique.len());
}

#[test]
fn profile_wordlist_leet_then_reverse() {
    let words = profile_wordlist(
        "ken reinhart",
        "Kent",
        "1990",
        MangleOptions {
            leet: true,
            reverse: false,
        },
    );
    assert_eq!("k3nr31nh@r71990", words[0]);

    let words = profile_wordlist(
        "ken reinhart",
        "Kent",
        "1990",
        MangleOptions {
            leet: true,
            reverse: true,
        },
    );
    assert_eq!("09917r@hn13rn3k", words[0]);
}
