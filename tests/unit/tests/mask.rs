use passforge_password::{
    generate_mask,
    mask::{mask_keyspace, mask_length},
    SYMBOLS,
};

#[test]
fn mask_lower_digits() {
    for _ in 0..100 {
        let password = generate_mask("?l?l?d?d");
        let chars: Vec<char> = password.chars().collect();
        assert_eq!(4, chars.len());
        assert!(chars[0].is_ascii_lowercase());
        assert!(chars[1].is_ascii_lowercase());
        assert!(chars[2].is_ascii_digit());
        assert!(chars[3].is_ascii_digit());
    }
}

#[test]
fn mask_literal_preserved() {
    for _ in 0..100 {
        let password = generate_mask("?l-?d");
        let chars: Vec<char> = password.chars().collect();
        assert_eq!(3, chars.len());
        assert!(chars[0].is_ascii_lowercase());
        assert_eq!('-', chars[1]);
        assert!(chars[2].is_ascii_digit());
    }
}

#[test]
fn mask_upper_symbol() {
    for _ in 0..100 {
        let password = generate_mask("?u?s");
        let chars: Vec<char> = password.chars().collect();
        assert_eq!(2, chars.len());
        assert!(chars[0].is_ascii_uppercase());
        assert!(SYMBOLS.contains(chars[1]));
    }
}

#[test]
fn mask_unknown_tokens_are_literal() {
    assert_eq!("?x", generate_mask("?x"));
    assert_eq!("abc?", generate_mask("abc?"));
    assert_eq!("", generate_mask(""));
    assert_eq!("pässwörd", generate_mask("pässwörd"));

    let password = generate_mask("??d");
    let chars: Vec<char> = password.chars().collect();
    assert_eq!(2, chars.len());
    assert_eq!('?', chars[0]);
    assert!(chars[1].is_ascii_digit());
}

#[test]
fn mask_statistics() {
    assert_eq!(4, mask_length("?l?l?d?d"));
    assert_eq!(3, mask_length("?l-?d"));
    assert_eq!(26 * 26 * 100, mask_keyspace("?l?l?d?d"));
}
