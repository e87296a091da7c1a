use passforge_password::{
    build_pool, entropy_bits, generate_password, CharClass, Error, DIGITS,
    LOWERCASE, SYMBOLS, UPPERCASE,
};

#[test]
fn random_password_length_and_pool() {
    let pool = build_pool(true, true, true, true);
    for length in [1, 8, 16, 64] {
        for _ in 0..100 {
            let password = generate_password(length, &pool).unwrap();
            assert_eq!(length, password.chars().count());
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }
}

#[test]
fn random_password_single_class() {
    let pool = build_pool(false, false, true, false);
    assert_eq!(DIGITS, pool);
    let password = generate_password(32, &pool).unwrap();
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn random_password_invalid_length() {
    let pool = build_pool(true, true, true, true);
    assert!(matches!(
        generate_password(0, &pool),
        Err(Error::InvalidLength)
    ));
}

#[test]
fn random_password_empty_pool() {
    let pool = build_pool(false, false, false, false);
    assert!(pool.is_empty());
    assert!(matches!(generate_password(16, &pool), Err(Error::EmptyPool)));
}

#[test]
fn pool_order() {
    let pool = build_pool(true, true, true, true);
    assert_eq!(format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}"), pool);

    let pool = build_pool(false, true, false, true);
    assert_eq!(format!("{LOWERCASE}{SYMBOLS}"), pool);
}

#[test]
fn char_class_membership() {
    assert!(CharClass::Lower.contains('q'));
    assert!(!CharClass::Lower.contains('Q'));
    assert!(CharClass::Upper.contains('Q'));
    assert!(CharClass::Digit.contains('7'));
    assert!(CharClass::Symbol.contains('@'));
    assert!(!CharClass::Symbol.contains('a'));
}

#[test]
fn entropy_estimate() {
    assert_eq!(0.0, entropy_bits(16, 0));
    assert_eq!(16.0, entropy_bits(4, 16));
    let bits = entropy_bits(16, 26);
    assert!((bits - 75.207).abs() < 0.01);
}
