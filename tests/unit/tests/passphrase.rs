use anyhow::Result;
use passforge_password::{
    passphrase::{
        generate_passphrase, read_wordlist, DEFAULT_NUM_WORDS, DEFAULT_WORDS,
    },
    Error,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn passphrase_default_words() -> Result<()> {
    let passphrase =
        generate_passphrase(DEFAULT_WORDS, DEFAULT_NUM_WORDS, " ")?;
    let parts: Vec<&str> = passphrase.split(' ').collect();
    assert_eq!(DEFAULT_NUM_WORDS, parts.len());
    assert!(parts.iter().all(|part| DEFAULT_WORDS.contains(part)));
    Ok(())
}

#[test]
fn passphrase_separator() -> Result<()> {
    let passphrase = generate_passphrase(&["word"], 3, "-")?;
    assert_eq!("word-word-word", passphrase);
    Ok(())
}

#[test]
fn passphrase_errors() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        generate_passphrase(&empty, 4, " "),
        Err(Error::EmptyWordList)
    ));
    assert!(matches!(
        generate_passphrase(DEFAULT_WORDS, 0, " "),
        Err(Error::InvalidLength)
    ));
}

#[test]
fn passphrase_read_wordlist() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "  alpha  ")?;
    writeln!(file)?;
    writeln!(file, "bravo")?;
    writeln!(file, "   ")?;
    writeln!(file, "charlie")?;
    file.flush()?;

    let words = read_wordlist(file.path())?;
    assert_eq!(vec!["alpha", "bravo", "charlie"], words);
    Ok(())
}
