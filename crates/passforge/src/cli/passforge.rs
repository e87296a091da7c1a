use clap::{Parser, Subcommand};

use crate::{
    commands::{
        combine, corpo, hash, mangle, mask, passphrase, profile, random,
    },
    Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passforge {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate passwords that satisfy a corporate policy.
    Corpo(corpo::Args),
    /// Generate passwords from a mask pattern.
    ///
    /// Tokens ?l, ?u, ?d and ?s are replaced with a random
    /// lowercase letter, uppercase letter, digit or symbol;
    /// every other character is copied unchanged.
    Mask(mask::Args),
    /// Leetspeak variants of a word with numeric suffixes.
    Mangle(mangle::Args),
    /// Generate passphrases from a word list.
    Passphrase(passphrase::Args),
    /// Generate random passwords without a policy.
    Random(random::Args),
    /// Build a wordlist from a personal profile.
    Profile(profile::Args),
    /// Combine words in every order with case variants.
    Combine(combine::Args),
    /// Print the MD5, SHA1 and SHA256 digests of a word.
    Hash {
        /// Word to hash.
        word: String,
    },
}

pub fn run() -> Result<()> {
    let args = Passforge::parse();
    match args.cmd {
        Command::Corpo(args) => corpo::run(args)?,
        Command::Mask(args) => mask::run(args)?,
        Command::Mangle(args) => mangle::run(args)?,
        Command::Passphrase(args) => passphrase::run(args)?,
        Command::Random(args) => random::run(args)?,
        Command::Profile(args) => profile::run(args)?,
        Command::Combine(args) => combine::run(args)?,
        Command::Hash { word } => hash::run(word),
    }
    Ok(())
}
