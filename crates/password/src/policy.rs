//! Password policies and policy enforcement.
//!
//! A policy is a minimum length plus a list of character
//! classes; a candidate satisfies the policy when it contains
//! at least one character from every required class.
use crate::{generate_password, CharClass, Error, Result};
use std::{fmt, str::FromStr};

/// Maximum number of candidates generated before
/// giving up on a policy.
pub const MAX_ATTEMPTS: usize = 100;

/// Minimum length and required character classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Minimum password length.
    pub min_length: usize,
    /// Classes that must each appear at least once.
    pub require: Vec<CharClass>,
}

impl Policy {
    /// Lowercase, uppercase and digits with
    /// a minimum length of 12.
    pub fn nist() -> Self {
        Self {
            min_length: 12,
            require: vec![
                CharClass::Lower,
                CharClass::Upper,
                CharClass::Digit,
            ],
        }
    }

    /// Every character class with a minimum length of 14.
    pub fn strict() -> Self {
        Self {
            min_length: 14,
            require: vec![
                CharClass::Lower,
                CharClass::Upper,
                CharClass::Digit,
                CharClass::Symbol,
            ],
        }
    }

    /// No requirements.
    pub fn none() -> Self {
        Self {
            min_length: 1,
            require: Vec::new(),
        }
    }

    /// Determine if a password satisfies this policy's
    /// character requirements.
    ///
    /// Length is not considered; callers warn about short
    /// lengths before generating.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        ensure_policy(password, &self.require)
    }
}

/// Built-in policy names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// NIST style policy.
    Nist,
    /// Strict corporate policy.
    #[default]
    Strict,
    /// No policy.
    None,
}

impl PolicyKind {
    /// Policy for this kind.
    pub fn policy(&self) -> Policy {
        match self {
            PolicyKind::Nist => Policy::nist(),
            PolicyKind::Strict => Policy::strict(),
            PolicyKind::None => Policy::none(),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PolicyKind::Nist => "nist",
                PolicyKind::Strict => "strict",
                PolicyKind::None => "none",
            }
        )
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "nist" => Ok(PolicyKind::Nist),
            "strict" => Ok(PolicyKind::Strict),
            "none" => Ok(PolicyKind::None),
            _ => Err(format!("unknown policy {}", s)),
        }
    }
}

/// Check that `password` contains at least one character
/// from each class in `require`.
pub fn ensure_policy(password: &str, require: &[CharClass]) -> bool {
    require
        .iter()
        .all(|class| password.chars().any(|c| class.contains(c)))
}

/// Generate a password that satisfies `policy`.
///
/// Candidates are rerolled up to [MAX_ATTEMPTS] times.
pub fn generate_with_policy(
    length: usize,
    pool: &str,
    policy: &Policy,
) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let password = generate_password(length, pool)?;
        if policy.is_satisfied_by(&password) {
            return Ok(password);
        }
    }
    Err(Error::PolicyExhausted(MAX_ATTEMPTS))
}
