//! Message digests of generated candidates.
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Hex encoded digests of a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digests {
    /// MD5 digest.
    pub md5: String,
    /// SHA-1 digest.
    pub sha1: String,
    /// SHA-256 digest.
    pub sha256: String,
}

impl Digests {
    /// Compute the digests of the UTF-8 bytes of `value`.
    pub fn compute(value: &str) -> Self {
        let bytes = value.as_bytes();
        Self {
            md5: hex::encode(Md5::digest(bytes)),
            sha1: hex::encode(Sha1::digest(bytes)),
            sha256: hex::encode(Sha256::digest(bytes)),
        }
    }
}
