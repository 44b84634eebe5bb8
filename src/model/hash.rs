//! Hash algorithms and per-entity hash dictionaries.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash algorithm types known to any CycloneDX version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HashAlgorithm {
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
    #[serde(rename = "SHA3-256")]
    Sha3_256,
    #[serde(rename = "SHA3-384")]
    Sha3_384,
    #[serde(rename = "SHA3-512")]
    Sha3_512,
    #[serde(rename = "BLAKE2b-256")]
    Blake2b256,
    #[serde(rename = "BLAKE2b-384")]
    Blake2b384,
    #[serde(rename = "BLAKE2b-512")]
    Blake2b512,
    #[serde(rename = "BLAKE3")]
    Blake3,
}

impl HashAlgorithm {
    /// Every algorithm known to any version
    pub const ALL: [Self; 12] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Blake2b256,
        Self::Blake2b384,
        Self::Blake2b512,
        Self::Blake3,
    ];

    /// Name as it appears in CycloneDX documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b256 => "BLAKE2b-256",
            Self::Blake2b384 => "BLAKE2b-384",
            Self::Blake2b512 => "BLAKE2b-512",
            Self::Blake3 => "BLAKE3",
        }
    }

    /// Hex digest lengths accepted for this algorithm.
    ///
    /// BLAKE3 has a variable output length, so any of the common widths is
    /// accepted.
    #[must_use]
    pub const fn digest_hex_lengths(self) -> &'static [usize] {
        match self {
            Self::Md5 => &[32],
            Self::Sha1 => &[40],
            Self::Sha256 | Self::Sha3_256 | Self::Blake2b256 => &[64],
            Self::Sha384 | Self::Sha3_384 | Self::Blake2b384 => &[96],
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => &[128],
            Self::Blake3 => &[32, 40, 64, 96, 128],
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (algorithm, content) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hash {
    pub algorithm: HashAlgorithm,
    /// Hex encoded digest
    pub content: String,
}

impl Hash {
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, content: impl Into<String>) -> Self {
        Self {
            algorithm,
            content: content.into(),
        }
    }
}

/// Insertion-ordered map of algorithm to digest content.
///
/// Setting an algorithm that is already present replaces its content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashDictionary {
    entries: IndexMap<HashAlgorithm, String>,
}

impl HashDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content for an algorithm
    pub fn set(&mut self, algorithm: HashAlgorithm, content: impl Into<String>) {
        self.entries.insert(algorithm, content.into());
    }

    /// Builder-style variant of [`HashDictionary::set`]
    #[must_use]
    pub fn with(mut self, algorithm: HashAlgorithm, content: impl Into<String>) -> Self {
        self.set(algorithm, content);
        self
    }

    #[must_use]
    pub fn get(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.entries.get(&algorithm).map(String::as_str)
    }

    /// Iterate the pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Hash> + '_ {
        self.entries
            .iter()
            .map(|(algorithm, content)| Hash::new(*algorithm, content.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Hash> for HashDictionary {
    fn from_iter<I: IntoIterator<Item = Hash>>(iter: I) -> Self {
        let mut dict = Self::new();
        for hash in iter {
            dict.set(hash.algorithm, hash.content);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let dict = HashDictionary::new()
            .with(HashAlgorithm::Md5, "a")
            .with(HashAlgorithm::Sha1, "b")
            .with(HashAlgorithm::Md5, "c");

        let pairs: Vec<_> = dict.iter().collect();
        assert_eq!(
            pairs,
            vec![
                Hash::new(HashAlgorithm::Md5, "c"),
                Hash::new(HashAlgorithm::Sha1, "b")
            ]
        );
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(HashAlgorithm::Blake2b256.to_string(), "BLAKE2b-256");
        assert_eq!(HashAlgorithm::Sha3_384.as_str(), "SHA3-384");
        assert_eq!(
            serde_json::to_string(&HashAlgorithm::Sha1).unwrap(),
            "\"SHA-1\""
        );
    }
}
