//! Document identifiers in the storage engine's native format.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Length of a document identifier in hexadecimal characters.
pub const DOCUMENT_ID_LEN: usize = 24;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// An opaque key referencing a stored record: exactly 24 hexadecimal
/// characters, case-insensitive. Parsed identifiers are normalized to
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Returns whether `candidate` is a syntactically valid document
    /// identifier. Pure check, no storage access; used as a fast-fail
    /// guard before any existence check or storage call that takes an
    /// identifier from an untrusted source.
    pub fn is_valid(candidate: &str) -> bool {
        candidate.len() == DOCUMENT_ID_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse an untrusted string, returning `None` when the format is
    /// invalid.
    pub fn parse(candidate: &str) -> Option<Self> {
        Self::is_valid(candidate).then(|| Self(candidate.to_ascii_lowercase()))
    }

    /// Generate a fresh identifier: a 4-byte unix timestamp followed
    /// by 8 random bytes, hex-encoded.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&(Utc::now().timestamp() as u32).to_be_bytes());
        bytes[4..].copy_from_slice(&rand::random::<[u8; 8]>());

        let mut out = String::with_capacity(DOCUMENT_ID_LEN);
        for b in bytes {
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_char_hex() {
        assert!(DocumentId::is_valid("507f1f77bcf86cd799439011"));
        assert!(DocumentId::is_valid("507F1F77BCF86CD799439011")); // case-insensitive
    }

    #[test]
    fn rejects_wrong_length_or_alphabet() {
        assert!(!DocumentId::is_valid(""));
        assert!(!DocumentId::is_valid("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!DocumentId::is_valid("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!DocumentId::is_valid("507f1f77bcf86cd79943901g")); // non-hex
        assert!(!DocumentId::is_valid("not-an-identifier-at-all"));
    }

    #[test]
    fn parse_normalizes_to_lowercase() {
        let id = DocumentId::parse("507F1F77BCF86CD799439011").unwrap();
        assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn generated_ids_are_valid_and_distinct() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert!(DocumentId::is_valid(a.as_str()));
        assert!(DocumentId::is_valid(b.as_str()));
        assert_ne!(a, b);
    }
}
