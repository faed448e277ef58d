//! Type-safe tag identifier.
//!
//! [`TagId`] wraps the raw identifier byte sequence a tag reports during
//! anti-collision. The canonical textual form is uppercase hexadecimal;
//! that form is the key into the mapping file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a proximity tag.
///
/// Compared by exact byte equality. [`fmt::Display`] renders the canonical
/// uppercase-hex form used as the mapping-file key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(Vec<u8>);

impl TagId {
    /// Creates a `TagId` from the raw identifier bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Parses a `TagId` from a hexadecimal string (either case).
    ///
    /// Returns `None` for empty, odd-length, or non-hex input.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.is_empty() || s.len() % 2 != 0 {
            return None;
        }
        let mut bytes = Vec::with_capacity(s.len() / 2);
        for pair in s.as_bytes().chunks(2) {
            let digits = std::str::from_utf8(pair).ok()?;
            bytes.push(u8::from_str_radix(digits, 16).ok()?);
        }
        Some(Self(bytes))
    }

    /// Returns the raw identifier bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase_hex() {
        let id = TagId::from_bytes(&[0x04, 0xA2, 0x24, 0xB2]);
        assert_eq!(id.to_string(), "04A224B2");
    }

    #[test]
    fn from_hex_accepts_either_case() {
        let Some(lower) = TagId::from_hex("04a224b2") else {
            panic!("lowercase hex should parse");
        };
        let Some(upper) = TagId::from_hex("04A224B2") else {
            panic!("uppercase hex should parse");
        };
        assert_eq!(lower, upper);
        assert_eq!(lower.as_bytes(), &[0x04, 0xA2, 0x24, 0xB2]);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(TagId::from_hex("").is_none());
        assert!(TagId::from_hex("ABC").is_none());
        assert!(TagId::from_hex("ZZ").is_none());
    }

    #[test]
    fn hex_round_trip() {
        let id = TagId::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(TagId::from_hex(&id.to_string()), Some(id));
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = TagId::from_bytes(&[1, 2, 3]);
        let mut map = HashMap::new();
        map.insert(id.clone(), "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
