//! Canonical byte encoding of a field element.
//!
//! Roots, identifiers and claim keys travel between crates and files as the
//! 32-byte little-endian encoding of a Pallas base field element. This crate does
//! not interpret the bytes; canonicity is checked where they are decoded into a
//! field element.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use super::utils::{ParseHexError, parse_hex_array};

/// Size of an encoded field element in bytes.
pub const FIELD_SIZE: usize = 32;

/// Little-endian encoding of a field element.
#[serde_as]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[repr(transparent)]
pub struct FieldRepr(
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    [u8; FIELD_SIZE],
);

impl FieldRepr {
    /// Encoding of the zero element.
    pub const ZERO: Self = Self([0_u8; FIELD_SIZE]);

    /// Create a new encoding from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; FIELD_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; FIELD_SIZE] {
        self.0
    }
}

impl std::fmt::Display for FieldRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldRepr {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_array(s).map(Self)
    }
}

impl From<[u8; FIELD_SIZE]> for FieldRepr {
    fn from(bytes: [u8; FIELD_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<FieldRepr> for [u8; FIELD_SIZE] {
    fn from(repr: FieldRepr) -> Self {
        repr.0
    }
}

impl AsRef<[u8; FIELD_SIZE]> for FieldRepr {
    fn as_ref(&self) -> &[u8; FIELD_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let mut bytes = [0_u8; FIELD_SIZE];
        bytes[0] = 0x01;
        bytes[31] = 0x2a;
        let repr = FieldRepr::new(bytes);

        let shown = repr.to_string();
        assert!(shown.starts_with("01"));
        assert!(shown.ends_with("2a"));
        assert_eq!(shown.parse::<FieldRepr>(), Ok(repr));
    }

    #[test]
    fn serializes_as_plain_hex() {
        let repr = FieldRepr::new([0xab; FIELD_SIZE]);
        let json = serde_json::to_string(&repr).expect("serialize");
        assert_eq!(json, format!("\"{}\"", "ab".repeat(FIELD_SIZE)));

        let decoded: FieldRepr = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, repr);
    }
}
