//! Public identity of an airdrop participant.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use super::utils::{ParseHexError, parse_hex_array};

/// Size of an encoded identity key in bytes.
pub const IDENTITY_KEY_SIZE: usize = 32;

/// An opaque 32-byte public key identifying a participant.
///
/// Keys produced by this workspace are RedJubjub spend-auth verification keys, but
/// any 32 bytes form a valid identity for membership and nullifier purposes.
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
pub struct IdentityKey(
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    [u8; IDENTITY_KEY_SIZE],
);

impl IdentityKey {
    /// Create an identity from raw key bytes.
    #[must_use]
    pub const fn new(bytes: [u8; IDENTITY_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the underlying key bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; IDENTITY_KEY_SIZE] {
        self.0
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for IdentityKey {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_array(s).map(Self)
    }
}

impl From<[u8; IDENTITY_KEY_SIZE]> for IdentityKey {
    fn from(bytes: [u8; IDENTITY_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<IdentityKey> for [u8; IDENTITY_KEY_SIZE] {
    fn from(key: IdentityKey) -> Self {
        key.0
    }
}

impl AsRef<[u8; IDENTITY_KEY_SIZE]> for IdentityKey {
    fn as_ref(&self) -> &[u8; IDENTITY_KEY_SIZE] {
        &self.0
    }
}
