//! Identity representation: canonical field encoding, leaf hash and claim key.

use ff::PrimeField as _;
use pasta_curves::pallas;
use zkdrop_core::base::IdentityKey;

use crate::hash::hash_pair;
use crate::node::FieldNode;

/// Domain tag separating claim keys from identity hashes.
const NULLIFIER_DOMAIN_TAG: &[u8; 16] = b"zkdrop:nullifier";

/// An eligible participant, identified by its public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account(IdentityKey);

impl Account {
    /// Wrap an identity key.
    #[must_use]
    pub const fn new(key: IdentityKey) -> Self {
        Self(key)
    }

    /// The wrapped identity key.
    #[must_use]
    pub const fn key(&self) -> IdentityKey {
        self.0
    }

    /// Canonical field encoding: the key bytes as two little-endian 128-bit halves.
    ///
    /// Every 128-bit value is below the field modulus, so the encoding is total.
    #[must_use]
    pub fn to_fields(&self) -> [pallas::Base; 2] {
        let bytes = self.0.to_bytes();
        let mut lo = [0_u8; 16];
        let mut hi = [0_u8; 16];
        #[allow(
            clippy::indexing_slicing,
            reason = "A 32-byte key splits into two 16-byte halves"
        )]
        {
            lo.copy_from_slice(&bytes[..16]);
            hi.copy_from_slice(&bytes[16..]);
        }
        [
            pallas::Base::from_u128(u128::from_le_bytes(lo)),
            pallas::Base::from_u128(u128::from_le_bytes(hi)),
        ]
    }

    /// Identity hash, the value stored at the identity's membership leaf.
    #[must_use]
    pub fn hash(&self) -> pallas::Base {
        let [lo, hi] = self.to_fields();
        hash_pair(lo, hi)
    }

    /// The membership tree leaf for this identity.
    #[must_use]
    pub fn leaf(&self) -> FieldNode {
        FieldNode::new(self.hash())
    }

    /// Key of this identity's flag in the nullifier map.
    #[must_use]
    pub fn claim_key(&self) -> pallas::Base {
        let domain = pallas::Base::from_u128(u128::from_le_bytes(*NULLIFIER_DOMAIN_TAG));
        hash_pair(domain, self.hash())
    }
}

impl From<IdentityKey> for Account {
    fn from(key: IdentityKey) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_splits_key_halves() {
        let mut bytes = [0_u8; 32];
        bytes[0] = 1;
        bytes[16] = 2;
        let [lo, hi] = Account::new(IdentityKey::new(bytes)).to_fields();
        assert_eq!(lo, pallas::Base::from(1_u64));
        assert_eq!(hi, pallas::Base::from(2_u64));
    }

    #[test]
    fn hash_and_claim_key_are_deterministic_and_distinct() {
        let alice = Account::new(IdentityKey::new([1_u8; 32]));
        let bob = Account::new(IdentityKey::new([2_u8; 32]));

        assert_eq!(alice.hash(), Account::new(IdentityKey::new([1_u8; 32])).hash());
        assert_ne!(alice.hash(), bob.hash());
        assert_ne!(alice.claim_key(), bob.claim_key());
        assert_ne!(alice.claim_key(), alice.hash());
    }
}
