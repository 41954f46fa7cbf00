//! Off-chain nullifier map: claim key to claimed flag.

use ff::Field as _;
use pasta_curves::pallas;
use zkdrop_core::base::FieldRepr;

use crate::core::TreeError;
use crate::hash::{field_from_repr, field_to_repr};
use crate::node::{FieldNode, NULLIFIER_MAP_DEPTH};
use crate::sparse::{PathKey, SparseTree};
use crate::witness::NullifierWitness;

/// Claimed/unclaimed flag stored at a nullifier map leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimFlag {
    /// Leaf value 0.
    Unclaimed,
    /// Leaf value 1.
    Claimed,
}

impl ClaimFlag {
    /// Field encoding of the flag.
    #[must_use]
    pub const fn to_field(self) -> pallas::Base {
        match self {
            Self::Unclaimed => pallas::Base::ZERO,
            Self::Claimed => pallas::Base::ONE,
        }
    }
}

/// Full sparse nullifier map, kept in sync with the on-chain nullifier root.
#[derive(Debug, Clone)]
pub struct NullifierMap {
    inner: SparseTree,
}

impl Default for NullifierMap {
    fn default() -> Self {
        Self::new()
    }
}

fn path(key: pallas::Base) -> PathKey {
    PathKey::new(field_to_repr(key).to_bytes())
}

impl NullifierMap {
    /// Create a map with every flag unclaimed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: SparseTree::new(NULLIFIER_MAP_DEPTH),
        }
    }

    /// Root of the map with every flag unclaimed.
    #[must_use]
    pub fn empty_root() -> FieldNode {
        Self::new().root()
    }

    /// Rebuild a map from the keys already claimed.
    ///
    /// # Errors
    /// Returns an error if a key is not a canonical field element.
    pub fn from_claimed_keys<'a, I>(keys: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = &'a FieldRepr>,
    {
        let mut map = Self::new();
        for key in keys {
            map.set(field_from_repr(*key, "claimed key")?, ClaimFlag::Claimed);
        }
        Ok(map)
    }

    /// Flag stored at `key`.
    #[must_use]
    pub fn get(&self, key: pallas::Base) -> ClaimFlag {
        if self.inner.get(&path(key)) == FieldNode::ZERO {
            ClaimFlag::Unclaimed
        } else {
            ClaimFlag::Claimed
        }
    }

    /// Store a flag at `key`.
    pub fn set(&mut self, key: pallas::Base, flag: ClaimFlag) {
        self.inner.insert(path(key), FieldNode::new(flag.to_field()));
    }

    /// Claimed keys, in map order.
    #[must_use]
    pub fn claimed_keys(&self) -> Vec<FieldRepr> {
        self.inner
            .keys()
            .map(|key| FieldRepr::new(key.to_bytes()))
            .collect()
    }

    /// Current root, the value committed on-chain.
    #[must_use]
    pub fn root(&self) -> FieldNode {
        self.inner.root()
    }

    /// Authentication path for `key`.
    ///
    /// # Errors
    /// Returns an error if the path does not span the map depth.
    pub fn witness(&self, key: pallas::Base) -> Result<NullifierWitness, TreeError> {
        NullifierWitness::new(key, self.inner.siblings(&path(key)))
    }
}
