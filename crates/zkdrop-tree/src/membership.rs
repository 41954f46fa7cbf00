//! Off-chain membership tree over identity hashes.

use std::collections::BTreeMap;

use zkdrop_core::base::IdentityKey;

use crate::account::Account;
use crate::core::TreeError;
use crate::node::{FieldNode, MEMBERSHIP_TREE_CAPACITY, MEMBERSHIP_TREE_DEPTH};
use crate::sparse::{PathKey, SparseTree};
use crate::witness::MembershipWitness;

/// Full depth-8 membership tree, kept by the registry operator.
#[derive(Debug, Clone)]
pub struct MembershipTree {
    inner: SparseTree,
    positions: BTreeMap<IdentityKey, u64>,
}

impl Default for MembershipTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MembershipTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: SparseTree::new(MEMBERSHIP_TREE_DEPTH),
            positions: BTreeMap::new(),
        }
    }

    /// Build a tree with `identities[i]` at leaf `i`.
    ///
    /// # Errors
    /// Returns an error if there are more identities than leaves or an identity
    /// repeats.
    pub fn from_identities(identities: &[IdentityKey]) -> Result<Self, TreeError> {
        if identities.len() > MEMBERSHIP_TREE_CAPACITY {
            return Err(TreeError::TreeFull(identities.len()));
        }
        let mut tree = Self::new();
        for (position, identity) in (0_u64..).zip(identities) {
            tree.insert(position, *identity)?;
        }
        Ok(tree)
    }

    /// Register `identity` at `position`, replacing whatever identity was there.
    ///
    /// # Errors
    /// Returns an error if the position is outside the tree or the identity is
    /// already registered at another position.
    pub fn insert(&mut self, position: u64, identity: IdentityKey) -> Result<(), TreeError> {
        check_position(position)?;
        if self
            .positions
            .get(&identity)
            .is_some_and(|existing| *existing != position)
        {
            return Err(TreeError::DuplicateIdentity(identity));
        }
        self.positions.retain(|_, p| *p != position);
        self.positions.insert(identity, position);
        self.inner
            .insert(PathKey::from_position(position), Account::new(identity).leaf());
        Ok(())
    }

    /// Overwrite a raw leaf value.
    ///
    /// Any identity registered at `position` is forgotten.
    ///
    /// # Errors
    /// Returns an error if the position is outside the tree.
    pub fn set_leaf(&mut self, position: u64, leaf: FieldNode) -> Result<(), TreeError> {
        check_position(position)?;
        self.positions.retain(|_, p| *p != position);
        self.inner.insert(PathKey::from_position(position), leaf);
        Ok(())
    }

    /// Leaf value at `position`.
    ///
    /// # Errors
    /// Returns an error if the position is outside the tree.
    pub fn leaf(&self, position: u64) -> Result<FieldNode, TreeError> {
        check_position(position)?;
        Ok(self.inner.get(&PathKey::from_position(position)))
    }

    /// Position of a registered identity.
    #[must_use]
    pub fn position_of(&self, identity: &IdentityKey) -> Option<u64> {
        self.positions.get(identity).copied()
    }

    /// Number of registered identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no identity is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current root, the value committed on-chain.
    #[must_use]
    pub fn root(&self) -> FieldNode {
        self.inner.root()
    }

    /// Authentication path for the leaf at `position`.
    ///
    /// # Errors
    /// Returns an error if the position is outside the tree.
    pub fn witness(&self, position: u64) -> Result<MembershipWitness, TreeError> {
        check_position(position)?;
        MembershipWitness::new(
            position,
            self.inner.siblings(&PathKey::from_position(position)),
        )
    }

    /// Authentication path for a registered identity.
    ///
    /// # Errors
    /// Returns an error if the identity is not registered.
    pub fn witness_for(&self, identity: &IdentityKey) -> Result<MembershipWitness, TreeError> {
        let position = self
            .position_of(identity)
            .ok_or(TreeError::UnknownIdentity(*identity))?;
        self.witness(position)
    }
}

fn check_position(position: u64) -> Result<(), TreeError> {
    match usize::try_from(position) {
        Ok(p) if p < MEMBERSHIP_TREE_CAPACITY => Ok(()),
        _ => Err(TreeError::PositionOutOfRange(position)),
    }
}
