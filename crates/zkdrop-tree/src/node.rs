//! Tree node type shared by the membership tree and the nullifier map.
//!
//! This module implements the `Hashable` trait from `incrementalmerkletree` with
//! Poseidon over the Pallas base field, so every root and path stays
//! arithmetic-circuit friendly. The level is not mixed into the hash: a node is
//! `Poseidon(left, right)` at every height.

#![allow(clippy::indexing_slicing, reason = "Allow indexing for clarity")]

use std::sync::LazyLock;

use ff::Field as _;
use incrementalmerkletree::{Hashable, Level};
use pasta_curves::pallas;
use zkdrop_core::base::FieldRepr;

use crate::hash::{field_to_repr, hash_pair};

/// The depth of the membership tree.
pub const MEMBERSHIP_TREE_DEPTH: u8 = 8;

/// Number of leaves in the membership tree.
pub const MEMBERSHIP_TREE_CAPACITY: usize = 1 << MEMBERSHIP_TREE_DEPTH;

/// The depth of the nullifier map: one level per bit of a canonical field element.
pub const NULLIFIER_MAP_DEPTH: u8 = 255;

/// A node in either tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldNode(pallas::Base);

impl FieldNode {
    /// The zero node.
    pub const ZERO: Self = Self(pallas::Base::ZERO);

    /// Wrap a field element.
    #[must_use]
    pub const fn new(value: pallas::Base) -> Self {
        Self(value)
    }

    /// Get the underlying field element.
    #[must_use]
    pub const fn inner(self) -> pallas::Base {
        self.0
    }

    /// Encode the node.
    #[must_use]
    pub fn to_repr(self) -> FieldRepr {
        field_to_repr(self.0)
    }
}

impl From<pallas::Base> for FieldNode {
    fn from(value: pallas::Base) -> Self {
        Self(value)
    }
}

impl From<FieldNode> for pallas::Base {
    fn from(node: FieldNode) -> Self {
        node.0
    }
}

impl Hashable for FieldNode {
    /// Empty leaves (unregistered slots, unclaimed keys) are zero.
    fn empty_leaf() -> Self {
        Self::ZERO
    }

    fn combine(_level: Level, lhs: &Self, rhs: &Self) -> Self {
        Self(hash_pair(lhs.0, rhs.0))
    }

    fn empty_root(level: Level) -> Self {
        #[allow(
            clippy::indexing_slicing,
            reason = "The table holds one entry per u8 level"
        )]
        EMPTY_ROOTS[usize::from(u8::from(level))]
    }
}

/// Pre-computed empty roots for each level, up to the nullifier map depth.
static EMPTY_ROOTS: LazyLock<Vec<FieldNode>> = LazyLock::new(|| {
    let mut roots = vec![FieldNode::empty_leaf()];
    for depth in 0..NULLIFIER_MAP_DEPTH {
        let prev = roots[usize::from(depth)];
        let next = FieldNode::combine(Level::from(depth), &prev, &prev);
        roots.push(next);
    }
    roots
});
