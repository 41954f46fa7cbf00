//! Sparse fixed-depth Merkle tree engine.
//!
//! Only non-empty leaves are stored. A subtree without stored leaves hashes to the
//! precomputed empty root of its level, so a 255-level map with a handful of
//! entries costs `entries * depth` hashes per root.

#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Bit and level arithmetic is bounded by the tree depth"
)]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use incrementalmerkletree::{Hashable, Level};

use crate::node::FieldNode;

/// Leaf address: bit `i` of the little-endian bytes selects the branch at level `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PathKey([u8; 32]);

impl PathKey {
    pub(crate) const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub(crate) fn from_position(position: u64) -> Self {
        let mut bytes = [0_u8; 32];
        bytes[..8].copy_from_slice(&position.to_le_bytes());
        Self(bytes)
    }

    pub(crate) const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Whether the path goes right at `level`.
    pub(crate) fn bit(&self, level: u8) -> bool {
        (self.0[usize::from(level / 8)] >> (level % 8)) & 1 == 1
    }
}

// Ordered as big-endian integers, so that entries sharing the bits above a level
// are contiguous and split cleanly on that level's bit.
impl Ord for PathKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for PathKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SparseTree {
    depth: u8,
    leaves: BTreeMap<PathKey, FieldNode>,
}

impl SparseTree {
    pub(crate) const fn new(depth: u8) -> Self {
        Self {
            depth,
            leaves: BTreeMap::new(),
        }
    }

    /// Store a leaf. Writing the empty leaf removes the entry.
    pub(crate) fn insert(&mut self, key: PathKey, leaf: FieldNode) {
        if leaf == FieldNode::empty_leaf() {
            self.leaves.remove(&key);
        } else {
            self.leaves.insert(key, leaf);
        }
    }

    pub(crate) fn get(&self, key: &PathKey) -> FieldNode {
        self.leaves
            .get(key)
            .copied()
            .unwrap_or_else(FieldNode::empty_leaf)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &PathKey> {
        self.leaves.keys()
    }

    pub(crate) fn root(&self) -> FieldNode {
        subtree_root(self.depth, &self.entries())
    }

    /// Sibling nodes along the path to `key`, ordered from the leaf level upwards.
    pub(crate) fn siblings(&self, key: &PathKey) -> Vec<FieldNode> {
        let entries = self.entries();
        let mut siblings = vec![FieldNode::empty_leaf(); usize::from(self.depth)];
        let mut current = entries.as_slice();

        for level in (0..self.depth).rev() {
            let split = current.partition_point(|(k, _)| !k.bit(level));
            let (left, right) = current.split_at(split);
            let (sibling, next) = if key.bit(level) {
                (left, right)
            } else {
                (right, left)
            };
            siblings[usize::from(level)] = subtree_root(level, sibling);
            current = next;
        }
        siblings
    }

    fn entries(&self) -> Vec<(PathKey, FieldNode)> {
        self.leaves.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

/// Root of the subtree at `level` holding `entries`, which must be sorted and share
/// every bit at or above `level`.
fn subtree_root(level: u8, entries: &[(PathKey, FieldNode)]) -> FieldNode {
    if entries.is_empty() {
        return FieldNode::empty_root(Level::from(level));
    }
    if level == 0 {
        return entries[0].1;
    }
    let child = level - 1;
    let split = entries.partition_point(|(k, _)| !k.bit(child));
    let (left, right) = entries.split_at(split);
    FieldNode::combine(
        Level::from(child),
        &subtree_root(child, left),
        &subtree_root(child, right),
    )
}

/// Recompute a root from a leaf and its authentication path.
pub(crate) fn root_from_path(leaf: FieldNode, key: &PathKey, siblings: &[FieldNode]) -> FieldNode {
    siblings
        .iter()
        .zip(0_u8..)
        .fold(leaf, |node, (sibling, level)| {
            if key.bit(level) {
                FieldNode::combine(Level::from(level), sibling, &node)
            } else {
                FieldNode::combine(Level::from(level), &node, sibling)
            }
        })
}

#[cfg(test)]
mod tests {
    use pasta_curves::pallas;

    use super::*;

    fn node(v: u64) -> FieldNode {
        FieldNode::new(pallas::Base::from(v))
    }

    #[test]
    fn empty_tree_has_empty_root() {
        let tree = SparseTree::new(4);
        assert_eq!(tree.root(), FieldNode::empty_root(Level::from(4)));
    }

    #[test]
    fn root_matches_dense_computation() {
        let mut tree = SparseTree::new(2);
        tree.insert(PathKey::from_position(1), node(7));
        tree.insert(PathKey::from_position(2), node(9));

        let zero = FieldNode::empty_leaf();
        let left = FieldNode::combine(Level::from(0), &zero, &node(7));
        let right = FieldNode::combine(Level::from(0), &node(9), &zero);
        let expected = FieldNode::combine(Level::from(1), &left, &right);

        assert_eq!(tree.root(), expected);
    }

    #[test]
    fn siblings_recompute_root_for_every_position() {
        let mut tree = SparseTree::new(3);
        for (position, value) in [(0, 3), (5, 11), (6, 13)] {
            tree.insert(PathKey::from_position(position), node(value));
        }
        let root = tree.root();

        for position in 0..8 {
            let key = PathKey::from_position(position);
            let siblings = tree.siblings(&key);
            assert_eq!(root_from_path(tree.get(&key), &key, &siblings), root);
        }
    }

    #[test]
    fn inserting_empty_leaf_removes_entry() {
        let mut tree = SparseTree::new(3);
        let empty_root = tree.root();
        tree.insert(PathKey::from_position(4), node(1));
        assert_ne!(tree.root(), empty_root);

        tree.insert(PathKey::from_position(4), FieldNode::empty_leaf());
        assert_eq!(tree.root(), empty_root);
        assert_eq!(tree.keys().count(), 0);
    }

    #[test]
    fn ordering_is_big_endian() {
        let mut high = [0_u8; 32];
        high[31] = 1;
        let mut low = [0_u8; 32];
        low[0] = 0xff;
        assert!(PathKey::new(low) < PathKey::new(high));
    }
}
