//! Authentication paths and root recomputation.
//!
//! Witnesses are what a claimant submits; recomputing roots from them is the only
//! tree logic the contract runs.

use incrementalmerkletree::Position;
use pasta_curves::pallas;
use zkdrop_core::base::FieldRepr;
use zkdrop_core::schema::witness::{MembershipWitnessData, NullifierWitnessData};

use crate::core::TreeError;
use crate::hash::{field_from_repr, field_to_repr};
use crate::node::{FieldNode, MEMBERSHIP_TREE_CAPACITY, MEMBERSHIP_TREE_DEPTH, NULLIFIER_MAP_DEPTH};
use crate::sparse::{PathKey, root_from_path};

fn check_path_length(siblings: &[FieldNode], depth: u8) -> Result<(), TreeError> {
    let expected = usize::from(depth);
    if siblings.len() == expected {
        Ok(())
    } else {
        Err(TreeError::WitnessLength {
            expected,
            actual: siblings.len(),
        })
    }
}

fn decode_siblings(siblings: &[FieldRepr]) -> Result<Vec<FieldNode>, TreeError> {
    siblings
        .iter()
        .map(|repr| field_from_repr(*repr, "witness sibling").map(FieldNode::new))
        .collect()
}

/// Authentication path of a membership tree leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipWitness {
    position: Position,
    siblings: Vec<FieldNode>,
}

impl MembershipWitness {
    /// Create a witness for `position` from its sibling nodes (leaf level first).
    ///
    /// # Errors
    /// Returns an error if the position lies outside the tree or the path length is
    /// not the tree depth.
    pub fn new(position: u64, siblings: Vec<FieldNode>) -> Result<Self, TreeError> {
        let in_range = usize::try_from(position).is_ok_and(|p| p < MEMBERSHIP_TREE_CAPACITY);
        if !in_range {
            return Err(TreeError::PositionOutOfRange(position));
        }
        check_path_length(&siblings, MEMBERSHIP_TREE_DEPTH)?;
        Ok(Self {
            position: Position::from(position),
            siblings,
        })
    }

    /// Leaf position the path leads to.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position.into()
    }

    /// Recompute the tree root assuming `leaf` sits at this path's position.
    #[must_use]
    pub fn calculate_root(&self, leaf: FieldNode) -> FieldNode {
        root_from_path(
            leaf,
            &PathKey::from_position(self.position()),
            &self.siblings,
        )
    }

    /// Serializable form.
    #[must_use]
    pub fn to_data(&self) -> MembershipWitnessData {
        MembershipWitnessData {
            position: self.position(),
            siblings: self.siblings.iter().map(|node| node.to_repr()).collect(),
        }
    }
}

impl TryFrom<&MembershipWitnessData> for MembershipWitness {
    type Error = TreeError;

    fn try_from(data: &MembershipWitnessData) -> Result<Self, Self::Error> {
        Self::new(data.position, decode_siblings(&data.siblings)?)
    }
}

/// Authentication path of a nullifier map key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullifierWitness {
    key: pallas::Base,
    siblings: Vec<FieldNode>,
}

impl NullifierWitness {
    /// Create a witness for `key` from its sibling nodes (leaf level first).
    ///
    /// # Errors
    /// Returns an error if the path length is not the map depth.
    pub fn new(key: pallas::Base, siblings: Vec<FieldNode>) -> Result<Self, TreeError> {
        check_path_length(&siblings, NULLIFIER_MAP_DEPTH)?;
        Ok(Self { key, siblings })
    }

    /// Recompute the map root for leaf `value` at the witnessed key, and return the
    /// key the path encodes.
    #[must_use]
    pub fn compute_root_and_key(&self, value: pallas::Base) -> (FieldNode, pallas::Base) {
        let path = PathKey::new(field_to_repr(self.key).to_bytes());
        let root = root_from_path(FieldNode::new(value), &path, &self.siblings);
        (root, self.key)
    }

    /// Serializable form.
    #[must_use]
    pub fn to_data(&self) -> NullifierWitnessData {
        NullifierWitnessData {
            key: field_to_repr(self.key),
            siblings: self.siblings.iter().map(|node| node.to_repr()).collect(),
        }
    }
}

impl TryFrom<&NullifierWitnessData> for NullifierWitness {
    type Error = TreeError;

    fn try_from(data: &NullifierWitnessData) -> Result<Self, Self::Error> {
        Self::new(
            field_from_repr(data.key, "nullifier key")?,
            decode_siblings(&data.siblings)?,
        )
    }
}
