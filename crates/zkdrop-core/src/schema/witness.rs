use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::base::{FieldRepr, IdentityKey};

/// Authentication path of a leaf in the membership tree.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct MembershipWitnessData {
    /// Leaf position. Bit `i` gives the orientation at level `i`.
    pub position: u64,
    /// Sibling nodes ordered from the leaf level upwards.
    pub siblings: Vec<FieldRepr>,
}

/// Authentication path of a key in the nullifier map.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct NullifierWitnessData {
    /// Map key the path leads to.
    pub key: FieldRepr,
    /// Sibling nodes ordered from the leaf level upwards.
    pub siblings: Vec<FieldRepr>,
}

/// Witnesses an identity needs to claim, as produced by the off-chain registry.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct PreparedClaim {
    /// Claiming identity.
    pub identity: IdentityKey,
    /// Membership tree root the witness was built against.
    pub membership_root: FieldRepr,
    /// Inclusion witness for the identity.
    pub membership: MembershipWitnessData,
    /// Nullifier map root the witness was built against.
    pub nullifier_root: FieldRepr,
    /// Nullifier map witness for the identity's claim key.
    pub nullifier: NullifierWitnessData,
}
