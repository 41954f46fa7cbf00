//! Membership tree and nullifier map utilities.
//!
//! The full structures in this crate are maintained off-chain. The contract only
//! ever sees their roots and the witnesses produced here.

mod account;
mod core;
mod hash;
mod membership;
mod node;
mod nullifier_map;
mod sparse;
mod witness;

pub use account::Account;
pub use core::TreeError;
pub use hash::{field_from_repr, field_to_repr, hash_pair};
pub use membership::MembershipTree;
pub use node::{FieldNode, MEMBERSHIP_TREE_CAPACITY, MEMBERSHIP_TREE_DEPTH, NULLIFIER_MAP_DEPTH};
pub use nullifier_map::{ClaimFlag, NullifierMap};
pub use witness::{MembershipWitness, NullifierWitness};
