//! Sparse trees agree with a dense reference, and witnesses track root changes.

#![allow(
    missing_docs,
    clippy::indexing_slicing,
    reason = "Test code builds fixtures by direct indexing"
)]

use incrementalmerkletree::{Hashable, Level};
use pasta_curves::pallas;
use zkdrop_core::base::IdentityKey;
use zkdrop_tree::{
    Account, ClaimFlag, FieldNode, MEMBERSHIP_TREE_CAPACITY, MEMBERSHIP_TREE_DEPTH,
    MembershipTree, MembershipWitness, NullifierMap, NullifierWitness,
};

fn identity(v: u8) -> IdentityKey {
    let mut bytes = [0_u8; 32];
    bytes[0] = v;
    bytes[31] = v;
    IdentityKey::new(bytes)
}

/// Level-by-level root over every leaf of the membership tree.
fn dense_root(leaves: &[FieldNode]) -> FieldNode {
    let mut level_nodes = leaves.to_vec();
    level_nodes.resize(MEMBERSHIP_TREE_CAPACITY, FieldNode::empty_leaf());
    for level in 0..MEMBERSHIP_TREE_DEPTH {
        level_nodes = level_nodes
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => FieldNode::combine(Level::from(level), left, right),
                _ => unreachable!("level widths are powers of two"),
            })
            .collect();
    }
    level_nodes.first().copied().expect("one root remains")
}

#[test]
fn sparse_membership_matches_dense() {
    let identities: Vec<IdentityKey> = (1..=5).map(identity).collect();
    let tree = MembershipTree::from_identities(&identities).expect("tree should build");

    let leaves: Vec<FieldNode> = identities
        .iter()
        .map(|id| Account::new(*id).leaf())
        .collect();
    assert_eq!(tree.root(), dense_root(&leaves));
}

#[test]
fn membership_witness_survives_serialization() {
    let identities: Vec<IdentityKey> = (1..=3).map(identity).collect();
    let tree = MembershipTree::from_identities(&identities).expect("tree should build");

    let witness = tree.witness_for(&identity(2)).expect("witness should build");
    let data = witness.to_data();
    assert_eq!(data.position, 1);
    assert_eq!(data.siblings.len(), usize::from(MEMBERSHIP_TREE_DEPTH));

    let decoded = MembershipWitness::try_from(&data).expect("witness should decode");
    assert_eq!(decoded, witness);
    assert_eq!(
        decoded.calculate_root(Account::new(identity(2)).leaf()),
        tree.root()
    );
}

#[test]
fn claim_key_witness_flips_root_to_claimed() {
    let mut map = NullifierMap::new();
    let alice = Account::new(identity(1));
    let bob = Account::new(identity(2));
    map.set(bob.claim_key(), ClaimFlag::Claimed);

    let before = map.root();
    let data = map
        .witness(alice.claim_key())
        .expect("witness should build")
        .to_data();
    let witness = NullifierWitness::try_from(&data).expect("witness should decode");

    let (root, key) = witness.compute_root_and_key(ClaimFlag::Unclaimed.to_field());
    assert_eq!(root, before);
    assert_eq!(key, alice.claim_key());

    let (after, _) = witness.compute_root_and_key(ClaimFlag::Claimed.to_field());
    map.set(alice.claim_key(), ClaimFlag::Claimed);
    assert_eq!(map.root(), after);

    // The stale witness no longer proves the key unclaimed.
    let (stale, _) = witness.compute_root_and_key(ClaimFlag::Unclaimed.to_field());
    assert_ne!(stale, map.root());
}

#[test]
fn claimed_flag_is_not_unclaimed_under_same_path() {
    let mut map = NullifierMap::new();
    let key = pallas::Base::from(77_u64);
    map.set(key, ClaimFlag::Claimed);

    let witness = map.witness(key).expect("witness should build");
    let (claimed_root, _) = witness.compute_root_and_key(ClaimFlag::Claimed.to_field());
    let (unclaimed_root, _) = witness.compute_root_and_key(ClaimFlag::Unclaimed.to_field());
    assert_eq!(claimed_root, map.root());
    assert_ne!(unclaimed_root, map.root());
}
