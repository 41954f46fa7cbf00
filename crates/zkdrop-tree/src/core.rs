//! Shared error type for tree utilities.

use thiserror::Error;
use zkdrop_core::base::IdentityKey;

/// Errors that can occur when working with the membership tree or nullifier map.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// Bytes are not the canonical encoding of a field element.
    #[error("Non-canonical field element encoding for {0}")]
    NonCanonicalField(&'static str),

    /// A witness path does not have one sibling per tree level.
    #[error("Witness has {actual} siblings, expected {expected}")]
    WitnessLength {
        /// Tree depth.
        expected: usize,
        /// Supplied sibling count.
        actual: usize,
    },

    /// The leaf position lies outside the tree.
    #[error("Position {0} is outside the membership tree")]
    PositionOutOfRange(u64),

    /// More identities than the tree has leaves.
    #[error("{0} identities exceed the membership tree capacity")]
    TreeFull(usize),

    /// The same identity was registered twice.
    #[error("Identity {0} is registered more than once")]
    DuplicateIdentity(IdentityKey),

    /// The identity is not registered.
    #[error("Identity {0} is not registered")]
    UnknownIdentity(IdentityKey),
}
