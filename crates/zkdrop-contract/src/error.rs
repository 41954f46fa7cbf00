use thiserror::Error;
use zkdrop_tree::TreeError;

use crate::state::Slot;

/// Reasons a transaction is rejected. Every variant aborts the whole transaction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContractError {
    /// A slot read by the transaction changed before it was applied.
    #[error("State slot {slot} changed since it was read")]
    StaleStateMismatch {
        /// The slot whose value moved.
        slot: Slot,
    },

    /// The membership witness does not lead to the stored commitment.
    #[error("Membership witness does not match the stored commitment")]
    MembershipProofInvalid,

    /// The nullifier witness is for a key other than the identity's claim key.
    #[error("Nullifier witness key does not belong to the claiming identity")]
    NullifierKeyMismatch,

    /// The identity's claim flag is already set.
    #[error("Identity has already claimed")]
    AlreadyClaimed,

    /// The nullifier witness leads to neither the claimed nor the unclaimed root.
    #[error("Nullifier witness does not match the stored nullifier root")]
    NullifierRootMismatch,

    /// Missing or invalid admin signature.
    #[error("Admin signature verification failed")]
    SignatureInvalid,

    /// The sender cannot cover the transfer.
    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Sender balance.
        available: u64,
        /// Transfer amount.
        requested: u64,
    },

    /// Minting would overflow the total supply.
    #[error("Total supply would overflow")]
    SupplyOverflow,

    /// Malformed witness or state encoding.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
