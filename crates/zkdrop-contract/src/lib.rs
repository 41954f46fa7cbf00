//! On-chain side of the ZKDROP airdrop.
//!
//! The contract stores roots and counters only. Every operation runs inside a
//! [`Transaction`] that records what it read and stages what it writes; the
//! resulting [`StateUpdate`] is applied to [`AirdropState`] all at once, or not
//! at all.

pub mod auth;
mod claim;
mod contract;
mod error;
mod instance;
mod membership;
mod nullifier;
mod state;
mod token;
mod transaction;

pub use contract::AirdropContract;
pub use error::ContractError;
pub use instance::Airdrop;
pub use state::{AirdropState, Slot, SlotValue};
pub use transaction::{StateUpdate, Transaction};
pub use zkdrop_tree::ClaimFlag;
