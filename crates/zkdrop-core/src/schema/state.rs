use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::base::{FieldRepr, IdentityKey};

/// Persisted contract state.
///
/// Only roots and counters are stored; full trees live with off-chain maintainers.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ContractStateSnapshot {
    /// Auxiliary identity-set commitment.
    pub identifier: FieldRepr,
    /// Membership tree root.
    pub commitment: FieldRepr,
    /// Nullifier map root.
    pub nullifiers: FieldRepr,
    /// Total tokens minted.
    pub total_supply: u64,
    /// Non-zero token balances, sorted by account.
    #[serde(default)]
    pub balances: Vec<BalanceEntry>,
}

/// Token balance of one account.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct BalanceEntry {
    /// Account holding the balance.
    pub account: IdentityKey,
    /// Balance amount.
    pub amount: u64,
}
