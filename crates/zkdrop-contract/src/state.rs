//! Persisted contract state.

use std::collections::BTreeMap;
use std::fmt;

use ff::Field as _;
use pasta_curves::pallas;
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::state::{BalanceEntry, ContractStateSnapshot};
use zkdrop_tree::{NullifierMap, field_from_repr, field_to_repr};

use crate::error::ContractError;
use crate::transaction::StateUpdate;

/// A persisted value a transaction can read and guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// Auxiliary identity-set commitment.
    Identifier,
    /// Membership tree root.
    Commitment,
    /// Nullifier map root.
    Nullifiers,
    /// Total tokens minted.
    TotalSupply,
    /// Token balance of one account.
    Balance(IdentityKey),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => f.write_str("identifier"),
            Self::Commitment => f.write_str("commitment"),
            Self::Nullifiers => f.write_str("nullifiers"),
            Self::TotalSupply => f.write_str("total_supply"),
            Self::Balance(account) => write!(f, "balance of {account}"),
        }
    }
}

/// Value held by a [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValue {
    /// A root or commitment.
    Field(pallas::Base),
    /// A token amount.
    Amount(u64),
}

/// The contract's global state: three field slots, the supply counter and the
/// token ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropState {
    identifier: pallas::Base,
    commitment: pallas::Base,
    nullifiers: pallas::Base,
    total_supply: u64,
    balances: BTreeMap<IdentityKey, u64>,
}

impl Default for AirdropState {
    fn default() -> Self {
        Self::deployed()
    }
}

impl AirdropState {
    /// State right after deployment.
    ///
    /// The nullifier slot starts at the root of the all-unclaimed map, so the
    /// first claim of any identity finds its before-state in place. No account
    /// is funded: tokens exist only once minted.
    #[must_use]
    pub fn deployed() -> Self {
        Self {
            identifier: pallas::Base::ZERO,
            commitment: pallas::Base::ZERO,
            nullifiers: NullifierMap::empty_root().inner(),
            total_supply: 0,
            balances: BTreeMap::new(),
        }
    }

    /// Auxiliary identity-set commitment.
    #[must_use]
    pub const fn identifier(&self) -> pallas::Base {
        self.identifier
    }

    /// Membership tree root.
    #[must_use]
    pub const fn commitment(&self) -> pallas::Base {
        self.commitment
    }

    /// Nullifier map root.
    #[must_use]
    pub const fn nullifiers(&self) -> pallas::Base {
        self.nullifiers
    }

    /// Total tokens minted.
    #[must_use]
    pub const fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Token balance of `account`.
    #[must_use]
    pub fn balance(&self, account: &IdentityKey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Current value of `slot`.
    #[must_use]
    pub fn read(&self, slot: Slot) -> SlotValue {
        match slot {
            Slot::Identifier => SlotValue::Field(self.identifier),
            Slot::Commitment => SlotValue::Field(self.commitment),
            Slot::Nullifiers => SlotValue::Field(self.nullifiers),
            Slot::TotalSupply => SlotValue::Amount(self.total_supply),
            Slot::Balance(account) => SlotValue::Amount(self.balance(&account)),
        }
    }

    /// Apply a transaction's staged writes.
    ///
    /// Every slot the transaction read must still hold the value it saw. If any
    /// does not, nothing is written.
    ///
    /// # Errors
    /// Returns [`ContractError::StaleStateMismatch`] naming the first moved slot.
    pub fn apply(&mut self, update: StateUpdate) -> Result<(), ContractError> {
        for (slot, expected) in update.preconditions() {
            if self.read(*slot) != *expected {
                return Err(ContractError::StaleStateMismatch { slot: *slot });
            }
        }

        let writes = update.into_writes();
        if let Some(identifier) = writes.identifier {
            self.identifier = identifier;
        }
        if let Some(commitment) = writes.commitment {
            self.commitment = commitment;
        }
        if let Some(nullifiers) = writes.nullifiers {
            self.nullifiers = nullifiers;
        }
        if let Some(total_supply) = writes.total_supply {
            self.total_supply = total_supply;
        }
        for (account, amount) in writes.balances {
            if amount == 0 {
                self.balances.remove(&account);
            } else {
                self.balances.insert(account, amount);
            }
        }
        Ok(())
    }

    /// Serializable form.
    #[must_use]
    pub fn to_snapshot(&self) -> ContractStateSnapshot {
        ContractStateSnapshot {
            identifier: field_to_repr(self.identifier),
            commitment: field_to_repr(self.commitment),
            nullifiers: field_to_repr(self.nullifiers),
            total_supply: self.total_supply,
            balances: self
                .balances
                .iter()
                .map(|(account, amount)| BalanceEntry {
                    account: *account,
                    amount: *amount,
                })
                .collect(),
        }
    }
}

impl TryFrom<&ContractStateSnapshot> for AirdropState {
    type Error = ContractError;

    fn try_from(snapshot: &ContractStateSnapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            identifier: field_from_repr(snapshot.identifier, "identifier")?,
            commitment: field_from_repr(snapshot.commitment, "commitment")?,
            nullifiers: field_from_repr(snapshot.nullifiers, "nullifiers")?,
            total_supply: snapshot.total_supply,
            balances: snapshot
                .balances
                .iter()
                .filter(|entry| entry.amount > 0)
                .map(|entry| (entry.account, entry.amount))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use zkdrop_core::base::FieldRepr;
    use zkdrop_tree::TreeError;

    use super::*;
    use crate::transaction::Transaction;

    #[test]
    fn deployed_state_starts_with_empty_nullifier_map() {
        let state = AirdropState::deployed();
        assert_eq!(state.commitment(), pallas::Base::ZERO);
        assert_eq!(state.nullifiers(), NullifierMap::empty_root().inner());
        assert_eq!(state.total_supply(), 0);
    }

    #[test]
    fn deployment_funds_no_account() {
        let state = AirdropState::deployed();
        assert!(state.balances.is_empty());
        assert!(state.to_snapshot().balances.is_empty());
        assert_eq!(state.total_supply(), 0);
    }

    #[test]
    fn snapshot_roundtrip_keeps_balances() {
        let account = IdentityKey::new([4_u8; 32]);
        let mut state = AirdropState::deployed();
        let mut tx = Transaction::new(&state);
        tx.set_balance(account, 25);
        tx.set_total_supply(25);
        let update = tx.into_update();
        state.apply(update).expect("update should apply");

        let snapshot = state.to_snapshot();
        assert_eq!(snapshot.balances.len(), 1);
        assert_eq!(AirdropState::try_from(&snapshot), Ok(state));
    }

    #[test]
    fn snapshot_rejects_non_canonical_root() {
        let mut snapshot = AirdropState::deployed().to_snapshot();
        snapshot.commitment = FieldRepr::new([0xff; 32]);
        assert_eq!(
            AirdropState::try_from(&snapshot),
            Err(ContractError::Tree(TreeError::NonCanonicalField(
                "commitment"
            )))
        );
    }

    #[test]
    fn zero_balance_is_dropped() {
        let account = IdentityKey::new([9_u8; 32]);
        let mut state = AirdropState::deployed();

        let mut tx = Transaction::new(&state);
        tx.set_balance(account, 3);
        let update = tx.into_update();
        state.apply(update).expect("update should apply");

        let mut tx = Transaction::new(&state);
        tx.set_balance(account, 0);
        let update = tx.into_update();
        state.apply(update).expect("update should apply");

        assert!(state.to_snapshot().balances.is_empty());
    }

    #[test]
    fn slot_display_names_balance_owner() {
        let account = IdentityKey::new([1_u8; 32]);
        assert_eq!(Slot::Nullifiers.to_string(), "nullifiers");
        assert_eq!(
            Slot::Balance(account).to_string(),
            format!("balance of {account}")
        );
    }
}
