//! Read-assert-then-write transactions.

use std::collections::BTreeMap;

use pasta_curves::pallas;
use zkdrop_core::base::IdentityKey;

use crate::state::{AirdropState, Slot, SlotValue};

/// Values staged by a transaction, assigned only after every precondition holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StagedWrites {
    pub(crate) identifier: Option<pallas::Base>,
    pub(crate) commitment: Option<pallas::Base>,
    pub(crate) nullifiers: Option<pallas::Base>,
    pub(crate) total_supply: Option<u64>,
    pub(crate) balances: BTreeMap<IdentityKey, u64>,
}

/// Outcome of a built transaction: what it read and what it wants to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    preconditions: BTreeMap<Slot, SlotValue>,
    writes: StagedWrites,
}

impl StateUpdate {
    /// Slots the transaction read, with the value each must still hold.
    pub fn preconditions(&self) -> impl Iterator<Item = (&Slot, &SlotValue)> {
        self.preconditions.iter()
    }

    /// Whether applying the update writes nothing.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.writes == StagedWrites::default()
    }

    pub(crate) fn into_writes(self) -> StagedWrites {
        self.writes
    }
}

/// A transaction under construction against a view of the state.
///
/// Reads go through the transaction so each one is recorded as an equality
/// precondition. A slot already written by the transaction reads back the staged
/// value.
///
/// Writes are staged only by contract methods, which enforce membership,
/// nullifier and signature checks first. Callers outside the crate can read
/// but never stage a raw slot write:
///
/// ```compile_fail
/// use pasta_curves::pallas;
/// use zkdrop_contract::{AirdropState, Transaction};
///
/// let state = AirdropState::deployed();
/// let mut tx = Transaction::new(&state);
/// tx.set_nullifiers(pallas::Base::from(1_u64));
/// ```
///
/// ```compile_fail
/// use zkdrop_contract::{AirdropState, Transaction};
/// use zkdrop_core::base::IdentityKey;
///
/// let state = AirdropState::deployed();
/// let mut tx = Transaction::new(&state);
/// tx.set_balance(IdentityKey::new([1_u8; 32]), u64::MAX);
/// ```
#[derive(Debug)]
pub struct Transaction<'s> {
    view: &'s AirdropState,
    update: StateUpdate,
}

impl<'s> Transaction<'s> {
    /// Start a transaction against `view`.
    #[must_use]
    pub fn new(view: &'s AirdropState) -> Self {
        Self {
            view,
            update: StateUpdate::default(),
        }
    }

    fn observe(&mut self, slot: Slot, value: SlotValue) {
        self.update.preconditions.entry(slot).or_insert(value);
    }

    /// Read the identifier slot.
    pub fn identifier(&mut self) -> pallas::Base {
        if let Some(staged) = self.update.writes.identifier {
            return staged;
        }
        let value = self.view.identifier();
        self.observe(Slot::Identifier, SlotValue::Field(value));
        value
    }

    /// Read the membership commitment.
    pub fn commitment(&mut self) -> pallas::Base {
        if let Some(staged) = self.update.writes.commitment {
            return staged;
        }
        let value = self.view.commitment();
        self.observe(Slot::Commitment, SlotValue::Field(value));
        value
    }

    /// Read the nullifier root.
    pub fn nullifiers(&mut self) -> pallas::Base {
        if let Some(staged) = self.update.writes.nullifiers {
            return staged;
        }
        let value = self.view.nullifiers();
        self.observe(Slot::Nullifiers, SlotValue::Field(value));
        value
    }

    /// Read the total supply.
    pub fn total_supply(&mut self) -> u64 {
        if let Some(staged) = self.update.writes.total_supply {
            return staged;
        }
        let value = self.view.total_supply();
        self.observe(Slot::TotalSupply, SlotValue::Amount(value));
        value
    }

    /// Read the balance of `account`.
    pub fn balance(&mut self, account: &IdentityKey) -> u64 {
        if let Some(staged) = self.update.writes.balances.get(account) {
            return *staged;
        }
        let value = self.view.balance(account);
        self.observe(Slot::Balance(*account), SlotValue::Amount(value));
        value
    }

    /// Stage a new identifier.
    pub(crate) const fn set_identifier(&mut self, value: pallas::Base) {
        self.update.writes.identifier = Some(value);
    }

    /// Stage a new membership commitment.
    pub(crate) const fn set_commitment(&mut self, value: pallas::Base) {
        self.update.writes.commitment = Some(value);
    }

    /// Stage a new nullifier root.
    pub(crate) const fn set_nullifiers(&mut self, value: pallas::Base) {
        self.update.writes.nullifiers = Some(value);
    }

    /// Stage a new total supply.
    pub(crate) const fn set_total_supply(&mut self, value: u64) {
        self.update.writes.total_supply = Some(value);
    }

    /// Stage a new balance for `account`.
    pub(crate) fn set_balance(&mut self, account: IdentityKey, amount: u64) {
        self.update.writes.balances.insert(account, amount);
    }

    /// Finish the transaction.
    #[must_use]
    pub fn into_update(self) -> StateUpdate {
        self.update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    #[test]
    fn reads_become_preconditions() {
        let state = AirdropState::deployed();
        let mut tx = Transaction::new(&state);
        let root = tx.nullifiers();
        let _ = tx.total_supply();
        let update = tx.into_update();

        let preconditions: Vec<_> = update.preconditions().collect();
        assert_eq!(
            preconditions,
            vec![
                (&Slot::Nullifiers, &SlotValue::Field(root)),
                (&Slot::TotalSupply, &SlotValue::Amount(0)),
            ]
        );
        assert!(update.is_read_only());
    }

    #[test]
    fn staged_write_is_read_back_without_precondition() {
        let state = AirdropState::deployed();
        let mut tx = Transaction::new(&state);
        tx.set_commitment(pallas::Base::from(5_u64));
        assert_eq!(tx.commitment(), pallas::Base::from(5_u64));

        let update = tx.into_update();
        assert_eq!(update.preconditions().count(), 0);
        assert!(!update.is_read_only());
    }

    #[test]
    fn stale_read_rejects_whole_update() {
        let mut state = AirdropState::deployed();

        let mut stale = Transaction::new(&state);
        assert_eq!(stale.total_supply(), 0);
        stale.set_total_supply(10);
        stale.set_commitment(pallas::Base::from(1_u64));
        let stale = stale.into_update();

        let mut racing = Transaction::new(&state);
        racing.set_total_supply(3);
        let racing = racing.into_update();
        state.apply(racing).expect("blind write should apply");

        assert_eq!(
            state.apply(stale),
            Err(ContractError::StaleStateMismatch {
                slot: Slot::TotalSupply
            })
        );
        assert_eq!(state.total_supply(), 3);
        assert_eq!(state.commitment(), pallas::Base::from(0_u64));
    }
}
