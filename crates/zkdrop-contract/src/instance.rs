//! A deployed contract instance: configuration plus live state.
//!
//! [`Airdrop::prepare`] builds a transaction against the current state without
//! applying it; [`Airdrop::submit`] applies a prepared update. A prepared update
//! goes stale when another update touching one of the slots it read lands first.

use pasta_curves::pallas;
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::config::AirdropConfiguration;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;
use zkdrop_tree::{Account, ClaimFlag, MembershipWitness, NullifierWitness};

use crate::contract::AirdropContract;
use crate::error::ContractError;
use crate::state::AirdropState;
use crate::transaction::{StateUpdate, Transaction};

/// A deployed airdrop contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airdrop {
    config: AirdropConfiguration,
    state: AirdropState,
}

impl Airdrop {
    /// Deploy a fresh contract.
    #[must_use]
    pub fn deploy(config: AirdropConfiguration) -> Self {
        Self {
            config,
            state: AirdropState::deployed(),
        }
    }

    /// Resume a contract from persisted state.
    #[must_use]
    pub const fn from_parts(config: AirdropConfiguration, state: AirdropState) -> Self {
        Self { config, state }
    }

    /// Deployment configuration.
    #[must_use]
    pub const fn config(&self) -> &AirdropConfiguration {
        &self.config
    }

    /// Live state.
    #[must_use]
    pub const fn state(&self) -> &AirdropState {
        &self.state
    }

    /// Build a transaction with `method` against the current state.
    ///
    /// # Errors
    /// Returns the error raised by `method`.
    pub fn prepare<T, F>(&self, method: F) -> Result<(T, StateUpdate), ContractError>
    where
        F: FnOnce(&AirdropContract<'_>, &mut Transaction<'_>) -> Result<T, ContractError>,
    {
        let contract = AirdropContract::new(&self.config);
        let mut tx = Transaction::new(&self.state);
        let output = method(&contract, &mut tx)?;
        Ok((output, tx.into_update()))
    }

    /// Apply a prepared update.
    ///
    /// # Errors
    /// Returns [`ContractError::StaleStateMismatch`] if a slot it read has moved.
    pub fn submit(&mut self, update: StateUpdate) -> Result<(), ContractError> {
        self.state.apply(update)
    }

    /// Build and apply a transaction in one step.
    ///
    /// # Errors
    /// Returns the error raised by `method`; the state is then unchanged.
    pub fn execute<T, F>(&mut self, method: F) -> Result<T, ContractError>
    where
        F: FnOnce(&AirdropContract<'_>, &mut Transaction<'_>) -> Result<T, ContractError>,
    {
        let (output, update) = self.prepare(method)?;
        self.submit(update)?;
        Ok(output)
    }

    /// See [`AirdropContract::set_commitment`].
    ///
    /// # Errors
    /// Returns an error if authorization fails.
    pub fn set_commitment(
        &mut self,
        root: pallas::Base,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
    ) -> Result<(), ContractError> {
        self.execute(|contract, tx| contract.set_commitment(tx, root, signature))
    }

    /// See [`AirdropContract::add_human_identifier`].
    ///
    /// # Errors
    /// Returns an error if authorization fails.
    pub fn add_human_identifier(
        &mut self,
        identifier: pallas::Base,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
    ) -> Result<(), ContractError> {
        self.execute(|contract, tx| contract.add_human_identifier(tx, identifier, signature))
    }

    /// See [`AirdropContract::check_human_identifier_inclusion`].
    ///
    /// # Errors
    /// Returns an error only if the state moves while the check runs.
    pub fn check_human_identifier_inclusion(
        &mut self,
        account: &Account,
        witness: &NullifierWitness,
    ) -> Result<pallas::Base, ContractError> {
        self.execute(|contract, tx| {
            Ok(contract.check_human_identifier_inclusion(tx, account, witness))
        })
    }

    /// See [`AirdropContract::check_set_inclusion`].
    ///
    /// # Errors
    /// Returns an error if `account` is not included under the stored commitment.
    pub fn check_set_inclusion(
        &mut self,
        account: &Account,
        witness: &MembershipWitness,
    ) -> Result<(), ContractError> {
        self.execute(|contract, tx| contract.check_set_inclusion(tx, account, witness))
    }

    /// See [`AirdropContract::check_claimed`].
    ///
    /// # Errors
    /// Returns an error if the witness is for another key or is stale.
    pub fn check_claimed(
        &mut self,
        account: &Account,
        witness: &NullifierWitness,
    ) -> Result<(ClaimFlag, pallas::Base), ContractError> {
        self.execute(|contract, tx| contract.check_claimed(tx, account, witness))
    }

    /// See [`AirdropContract::claim`].
    ///
    /// # Errors
    /// Returns the first failing claim step; the state is then unchanged.
    pub fn claim(
        &mut self,
        account: &Account,
        membership: &MembershipWitness,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
        nullifier: &NullifierWitness,
    ) -> Result<(), ContractError> {
        self.execute(|contract, tx| contract.claim(tx, account, membership, signature, nullifier))
    }

    /// See [`AirdropContract::mint`].
    ///
    /// # Errors
    /// Returns an error if the signature is invalid or the supply overflows.
    pub fn mint(
        &mut self,
        recipient: IdentityKey,
        amount: u64,
        signature: &[u8; SIGNATURE_SIZE],
    ) -> Result<(), ContractError> {
        self.execute(|contract, tx| contract.mint(tx, recipient, amount, signature))
    }

    /// See [`AirdropContract::send_tokens`].
    ///
    /// # Errors
    /// Returns an error if `sender` cannot cover `amount`.
    pub fn send_tokens(
        &mut self,
        sender: IdentityKey,
        recipient: IdentityKey,
        amount: u64,
    ) -> Result<(), ContractError> {
        self.execute(|contract, tx| contract.send_tokens(tx, sender, recipient, amount))
    }
}
