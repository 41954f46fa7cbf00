//! Minimal single-asset token ledger.

use tracing::debug;
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;

use crate::auth::AuthMessage;
use crate::contract::AirdropContract;
use crate::error::ContractError;
use crate::transaction::Transaction;

impl AirdropContract<'_> {
    /// Issue `amount` tokens to `recipient` under an admin signature.
    ///
    /// # Errors
    /// Returns [`ContractError::SignatureInvalid`] for a bad signature, or
    /// [`ContractError::SupplyOverflow`] if the supply would overflow.
    pub fn mint(
        &self,
        tx: &mut Transaction<'_>,
        recipient: IdentityKey,
        amount: u64,
        signature: &[u8; SIGNATURE_SIZE],
    ) -> Result<(), ContractError> {
        self.authorize(&AuthMessage::Mint { recipient, amount }, signature)?;
        self.credit(tx, recipient, amount)?;
        debug!(%recipient, amount, "Staged mint");
        Ok(())
    }

    /// Stage `amount` new tokens on `recipient`, raising the supply with it.
    ///
    /// Callers authorize the issuance first.
    #[allow(
        clippy::unused_self,
        reason = "Every contract method shares the contract receiver"
    )]
    pub(crate) fn credit(
        &self,
        tx: &mut Transaction<'_>,
        recipient: IdentityKey,
        amount: u64,
    ) -> Result<(), ContractError> {
        let new_supply = tx
            .total_supply()
            .checked_add(amount)
            .ok_or(ContractError::SupplyOverflow)?;
        // Every balance is bounded by the supply.
        let new_balance = tx
            .balance(&recipient)
            .checked_add(amount)
            .ok_or(ContractError::SupplyOverflow)?;

        tx.set_balance(recipient, new_balance);
        tx.set_total_supply(new_supply);
        Ok(())
    }

    /// Move `amount` tokens from `sender` to `recipient`.
    ///
    /// # Errors
    /// Returns [`ContractError::InsufficientBalance`] if `sender` cannot cover
    /// `amount`.
    #[allow(
        clippy::unused_self,
        reason = "Every contract method shares the contract receiver"
    )]
    pub fn send_tokens(
        &self,
        tx: &mut Transaction<'_>,
        sender: IdentityKey,
        recipient: IdentityKey,
        amount: u64,
    ) -> Result<(), ContractError> {
        let available = tx.balance(&sender);
        let remaining = available
            .checked_sub(amount)
            .ok_or(ContractError::InsufficientBalance {
                available,
                requested: amount,
            })?;
        if sender == recipient {
            return Ok(());
        }

        let received = tx
            .balance(&recipient)
            .checked_add(amount)
            .ok_or(ContractError::SupplyOverflow)?;

        tx.set_balance(sender, remaining);
        tx.set_balance(recipient, received);
        debug!(%sender, %recipient, amount, "Staged transfer");
        Ok(())
    }
}
