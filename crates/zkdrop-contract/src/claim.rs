//! The end-to-end claim: membership, nullifier and optional reward.

use tracing::info;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;
use zkdrop_tree::{Account, MembershipWitness, NullifierWitness};

use crate::auth::AuthMessage;
use crate::contract::AirdropContract;
use crate::error::ContractError;
use crate::transaction::Transaction;

impl AirdropContract<'_> {
    /// Run the full claim for `account`.
    ///
    /// Membership is checked first, then the nullifier flag moves from unclaimed to
    /// claimed. When the deployment carries a claim reward, `signature` must be an
    /// admin [`AuthMessage::ClaimReward`] of the reward to `account`, and the
    /// reward is credited in the same transaction. A plain mint signature is
    /// not accepted here, and a reward signature is not accepted by
    /// [`Self::mint`].
    ///
    /// # Errors
    /// Returns the error of the first failing step; the transaction must then be
    /// discarded.
    pub fn claim(
        &self,
        tx: &mut Transaction<'_>,
        account: &Account,
        membership: &MembershipWitness,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
        nullifier: &NullifierWitness,
    ) -> Result<(), ContractError> {
        self.check_set_inclusion(tx, account, membership)?;
        self.consume_nullifier(tx, account, nullifier)?;

        if let Some(reward) = self.config().claim_reward {
            let signature = signature.ok_or(ContractError::SignatureInvalid)?;
            let recipient = account.key();
            self.authorize(
                &AuthMessage::ClaimReward {
                    recipient,
                    amount: reward,
                },
                signature,
            )?;
            self.credit(tx, recipient, reward)?;
        }

        info!(account = %account.key(), "Claim accepted");
        Ok(())
    }
}
