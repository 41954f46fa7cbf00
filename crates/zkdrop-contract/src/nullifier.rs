//! Nullifier transition guard.
//!
//! A claim flips the identity's flag in the nullifier map from 0 to 1. The
//! contract only holds the map root, so both the current flag and the new root are
//! recomputed from the claimant's witness.

use pasta_curves::pallas;
use tracing::debug;
use zkdrop_tree::{Account, ClaimFlag, NullifierWitness, field_to_repr};

use crate::contract::AirdropContract;
use crate::error::ContractError;
use crate::transaction::Transaction;

impl AirdropContract<'_> {
    /// Report whether `account` has claimed, with the key the witness encodes.
    ///
    /// The witness must be for the account's claim key and consistent with the
    /// stored root: `Unclaimed` when it recomputes to the stored root with leaf 0,
    /// `Claimed` when it does with leaf 1.
    ///
    /// # Errors
    /// Returns [`ContractError::NullifierKeyMismatch`] for a witness of another
    /// key, or [`ContractError::NullifierRootMismatch`] for a stale witness.
    #[allow(
        clippy::unused_self,
        reason = "Every contract method shares the contract receiver"
    )]
    pub fn check_claimed(
        &self,
        tx: &mut Transaction<'_>,
        account: &Account,
        witness: &NullifierWitness,
    ) -> Result<(ClaimFlag, pallas::Base), ContractError> {
        let stored = tx.nullifiers();

        let (root_unclaimed, key) = witness.compute_root_and_key(ClaimFlag::Unclaimed.to_field());
        if key != account.claim_key() {
            return Err(ContractError::NullifierKeyMismatch);
        }
        if root_unclaimed.inner() == stored {
            return Ok((ClaimFlag::Unclaimed, key));
        }

        let (root_claimed, _) = witness.compute_root_and_key(ClaimFlag::Claimed.to_field());
        if root_claimed.inner() == stored {
            Ok((ClaimFlag::Claimed, key))
        } else {
            Err(ContractError::NullifierRootMismatch)
        }
    }

    /// Stage the 0 to 1 transition of `account`'s flag.
    pub(crate) fn consume_nullifier(
        &self,
        tx: &mut Transaction<'_>,
        account: &Account,
        witness: &NullifierWitness,
    ) -> Result<(), ContractError> {
        match self.check_claimed(tx, account, witness)? {
            (ClaimFlag::Unclaimed, key) => {
                let (root_after, _) = witness.compute_root_and_key(ClaimFlag::Claimed.to_field());
                tx.set_nullifiers(root_after.inner());
                debug!(
                    key = %field_to_repr(key),
                    root = %root_after.to_repr(),
                    "Staged nullifier root"
                );
                Ok(())
            }
            (ClaimFlag::Claimed, _) => Err(ContractError::AlreadyClaimed),
        }
    }
}
