//! Membership commitment, identifier slot and set inclusion.

use pasta_curves::pallas;
use tracing::debug;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;
use zkdrop_tree::{Account, ClaimFlag, MembershipWitness, NullifierWitness, field_to_repr};

use crate::auth::AuthMessage;
use crate::contract::AirdropContract;
use crate::error::ContractError;
use crate::transaction::Transaction;

impl AirdropContract<'_> {
    /// Overwrite the membership commitment.
    ///
    /// With `admin_gated_updates` set, `signature` must be an admin signature over
    /// the new root.
    ///
    /// # Errors
    /// Returns [`ContractError::SignatureInvalid`] if a required signature is
    /// missing or invalid.
    pub fn set_commitment(
        &self,
        tx: &mut Transaction<'_>,
        root: pallas::Base,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
    ) -> Result<(), ContractError> {
        self.authorize_update(&AuthMessage::Commitment(root), signature)?;
        tx.set_commitment(root);
        debug!(root = %field_to_repr(root), "Staged membership commitment");
        Ok(())
    }

    /// Overwrite the auxiliary identity-set commitment.
    ///
    /// # Errors
    /// Returns [`ContractError::SignatureInvalid`] if a required signature is
    /// missing or invalid.
    pub fn add_human_identifier(
        &self,
        tx: &mut Transaction<'_>,
        identifier: pallas::Base,
        signature: Option<&[u8; SIGNATURE_SIZE]>,
    ) -> Result<(), ContractError> {
        self.authorize_update(&AuthMessage::Identifier(identifier), signature)?;
        tx.set_identifier(identifier);
        debug!(identifier = %field_to_repr(identifier), "Staged identifier");
        Ok(())
    }

    /// Read the identifier slot and return the key the witness encodes.
    ///
    /// The recomputed root is not compared with the identifier: the slot holds an
    /// opaque off-chain storage id, not a map root.
    #[allow(
        clippy::unused_self,
        reason = "Every contract method shares the contract receiver"
    )]
    pub fn check_human_identifier_inclusion(
        &self,
        tx: &mut Transaction<'_>,
        account: &Account,
        witness: &NullifierWitness,
    ) -> pallas::Base {
        let _identifier = tx.identifier();
        let (_root, key) = witness.compute_root_and_key(ClaimFlag::Unclaimed.to_field());
        debug!(
            account = %account.key(),
            key = %field_to_repr(key),
            "Derived identifier witness key"
        );
        key
    }

    /// Require `account` to be a leaf of the committed membership tree.
    ///
    /// A wrong path and a non-member produce the same error.
    ///
    /// # Errors
    /// Returns [`ContractError::MembershipProofInvalid`] if the witness does not
    /// recompute to the stored commitment.
    #[allow(
        clippy::unused_self,
        reason = "Every contract method shares the contract receiver"
    )]
    pub fn check_set_inclusion(
        &self,
        tx: &mut Transaction<'_>,
        account: &Account,
        witness: &MembershipWitness,
    ) -> Result<(), ContractError> {
        let commitment = tx.commitment();
        if witness.calculate_root(account.leaf()).inner() == commitment {
            Ok(())
        } else {
            Err(ContractError::MembershipProofInvalid)
        }
    }
}
