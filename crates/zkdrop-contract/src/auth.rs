//! Admin authorization: digests and RedJubjub spend-auth signatures.
//!
//! A signed message is `BLAKE2b-256(tag || contract_id || payload)` with the
//! personalization [`AUTH_PERSONALIZATION`]. Binding the contract id keeps a
//! signature for one deployment from being replayed against another.

use blake2b_simd::Params;
use ff::PrimeField as _;
use pasta_curves::pallas;
use rand_core::{CryptoRng, RngCore};
use redjubjub::{Signature, SigningKey, SpendAuth, VerificationKey};
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;

use crate::error::ContractError;

/// `BLAKE2b` personalization for admin authorization digests.
pub const AUTH_PERSONALIZATION: &[u8; 14] = b"zkdrop_auth_v1";
/// Tag of admin mint authorizations.
pub const MINT_TAG: &[u8; 8] = b"MINT____";
/// Tag of claim reward authorizations.
pub const CLAIM_REWARD_TAG: &[u8; 8] = b"REWARD__";
/// Tag of membership commitment updates.
pub const COMMITMENT_TAG: &[u8; 8] = b"COMMIT__";
/// Tag of identifier updates.
pub const IDENTIFIER_TAG: &[u8; 8] = b"IDENTIF_";

/// A message the admin key authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMessage {
    /// Issue `amount` tokens to `recipient`.
    Mint {
        /// Token recipient.
        recipient: IdentityKey,
        /// Amount to issue.
        amount: u64,
    },
    /// Pay the configured claim reward to `recipient` as part of its claim.
    ///
    /// Only the claim operation accepts this message, so a reward voucher cannot
    /// be spent again through a standalone mint.
    ClaimReward {
        /// Claiming member.
        recipient: IdentityKey,
        /// Reward amount.
        amount: u64,
    },
    /// Replace the membership commitment.
    Commitment(pallas::Base),
    /// Replace the identifier slot.
    Identifier(pallas::Base),
}

impl AuthMessage {
    /// Domain tag of the message kind.
    #[must_use]
    pub const fn tag(&self) -> &'static [u8; 8] {
        match self {
            Self::Mint { .. } => MINT_TAG,
            Self::ClaimReward { .. } => CLAIM_REWARD_TAG,
            Self::Commitment(_) => COMMITMENT_TAG,
            Self::Identifier(_) => IDENTIFIER_TAG,
        }
    }

    /// Digest the admin signs for this message on contract `contract_id`.
    #[must_use]
    pub fn digest(&self, contract_id: &[u8; 32]) -> [u8; 32] {
        let mut preimage = Vec::with_capacity(80);
        preimage.extend_from_slice(self.tag());
        preimage.extend_from_slice(contract_id);
        match self {
            Self::Mint { recipient, amount } | Self::ClaimReward { recipient, amount } => {
                preimage.extend_from_slice(&amount.to_le_bytes());
                preimage.extend_from_slice(&recipient.to_bytes());
            }
            Self::Commitment(value) | Self::Identifier(value) => {
                preimage.extend_from_slice(&value.to_repr());
            }
        }

        let digest = Params::new()
            .hash_length(32)
            .personal(AUTH_PERSONALIZATION)
            .hash(&preimage);
        let mut out = [0_u8; 32];
        out.copy_from_slice(digest.as_bytes());
        out
    }
}

/// Sign `message` for contract `contract_id`.
#[must_use]
pub fn sign_message<R: RngCore + CryptoRng>(
    key: &SigningKey<SpendAuth>,
    rng: R,
    contract_id: &[u8; 32],
    message: &AuthMessage,
) -> [u8; SIGNATURE_SIZE] {
    key.sign(rng, &message.digest(contract_id)).into()
}

/// Verify an admin signature over `message`.
///
/// # Errors
/// Returns [`ContractError::SignatureInvalid`] if the admin key does not decode
/// or the signature does not verify.
pub fn verify_message(
    admin_key: &IdentityKey,
    contract_id: &[u8; 32],
    message: &AuthMessage,
    signature: &[u8; SIGNATURE_SIZE],
) -> Result<(), ContractError> {
    let vk = VerificationKey::<SpendAuth>::try_from(admin_key.to_bytes())
        .map_err(|_| ContractError::SignatureInvalid)?;
    vk.verify(&message.digest(contract_id), &Signature::from(*signature))
        .map_err(|_| ContractError::SignatureInvalid)
}

/// Identity key of a signing key.
#[must_use]
pub fn identity_of(key: &SigningKey<SpendAuth>) -> IdentityKey {
    let vk: [u8; 32] = VerificationKey::from(key).into();
    IdentityKey::new(vk)
}

#[cfg(test)]
mod tests {
    use rand_core::OsRng;

    use super::*;

    const CONTRACT: [u8; 32] = [7_u8; 32];

    fn mint_message() -> AuthMessage {
        AuthMessage::Mint {
            recipient: IdentityKey::new([3_u8; 32]),
            amount: 100,
        }
    }

    #[test]
    fn signature_verifies_for_signed_message_only() {
        let key = SigningKey::<SpendAuth>::new(OsRng);
        let admin = identity_of(&key);
        let signature = sign_message(&key, OsRng, &CONTRACT, &mint_message());

        assert_eq!(
            verify_message(&admin, &CONTRACT, &mint_message(), &signature),
            Ok(())
        );

        let other_amount = AuthMessage::Mint {
            recipient: IdentityKey::new([3_u8; 32]),
            amount: 101,
        };
        assert_eq!(
            verify_message(&admin, &CONTRACT, &other_amount, &signature),
            Err(ContractError::SignatureInvalid)
        );
        assert_eq!(
            verify_message(&admin, &[8_u8; 32], &mint_message(), &signature),
            Err(ContractError::SignatureInvalid)
        );
    }

    #[test]
    fn signature_from_other_key_is_rejected() {
        let key = SigningKey::<SpendAuth>::new(OsRng);
        let other = SigningKey::<SpendAuth>::new(OsRng);
        let signature = sign_message(&other, OsRng, &CONTRACT, &mint_message());
        assert_eq!(
            verify_message(&identity_of(&key), &CONTRACT, &mint_message(), &signature),
            Err(ContractError::SignatureInvalid)
        );
    }

    #[test]
    fn tags_separate_message_kinds() {
        let value = pallas::Base::from(9_u64);
        assert_ne!(
            AuthMessage::Commitment(value).digest(&CONTRACT),
            AuthMessage::Identifier(value).digest(&CONTRACT)
        );
    }

    #[test]
    fn reward_signature_does_not_authorize_mint() {
        let key = SigningKey::<SpendAuth>::new(OsRng);
        let recipient = IdentityKey::new([3_u8; 32]);
        let reward = AuthMessage::ClaimReward {
            recipient,
            amount: 100,
        };
        let signature = sign_message(&key, OsRng, &CONTRACT, &reward);

        assert_eq!(
            verify_message(&identity_of(&key), &CONTRACT, &reward, &signature),
            Ok(())
        );
        assert_eq!(
            verify_message(&identity_of(&key), &CONTRACT, &mint_message(), &signature),
            Err(ContractError::SignatureInvalid)
        );
    }
}
