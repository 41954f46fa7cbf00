use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use crate::base::IdentityKey;

/// Size of an authorization signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Operation a voucher authorizes.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum VoucherKind {
    /// Standalone `mint`.
    #[default]
    Mint,
    /// Reward paid inside `claim`.
    ClaimReward,
}

/// Admin authorization to issue `amount` tokens to `recipient`.
///
/// The signature is bound to [`VoucherKind`], so a voucher is accepted by
/// exactly one of `mint` and `claim`.
#[serde_as]
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Voucher {
    /// Operation the voucher authorizes.
    #[serde(default)]
    pub kind: VoucherKind,
    /// Token recipient.
    pub recipient: IdentityKey,
    /// Amount to issue.
    pub amount: u64,
    /// Admin signature over the authorization digest.
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    pub signature: [u8; SIGNATURE_SIZE],
}
