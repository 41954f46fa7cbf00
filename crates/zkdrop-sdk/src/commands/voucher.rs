//! Admin mint and claim reward vouchers.

use std::path::PathBuf;

use eyre::ensure;
use rand_core::OsRng;
use tracing::info;
use zkdrop_contract::auth::{AuthMessage, identity_of, sign_message};
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::config::AirdropConfiguration;
use zkdrop_core::schema::voucher::{Voucher, VoucherKind};

use crate::common::{read_json, write_json};
use crate::signing_key::read_signing_key_file;

const fn voucher_message(
    kind: VoucherKind,
    recipient: IdentityKey,
    amount: u64,
) -> AuthMessage {
    match kind {
        VoucherKind::Mint => AuthMessage::Mint { recipient, amount },
        VoucherKind::ClaimReward => AuthMessage::ClaimReward { recipient, amount },
    }
}

/// Sign a `kind` voucher issuing `amount` tokens to `recipient` and write it to
/// `output`.
///
/// # Errors
/// Returns an error if the key is not the configured admin key or file I/O fails.
pub async fn voucher_sign(
    config_file: PathBuf,
    admin_key_file: PathBuf,
    kind: VoucherKind,
    recipient: IdentityKey,
    amount: u64,
    output: PathBuf,
) -> eyre::Result<()> {
    let config: AirdropConfiguration = read_json(&config_file, "airdrop configuration").await?;
    let key = read_signing_key_file(&admin_key_file).await?;
    ensure!(
        identity_of(&key) == config.admin_key,
        "Signing key does not match the configured admin key"
    );

    let message = voucher_message(kind, recipient, amount);
    let voucher = Voucher {
        kind,
        recipient,
        amount,
        signature: sign_message(&key, OsRng, &config.contract_id, &message),
    };
    write_json(&output, &voucher).await?;
    info!(file = ?output, ?kind, %recipient, amount, "Voucher written");
    Ok(())
}
