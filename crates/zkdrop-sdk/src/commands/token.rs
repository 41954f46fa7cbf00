//! Token ledger commands.

use std::path::PathBuf;

use eyre::ensure;
use tracing::info;
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::voucher::{Voucher, VoucherKind};

use crate::common::{ContractFiles, read_json};

/// Mint tokens under an admin voucher.
///
/// # Errors
/// Returns an error if the voucher is not a mint voucher, the contract rejects
/// it, or file I/O fails.
pub async fn token_mint(files: &ContractFiles, voucher_file: PathBuf) -> eyre::Result<()> {
    let voucher: Voucher = read_json(&voucher_file, "voucher").await?;
    ensure!(
        voucher.kind == VoucherKind::Mint,
        "Voucher authorizes a claim reward, not a mint"
    );
    let mut airdrop = files.load().await?;
    airdrop.mint(voucher.recipient, voucher.amount, &voucher.signature)?;
    info!(
        recipient = %voucher.recipient,
        amount = voucher.amount,
        supply = airdrop.state().total_supply(),
        "Minted"
    );
    files.save_state(&airdrop).await
}

/// Transfer tokens between accounts.
///
/// # Errors
/// Returns an error if the sender cannot cover the amount or file I/O fails.
pub async fn token_send(
    files: &ContractFiles,
    sender: IdentityKey,
    recipient: IdentityKey,
    amount: u64,
) -> eyre::Result<()> {
    let mut airdrop = files.load().await?;
    airdrop.send_tokens(sender, recipient, amount)?;
    info!(%sender, %recipient, amount, "Transferred");
    files.save_state(&airdrop).await
}

/// Return the balance of `account` and the total supply.
///
/// # Errors
/// Returns an error if the contract files cannot be loaded.
pub async fn token_balance(
    files: &ContractFiles,
    account: IdentityKey,
) -> eyre::Result<(u64, u64)> {
    let airdrop = files.load().await?;
    let balance = airdrop.state().balance(&account);
    let supply = airdrop.state().total_supply();
    info!(
        %account,
        balance,
        supply,
        token = %airdrop.config().token_symbol,
        "Balance"
    );
    Ok((balance, supply))
}
