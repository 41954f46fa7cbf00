//! Claim preparation and execution.

use std::path::PathBuf;

use eyre::{Context as _, ContextCompat as _, ensure};
use tracing::{info, instrument, warn};
use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::voucher::{Voucher, VoucherKind};
use zkdrop_core::schema::witness::PreparedClaim;
use zkdrop_tree::{Account, MembershipWitness, NullifierWitness, field_to_repr};

use crate::common::{ContractFiles, read_json, write_json};
use crate::registry::Registry;

/// Write the witnesses `identity` needs to claim.
///
/// # Errors
/// Returns an error if the identity is not registered or file I/O fails.
pub async fn claim_prepare(
    registry_file: PathBuf,
    identity: IdentityKey,
    output: PathBuf,
) -> eyre::Result<()> {
    let registry = Registry::load(&registry_file).await?;
    let prepared = registry.prepare_claim(identity)?;
    write_json(&output, &prepared).await?;
    info!(
        file = ?output,
        %identity,
        position = prepared.membership.position,
        "Claim witnesses written"
    );
    Ok(())
}

/// Claim for `identity`, then record the claim in the registry.
///
/// Witnesses come from `prepared_file` when given, otherwise they are built from
/// the registry. A voucher is required when the deployment pays a claim reward.
///
/// # Errors
/// Returns an error if the registry is out of sync with the contract, the
/// contract rejects the claim, or file I/O fails. Nothing is written unless the
/// claim is accepted and the registry agrees with the new contract state.
#[instrument(skip_all, fields(identity = %identity))]
pub async fn claim_run(
    files: &ContractFiles,
    registry_file: PathBuf,
    identity: IdentityKey,
    prepared_file: Option<PathBuf>,
    voucher_file: Option<PathBuf>,
) -> eyre::Result<()> {
    let mut registry = Registry::load(&registry_file).await?;
    let mut airdrop = files.load().await?;

    let prepared = match prepared_file {
        Some(path) => read_json::<PreparedClaim>(&path, "prepared claim").await?,
        None => registry.prepare_claim(identity)?,
    };
    ensure!(
        prepared.identity == identity,
        "Prepared claim is for identity {}, not {identity}",
        prepared.identity
    );

    let state = airdrop.state();
    if prepared.membership_root != field_to_repr(state.commitment()) {
        warn!(
            prepared = %prepared.membership_root,
            stored = %field_to_repr(state.commitment()),
            "Membership root differs from the stored commitment"
        );
    }
    ensure!(
        prepared.nullifier_root == field_to_repr(state.nullifiers()),
        "Nullifier witness was built against root {}, contract holds {}",
        prepared.nullifier_root,
        field_to_repr(state.nullifiers())
    );
    // The registry is written back after the claim, so it must mirror the
    // contract before anything is persisted.
    ensure!(
        registry.nullifier_root().inner() == state.nullifiers(),
        "Registry nullifier root {} does not match the contract root {}",
        field_to_repr(registry.nullifier_root().inner()),
        field_to_repr(state.nullifiers())
    );

    let signature = match airdrop.config().claim_reward {
        Some(reward) => {
            let path = voucher_file
                .context("Deployment pays a claim reward; a voucher is required")?;
            let voucher: Voucher = read_json(&path, "voucher").await?;
            ensure!(
                voucher.kind == VoucherKind::ClaimReward,
                "Voucher authorizes a mint, not a claim reward"
            );
            ensure!(
                voucher.recipient == identity && voucher.amount == reward,
                "Voucher must issue the claim reward of {reward} to {identity}"
            );
            Some(voucher.signature)
        }
        None => None,
    };

    let membership = MembershipWitness::try_from(&prepared.membership)
        .context("Invalid membership witness")?;
    let nullifier =
        NullifierWitness::try_from(&prepared.nullifier).context("Invalid nullifier witness")?;

    airdrop.claim(
        &Account::new(identity),
        &membership,
        signature.as_ref(),
        &nullifier,
    )?;
    info!(
        nullifiers = %field_to_repr(airdrop.state().nullifiers()),
        "Claim accepted"
    );
    registry.record_claim(identity);
    ensure!(
        registry.nullifier_root().inner() == airdrop.state().nullifiers(),
        "Registry nullifier map diverged from the contract after the claim"
    );

    files.save_state(&airdrop).await?;
    registry.save(&registry_file).await
}
