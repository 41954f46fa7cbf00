//! Read-only checks against the deployed contract.

use std::path::PathBuf;

use tracing::info;
use zkdrop_contract::ClaimFlag;
use zkdrop_core::base::IdentityKey;
use zkdrop_tree::{Account, MembershipWitness, NullifierWitness, field_to_repr};

use crate::common::ContractFiles;
use crate::registry::Registry;

/// Check that `identity` is included under the stored commitment.
///
/// # Errors
/// Returns an error if the identity is not in the registry or the contract
/// rejects its witness.
pub async fn check_inclusion(
    files: &ContractFiles,
    registry_file: PathBuf,
    identity: IdentityKey,
) -> eyre::Result<()> {
    let registry = Registry::load(&registry_file).await?;
    let prepared = registry.prepare_claim(identity)?;
    let witness = MembershipWitness::try_from(&prepared.membership)?;

    let mut airdrop = files.load().await?;
    airdrop.check_set_inclusion(&Account::new(identity), &witness)?;
    info!(%identity, position = witness.position(), "Identity is included");
    Ok(())
}

/// Report whether `identity` has claimed.
///
/// # Errors
/// Returns an error if the identity is not in the registry or the registry's
/// nullifier map does not match the contract.
pub async fn claim_status(
    files: &ContractFiles,
    registry_file: PathBuf,
    identity: IdentityKey,
) -> eyre::Result<ClaimFlag> {
    let registry = Registry::load(&registry_file).await?;
    let prepared = registry.prepare_claim(identity)?;
    let witness = NullifierWitness::try_from(&prepared.nullifier)?;

    let mut airdrop = files.load().await?;
    let (status, key) = airdrop.check_claimed(&Account::new(identity), &witness)?;
    info!(%identity, key = %field_to_repr(key), ?status, "Claim status");
    Ok(status)
}
