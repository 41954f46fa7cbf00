//! Contract deployment and administrative updates.

use std::path::PathBuf;

use eyre::Context as _;
use rand_core::{OsRng, RngCore as _};
use tracing::{info, warn};
use zkdrop_contract::Airdrop;
use zkdrop_contract::auth::{AuthMessage, sign_message};
use zkdrop_core::base::{FieldRepr, IdentityKey};
use zkdrop_core::schema::config::AirdropConfiguration;
use zkdrop_core::schema::voucher::SIGNATURE_SIZE;
use zkdrop_tree::field_from_repr;

use crate::common::{ContractFiles, write_json};
use crate::registry::Registry;
use crate::signing_key::read_signing_key_file;

/// Deployment parameters.
#[derive(Debug, Clone)]
pub struct DeployParams {
    /// Token symbol.
    pub token_symbol: String,
    /// Contract identifier. A random one is drawn when absent.
    pub contract_id: Option<[u8; 32]>,
    /// Admin verification key.
    pub admin_key: IdentityKey,
    /// Reward minted on each claim.
    pub claim_reward: Option<u64>,
    /// Require admin signatures on commitment and identifier updates.
    pub admin_gated_updates: bool,
}

/// Where a new membership root comes from.
#[derive(Debug, Clone)]
pub enum RootSource {
    /// The root of a registry file.
    Registry(PathBuf),
    /// An explicit root.
    Explicit(FieldRepr),
}

/// Write the configuration and the freshly deployed state.
///
/// # Errors
/// Returns an error if file I/O fails.
pub async fn contract_deploy(params: DeployParams, files: &ContractFiles) -> eyre::Result<()> {
    let contract_id = params.contract_id.unwrap_or_else(|| {
        let mut id = [0_u8; 32];
        OsRng.fill_bytes(&mut id);
        id
    });

    let mut config = AirdropConfiguration::new(
        params.token_symbol,
        contract_id,
        params.admin_key,
        params.claim_reward,
    );
    config.admin_gated_updates = params.admin_gated_updates;

    let airdrop = Airdrop::deploy(config);
    write_json(&files.config, airdrop.config()).await?;
    info!(
        file = ?files.config,
        contract_id = %hex::encode(contract_id),
        token = %airdrop.config().token_symbol,
        "Exported configuration"
    );
    files.save_state(&airdrop).await
}

async fn admin_signature(
    airdrop: &Airdrop,
    admin_key_file: Option<PathBuf>,
    message: &AuthMessage,
) -> eyre::Result<Option<[u8; SIGNATURE_SIZE]>> {
    let Some(path) = admin_key_file else {
        if airdrop.config().admin_gated_updates {
            warn!("Deployment requires signed updates but no admin key was given");
        }
        return Ok(None);
    };
    let key = read_signing_key_file(&path).await?;
    Ok(Some(sign_message(
        &key,
        OsRng,
        &airdrop.config().contract_id,
        message,
    )))
}

/// Replace the membership commitment.
///
/// # Errors
/// Returns an error if the root cannot be resolved, authorization fails, or file
/// I/O fails.
pub async fn set_commitment(
    files: &ContractFiles,
    source: RootSource,
    admin_key_file: Option<PathBuf>,
) -> eyre::Result<FieldRepr> {
    let root = match source {
        RootSource::Registry(path) => Registry::load(&path).await?.membership_root().to_repr(),
        RootSource::Explicit(root) => root,
    };
    let value = field_from_repr(root, "commitment").context("Invalid membership root")?;

    let mut airdrop = files.load().await?;
    let signature =
        admin_signature(&airdrop, admin_key_file, &AuthMessage::Commitment(value)).await?;
    airdrop.set_commitment(value, signature.as_ref())?;
    info!(%root, "Membership commitment set");

    files.save_state(&airdrop).await?;
    Ok(root)
}

/// Replace the identifier slot.
///
/// # Errors
/// Returns an error if the identifier is not a field element, authorization
/// fails, or file I/O fails.
pub async fn set_identifier(
    files: &ContractFiles,
    identifier: FieldRepr,
    admin_key_file: Option<PathBuf>,
) -> eyre::Result<()> {
    let value = field_from_repr(identifier, "identifier").context("Invalid identifier")?;

    let mut airdrop = files.load().await?;
    let signature =
        admin_signature(&airdrop, admin_key_file, &AuthMessage::Identifier(value)).await?;
    airdrop.add_human_identifier(value, signature.as_ref())?;
    info!(%identifier, "Identifier set");

    files.save_state(&airdrop).await
}
