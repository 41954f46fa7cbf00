//! Contract subcommands.

use std::path::PathBuf;

use clap::ArgGroup;
use zkdrop_core::base::{FieldRepr, IdentityKey};
use zkdrop_core::schema::config::DEFAULT_TOKEN_SYMBOL;

use super::constants::{
    ZKDROP_ADMIN_IDENTITY, ZKDROP_ADMIN_KEY_FILE, ZKDROP_CLAIM_REWARD, ZKDROP_COMMITMENT_ROOT,
    ZKDROP_CONTRACT_ID, ZKDROP_GATED_UPDATES, ZKDROP_IDENTIFIER, ZKDROP_REGISTRY_FILE,
    ZKDROP_TOKEN_SYMBOL,
};
use super::{ContractArgs, parse_contract_id, parse_field, parse_identity};

/// Arguments for `zkdrop contract deploy`.
#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Output contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Admin identity authorizing mints and claim rewards.
    #[arg(long, env = ZKDROP_ADMIN_IDENTITY, value_parser = parse_identity)]
    pub admin: IdentityKey,
    /// Token symbol.
    #[arg(long, env = ZKDROP_TOKEN_SYMBOL, default_value = DEFAULT_TOKEN_SYMBOL)]
    pub token_symbol: String,
    /// Contract identifier (32 bytes hex). Random when omitted.
    #[arg(long, env = ZKDROP_CONTRACT_ID, value_parser = parse_contract_id)]
    pub contract_id: Option<[u8; 32]>,
    /// Tokens minted to each identity on a successful claim.
    #[arg(long, env = ZKDROP_CLAIM_REWARD)]
    pub claim_reward: Option<u64>,
    /// Require admin signatures on commitment and identifier updates.
    #[arg(long, env = ZKDROP_GATED_UPDATES, default_value_t = false)]
    pub gated_updates: bool,
}

/// Arguments for `zkdrop contract set-commitment`.
#[derive(Debug, clap::Args)]
pub struct SetCommitmentArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Take the root from this registry file.
    #[arg(long, env = ZKDROP_REGISTRY_FILE)]
    pub registry: Option<PathBuf>,
    /// Explicit membership root (32 bytes hex).
    #[arg(long, env = ZKDROP_COMMITMENT_ROOT, value_parser = parse_field)]
    pub root: Option<FieldRepr>,
    /// Admin signing key, required when updates are gated.
    #[arg(long, env = ZKDROP_ADMIN_KEY_FILE)]
    pub admin_key: Option<PathBuf>,
}

/// Arguments for `zkdrop contract set-identifier`.
#[derive(Debug, clap::Args)]
pub struct SetIdentifierArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// New identifier (32 bytes hex).
    #[arg(long, env = ZKDROP_IDENTIFIER, value_parser = parse_field)]
    pub identifier: FieldRepr,
    /// Admin signing key, required when updates are gated.
    #[arg(long, env = ZKDROP_ADMIN_KEY_FILE)]
    pub admin_key: Option<PathBuf>,
}

/// Contract command group.
#[derive(Debug, clap::Subcommand)]
pub enum ContractCommands {
    /// Write the configuration and initial state of a new deployment.
    Deploy {
        #[command(flatten)]
        args: DeployArgs,
    },
    /// Print the JSON schema of the configuration file.
    Schema,
    /// Replace the membership commitment.
    #[command(group(
        ArgGroup::new("root_source")
            .args(["registry", "root"])
            .required(true)
            .multiple(false)
    ))]
    SetCommitment {
        #[command(flatten)]
        args: SetCommitmentArgs,
    },
    /// Replace the identifier slot.
    SetIdentifier {
        #[command(flatten)]
        args: SetIdentifierArgs,
    },
}
