//! Claim subcommands.

use std::path::PathBuf;

use zkdrop_core::base::IdentityKey;

use super::constants::{
    DEFAULT_CLAIM_FILE, DEFAULT_REGISTRY_FILE, ZKDROP_CLAIM_IN, ZKDROP_CLAIM_OUT, ZKDROP_IDENTITY,
    ZKDROP_REGISTRY_FILE, ZKDROP_VOUCHER_FILE,
};
use super::{ContractArgs, parse_identity};

/// Arguments shared by the read-only claim checks.
#[derive(Debug, clap::Args)]
pub struct ClaimCheckArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Registry file.
    #[arg(long, env = ZKDROP_REGISTRY_FILE, default_value = DEFAULT_REGISTRY_FILE)]
    pub registry: PathBuf,
    /// Identity to check.
    #[arg(long, env = ZKDROP_IDENTITY, value_parser = parse_identity)]
    pub identity: IdentityKey,
}

/// Arguments for `zkdrop claim prepare`.
#[derive(Debug, clap::Args)]
pub struct ClaimPrepareArgs {
    /// Registry file.
    #[arg(long, env = ZKDROP_REGISTRY_FILE, default_value = DEFAULT_REGISTRY_FILE)]
    pub registry: PathBuf,
    /// Claiming identity.
    #[arg(long, env = ZKDROP_IDENTITY, value_parser = parse_identity)]
    pub identity: IdentityKey,
    /// Output file for the claim witnesses.
    #[arg(long, env = ZKDROP_CLAIM_OUT, default_value = DEFAULT_CLAIM_FILE)]
    pub output: PathBuf,
}

/// Arguments for `zkdrop claim run`.
#[derive(Debug, clap::Args)]
pub struct ClaimRunArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Registry file, updated after the claim.
    #[arg(long, env = ZKDROP_REGISTRY_FILE, default_value = DEFAULT_REGISTRY_FILE)]
    pub registry: PathBuf,
    /// Claiming identity.
    #[arg(long, env = ZKDROP_IDENTITY, value_parser = parse_identity)]
    pub identity: IdentityKey,
    /// Use witnesses from `claim prepare` instead of building them.
    #[arg(long, env = ZKDROP_CLAIM_IN)]
    pub prepared: Option<PathBuf>,
    /// Admin voucher for the claim reward.
    #[arg(long, env = ZKDROP_VOUCHER_FILE)]
    pub voucher: Option<PathBuf>,
}

/// Claim command group.
#[derive(Debug, clap::Subcommand)]
pub enum ClaimCommands {
    /// Check that an identity is in the committed set.
    CheckInclusion {
        #[command(flatten)]
        args: ClaimCheckArgs,
    },
    /// Report whether an identity has claimed.
    Status {
        #[command(flatten)]
        args: ClaimCheckArgs,
    },
    /// Write the witnesses an identity needs to claim.
    Prepare {
        #[command(flatten)]
        args: ClaimPrepareArgs,
    },
    /// Claim and record the claim in the registry.
    Run {
        #[command(flatten)]
        args: ClaimRunArgs,
    },
}
