//! Command-line interface for the `zkdrop` CLI application.

mod claim;
pub mod constants;
mod contract;
mod key;
mod registry;
mod token;
mod voucher;

use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, eyre};
use zkdrop_core::base::{FieldRepr, IdentityKey, parse_hex_array};
use zkdrop_sdk::common::ContractFiles;

pub use self::claim::ClaimCommands;
use self::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_STATE_FILE, ZKDROP_CONFIG_FILE, ZKDROP_STATE_FILE,
};
pub use self::contract::ContractCommands;
pub use self::key::KeyCommands;
pub use self::registry::RegistryCommands;
pub use self::token::TokenCommands;
pub use self::voucher::VoucherCommands;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "zkdrop")]
#[command(about = "Eligibility-gated single-claim airdrop tools")]
pub struct Cli {
    /// CLI top-level command group.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Signing key utilities.
    Key {
        /// Key subcommands.
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Off-chain registry of eligible identities.
    Registry {
        /// Registry subcommands.
        #[command(subcommand)]
        command: RegistryCommands,
    },
    /// Contract deployment and administration.
    Contract {
        /// Contract subcommands.
        #[command(subcommand)]
        command: ContractCommands,
    },
    /// Claim pipeline commands.
    Claim {
        /// Claim subcommands.
        #[command(subcommand)]
        command: ClaimCommands,
    },
    /// Admin mint and claim reward vouchers.
    Voucher {
        /// Voucher subcommands.
        #[command(subcommand)]
        command: VoucherCommands,
    },
    /// Token ledger commands.
    Token {
        /// Token subcommands.
        #[command(subcommand)]
        command: TokenCommands,
    },
}

/// Files of the deployed contract.
#[derive(Debug, clap::Args)]
pub struct ContractArgs {
    /// Airdrop configuration file.
    #[arg(long, env = ZKDROP_CONFIG_FILE, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Contract state file.
    #[arg(long, env = ZKDROP_STATE_FILE, default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,
}

impl From<ContractArgs> for ContractFiles {
    fn from(args: ContractArgs) -> Self {
        Self {
            config: args.config,
            state: args.state,
        }
    }
}

/// Parse a hex identity, with or without a `0x` prefix.
pub fn parse_identity(s: &str) -> Result<IdentityKey> {
    s.trim()
        .parse()
        .map_err(|e| eyre!("Invalid identity: {e}. Expected 32 bytes of hex."))
}

/// Parse a hex field element encoding.
pub fn parse_field(s: &str) -> Result<FieldRepr> {
    s.trim()
        .parse()
        .map_err(|e| eyre!("Invalid field element: {e}. Expected 32 bytes of hex."))
}

/// Parse a 32-byte hex contract id.
pub fn parse_contract_id(s: &str) -> Result<[u8; 32]> {
    parse_hex_array(s.trim())
        .map_err(|e| eyre!("Invalid contract id: {e}. Expected 32 bytes of hex."))
}
