//! Token subcommands.

use std::path::PathBuf;

use zkdrop_core::base::IdentityKey;

use super::constants::{
    DEFAULT_VOUCHER_FILE, ZKDROP_ACCOUNT, ZKDROP_AMOUNT, ZKDROP_RECIPIENT, ZKDROP_SENDER,
    ZKDROP_VOUCHER_FILE,
};
use super::{ContractArgs, parse_identity};

/// Arguments for `zkdrop token mint`.
#[derive(Debug, clap::Args)]
pub struct MintArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Admin voucher authorizing the mint.
    #[arg(long, env = ZKDROP_VOUCHER_FILE, default_value = DEFAULT_VOUCHER_FILE)]
    pub voucher: PathBuf,
}

/// Arguments for `zkdrop token send`.
#[derive(Debug, clap::Args)]
pub struct SendArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Sending account.
    #[arg(long = "from", env = ZKDROP_SENDER, value_parser = parse_identity)]
    pub sender: IdentityKey,
    /// Receiving account.
    #[arg(long = "to", env = ZKDROP_RECIPIENT, value_parser = parse_identity)]
    pub recipient: IdentityKey,
    /// Amount to transfer.
    #[arg(long, env = ZKDROP_AMOUNT)]
    pub amount: u64,
}

/// Arguments for `zkdrop token balance`.
#[derive(Debug, clap::Args)]
pub struct BalanceArgs {
    /// Contract files.
    #[command(flatten)]
    pub contract: ContractArgs,
    /// Account to query.
    #[arg(long, env = ZKDROP_ACCOUNT, value_parser = parse_identity)]
    pub account: IdentityKey,
}

/// Token command group.
#[derive(Debug, clap::Subcommand)]
pub enum TokenCommands {
    /// Mint tokens under an admin voucher.
    Mint {
        #[command(flatten)]
        args: MintArgs,
    },
    /// Transfer tokens.
    Send {
        #[command(flatten)]
        args: SendArgs,
    },
    /// Show an account balance and the total supply.
    Balance {
        #[command(flatten)]
        args: BalanceArgs,
    },
}
