//! Voucher subcommands.

use std::path::PathBuf;

use zkdrop_core::base::IdentityKey;
use zkdrop_core::schema::voucher::VoucherKind;

use super::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_VOUCHER_FILE, ZKDROP_ADMIN_KEY_FILE, ZKDROP_AMOUNT,
    ZKDROP_CONFIG_FILE, ZKDROP_RECIPIENT, ZKDROP_VOUCHER_CLAIM_REWARD, ZKDROP_VOUCHER_FILE,
};
use super::parse_identity;

/// Arguments for `zkdrop voucher sign`.
#[derive(Debug, clap::Args)]
pub struct VoucherSignArgs {
    /// Airdrop configuration file.
    #[arg(long, env = ZKDROP_CONFIG_FILE, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Admin signing key.
    #[arg(long, env = ZKDROP_ADMIN_KEY_FILE)]
    pub admin_key: PathBuf,
    /// Token recipient.
    #[arg(long, env = ZKDROP_RECIPIENT, value_parser = parse_identity)]
    pub recipient: IdentityKey,
    /// Amount to issue.
    #[arg(long, env = ZKDROP_AMOUNT)]
    pub amount: u64,
    /// Authorize the claim reward instead of a standalone mint.
    #[arg(long, env = ZKDROP_VOUCHER_CLAIM_REWARD, default_value_t = false)]
    pub claim_reward: bool,
    /// Voucher output file.
    #[arg(long, env = ZKDROP_VOUCHER_FILE, default_value = DEFAULT_VOUCHER_FILE)]
    pub output: PathBuf,
}

impl VoucherSignArgs {
    /// Voucher kind selected by the flags.
    #[must_use]
    pub const fn kind(&self) -> VoucherKind {
        if self.claim_reward {
            VoucherKind::ClaimReward
        } else {
            VoucherKind::Mint
        }
    }
}

/// Voucher command group.
#[derive(Debug, clap::Subcommand)]
pub enum VoucherCommands {
    /// Sign a `token mint` authorization, or a claim reward with `--claim-reward`.
    Sign {
        #[command(flatten)]
        args: VoucherSignArgs,
    },
}
