//! Key subcommands.

use std::path::PathBuf;

use super::constants::{DEFAULT_KEY_FILE, ZKDROP_IDENTITY_OUT, ZKDROP_KEY_OUT};

/// Arguments for `zkdrop key generate`.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Output file for the signing key (hex, owner-only permissions).
    #[arg(long, env = ZKDROP_KEY_OUT, default_value = DEFAULT_KEY_FILE)]
    pub output: PathBuf,

    /// Also write the identity (public key hex) to this file.
    #[arg(long, env = ZKDROP_IDENTITY_OUT)]
    pub identity_out: Option<PathBuf>,
}

/// Key command group.
#[derive(Debug, clap::Subcommand)]
pub enum KeyCommands {
    /// Generate a RedJubjub spend-auth signing key.
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}
