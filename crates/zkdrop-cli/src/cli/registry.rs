//! Registry subcommands.

use std::path::PathBuf;

use super::constants::{
    DEFAULT_IDENTITIES_FILE, DEFAULT_REGISTRY_FILE, ZKDROP_IDENTITIES_FILE, ZKDROP_REGISTRY_FILE,
};

/// Arguments for `zkdrop registry build`.
#[derive(Debug, clap::Args)]
pub struct RegistryBuildArgs {
    /// JSON list of eligible identities, in leaf order.
    #[arg(long, env = ZKDROP_IDENTITIES_FILE, default_value = DEFAULT_IDENTITIES_FILE)]
    pub identities: PathBuf,
    /// Registry output file.
    #[arg(long, env = ZKDROP_REGISTRY_FILE, default_value = DEFAULT_REGISTRY_FILE)]
    pub registry_out: PathBuf,
}

/// Registry command group.
#[derive(Debug, clap::Subcommand)]
pub enum RegistryCommands {
    /// Build the membership tree over a list of identities.
    Build {
        #[command(flatten)]
        args: RegistryBuildArgs,
    },
}
