//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod claim;
mod contract;
mod inspect;
mod key;
mod registry_build;
mod sensitive_output;
mod token;
mod voucher;

pub use claim::{claim_prepare, claim_run};
pub use contract::{DeployParams, RootSource, contract_deploy, set_commitment, set_identifier};
pub use inspect::{check_inclusion, claim_status};
pub use key::key_generate;
pub use registry_build::registry_build;
pub use token::{token_balance, token_mint, token_send};
pub use voucher::voucher_sign;

/// Generates and prints the JSON schema for the `AirdropConfiguration` struct.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn contract_configuration_schema() -> eyre::Result<()> {
    let schema = schemars::schema_for!(zkdrop_core::schema::config::AirdropConfiguration);
    let schema_str = serde_json::to_string_pretty(&schema)?;
    println!("Airdrop Configuration JSON Schema:\n{schema_str}");
    Ok(())
}
