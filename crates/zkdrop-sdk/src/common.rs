//! CLI-independent configuration types and JSON file helpers.

use std::path::{Path, PathBuf};

use eyre::Context as _;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use zkdrop_contract::{Airdrop, AirdropState};
use zkdrop_core::schema::config::AirdropConfiguration;
use zkdrop_core::schema::state::ContractStateSnapshot;

/// Files holding a deployed contract.
#[derive(Debug, Clone)]
pub struct ContractFiles {
    /// Airdrop configuration JSON file.
    pub config: PathBuf,
    /// Contract state JSON file.
    pub state: PathBuf,
}

impl ContractFiles {
    /// Load the configuration and state into a contract instance.
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or parsed.
    pub async fn load(&self) -> eyre::Result<Airdrop> {
        let config: AirdropConfiguration = read_json(&self.config, "airdrop configuration").await?;
        let snapshot: ContractStateSnapshot = read_json(&self.state, "contract state").await?;
        let state = AirdropState::try_from(&snapshot).context("Invalid contract state")?;
        Ok(Airdrop::from_parts(config, state))
    }

    /// Persist the contract state.
    ///
    /// # Errors
    /// Returns an error if the state file cannot be written.
    pub async fn save_state(&self, airdrop: &Airdrop) -> eyre::Result<()> {
        write_json(&self.state, &airdrop.state().to_snapshot()).await?;
        info!(file = ?self.state, "Contract state saved");
        Ok(())
    }
}

/// Read and parse a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> eyre::Result<T> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {what} JSON"))
}

/// Write a value as pretty JSON.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
