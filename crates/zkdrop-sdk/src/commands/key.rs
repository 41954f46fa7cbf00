//! Signing key generation.

use std::path::PathBuf;

use rand_core::OsRng;
use redjubjub::{SigningKey, SpendAuth};
use tracing::info;
use zeroize::Zeroize as _;
use zkdrop_contract::auth::identity_of;
use zkdrop_core::base::IdentityKey;

use super::sensitive_output::write_sensitive_output;

/// Generate a signing key, write it as hex to `output`, and return its identity.
///
/// The identity is also written to `public_output` when given.
///
/// # Errors
/// Returns an error if file I/O fails.
pub async fn key_generate(
    output: PathBuf,
    public_output: Option<PathBuf>,
) -> eyre::Result<IdentityKey> {
    info!(file = ?output, "Generating signing key...");
    let key = SigningKey::<SpendAuth>::new(OsRng);
    let identity = identity_of(&key);

    let mut bytes: [u8; 32] = key.into();
    let mut hex = format!("{}\n", hex::encode(bytes));
    bytes.zeroize();
    let written = write_sensitive_output(&output, &hex).await;
    hex.zeroize();
    written?;
    info!(file = ?output, %identity, "Signing key written");

    if let Some(path) = public_output {
        tokio::fs::write(&path, format!("{identity}\n")).await?;
        info!(file = ?path, "Identity written");
    }
    Ok(identity)
}
