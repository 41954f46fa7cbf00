//! Signing key parsing and file utilities.

use std::path::Path;

use eyre::{Context as _, ensure};
use redjubjub::{SigningKey, SpendAuth};
use secrecy::{ExposeSecret as _, SecretBox};

/// Parse a hex-encoded 32-byte signing key.
///
/// # Errors
/// Returns an error if the hex is malformed, has the wrong length, or is not a
/// valid scalar encoding.
pub fn parse_signing_key_hex(key_hex: &str) -> eyre::Result<SigningKey<SpendAuth>> {
    let key_bytes =
        zeroize::Zeroizing::new(hex::decode(key_hex).context("Invalid hex signing key")?);

    ensure!(
        key_bytes.len() == 32,
        "Signing key must be exactly 32 bytes (64 hex characters), got {} bytes",
        key_bytes.len()
    );

    let array: [u8; 32] = key_bytes
        .as_slice()
        .try_into()
        .map_err(|_| eyre::eyre!("Signing key must be exactly 32 bytes"))?;
    let secret = SecretBox::new(Box::new(array));

    SigningKey::<SpendAuth>::try_from(*secret.expose_secret())
        .map_err(|_| eyre::eyre!("Signing key is not a valid scalar"))
}

/// Read a signing key file containing hex.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub async fn read_signing_key_file(path: &Path) -> eyre::Result<SigningKey<SpendAuth>> {
    let key_hex = zeroize::Zeroizing::new(
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read signing key file {}", path.display()))?,
    );
    parse_signing_key_hex(key_hex.trim())
}
