//! Build the off-chain registry from a list of eligible identities.

use std::path::PathBuf;

use eyre::ensure;
use tracing::{info, instrument};
use zkdrop_core::base::{FieldRepr, IdentityKey};

use crate::common::read_json;
use crate::registry::Registry;

/// Build the registry from the JSON list of identities in `identities_file` and
/// write it to `registry_out`. Returns the membership root to commit.
///
/// # Errors
/// Returns an error if the list is empty, holds duplicates, exceeds the tree
/// capacity, or file I/O fails.
#[instrument(skip_all, fields(identities = %identities_file.display()))]
pub async fn registry_build(
    identities_file: PathBuf,
    registry_out: PathBuf,
) -> eyre::Result<FieldRepr> {
    let identities: Vec<IdentityKey> = read_json(&identities_file, "identities").await?;
    ensure!(!identities.is_empty(), "Identity list is empty");

    let count = identities.len();
    let registry = Registry::build(identities)?;
    let root = registry.membership_root().to_repr();
    info!(count, %root, "Built membership tree");

    registry.save(&registry_out).await?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::write_json;

    #[tokio::test]
    async fn rejects_duplicate_identities() {
        let dir = tempfile::tempdir().expect("tempdir");
        let list = dir.path().join("identities.json");
        let identity = IdentityKey::new([1_u8; 32]);
        write_json(&list, &vec![identity, identity])
            .await
            .expect("write list");

        let err = registry_build(list, dir.path().join("registry.json"))
            .await
            .expect_err("duplicates should be rejected");
        assert!(err.to_string().contains("more than once"));
    }

    #[tokio::test]
    async fn writes_loadable_registry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let list = dir.path().join("identities.json");
        let out = dir.path().join("registry.json");
        let identities = vec![IdentityKey::new([1_u8; 32]), IdentityKey::new([2_u8; 32])];
        write_json(&list, &identities).await.expect("write list");

        let root = registry_build(list, out.clone()).await.expect("build");
        let registry = Registry::load(&out).await.expect("load");
        assert_eq!(registry.membership_root().to_repr(), root);
        assert_eq!(registry.identities(), identities.as_slice());
    }
}
