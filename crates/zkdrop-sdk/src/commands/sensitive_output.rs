//! Helpers for writing sensitive local output files.

use std::path::Path;

use tokio::io::AsyncWriteExt as _;

/// Write a sensitive output file.
///
/// On Unix this enforces owner-only permissions (`0o600`), also when the file
/// already existed with wider permissions.
///
/// # Errors
/// Returns an error if the file cannot be created, written, flushed, or permission-adjusted.
pub(super) async fn write_sensitive_output(path: &Path, contents: &str) -> eyre::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;

        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt as _;

    use super::*;

    #[tokio::test]
    async fn output_is_owner_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("secret.txt");
        tokio::fs::write(&path, "old").await.expect("seed file");
        tokio::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))
            .await
            .expect("widen permissions");

        write_sensitive_output(&path, "new\n").await.expect("write");

        let meta = tokio::fs::metadata(&path).await.expect("metadata");
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
        assert_eq!(tokio::fs::read_to_string(&path).await.expect("read"), "new\n");
    }
}
