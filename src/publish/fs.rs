//! Filesystem helpers for the publish workflow.
//!
//! Two contracts live here. The clean step tolerates a missing directory;
//! the staging copy is strict: it never creates the destination directory,
//! so a copy before the compile step has run fails loudly.

use crate::error::{ManifestError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Removes the directory and its contents if it exists.
///
/// A missing directory is a no-op, not an error.
pub async fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).await?;
    }
    Ok(())
}

/// Copies a manifest file into the output directory under the same filename.
///
/// Fails if the source is missing or not a regular file, or if the output
/// directory does not exist. The output directory is deliberately not
/// created here: it is owned by the compile step.
///
/// Returns the destination path on success.
pub async fn copy_manifest(from: &Path, dist_dir: &Path) -> Result<PathBuf> {
    if !from.exists() {
        return Err(ManifestError::SourceMissing {
            path: from.to_path_buf(),
        }
        .into());
    }
    if !from.is_file() {
        return Err(ManifestError::NotAFile {
            path: from.to_path_buf(),
        }
        .into());
    }
    if !dist_dir.is_dir() {
        return Err(ManifestError::OutputDirMissing {
            path: dist_dir.to_path_buf(),
        }
        .into());
    }

    let file_name = from.file_name().ok_or_else(|| ManifestError::NotAFile {
        path: from.to_path_buf(),
    })?;
    let dest = dist_dir.join(file_name);
    fs::copy(from, &dest).await?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remove_missing_dir_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("dist");
        remove_dir_all_if_exists(&missing).await.unwrap();
        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn remove_deletes_nested_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");
        std::fs::create_dir_all(dist.join("nested")).unwrap();
        std::fs::write(dist.join("nested/stale.js"), "old").unwrap();

        remove_dir_all_if_exists(&dist).await.unwrap();
        assert!(!dist.exists());
    }

    #[tokio::test]
    async fn copy_refuses_missing_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("package.json");
        std::fs::write(&src, "{}").unwrap();
        let dist = tmp.path().join("dist");

        let err = copy_manifest(&src, &dist).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::ReleaseError::Manifest(ManifestError::OutputDirMissing { .. })
        ));
        // No partial file may appear
        assert!(!dist.exists());
    }

    #[tokio::test]
    async fn copy_refuses_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");
        std::fs::create_dir(&dist).unwrap();

        let err = copy_manifest(&tmp.path().join(".npmignore"), &dist)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ReleaseError::Manifest(ManifestError::SourceMissing { .. })
        ));
    }

    #[tokio::test]
    async fn copy_preserves_bytes_and_name() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join(".npmignore");
        std::fs::write(&src, "src/\n*.test.ts\n").unwrap();
        let dist = tmp.path().join("dist");
        std::fs::create_dir(&dist).unwrap();

        let dest = copy_manifest(&src, &dist).await.unwrap();
        assert_eq!(dest, dist.join(".npmignore"));
        assert_eq!(
            std::fs::read(&src).unwrap(),
            std::fs::read(&dest).unwrap()
        );
    }
}
