//! File system utilities for packaging.
//!
//! Provides the staging-directory scan that turns the prepared payload tree
//! into `(path, byte length)` facts for size aggregation and file listing.

use crate::bail;
use crate::packager::error::{Error, Result};
use crate::packager::size::FileSizeFact;
use std::path::Path;

/// Recursively scans the staging directory into size facts.
///
/// Paths in the returned facts are relative to the staging root and sorted
/// lexicographically so descriptor output is deterministic across runs.
/// Symlinks are not followed.
///
/// # Errors
///
/// Fails when the staging directory does not exist, is not a directory, or
/// cannot be traversed.
pub async fn scan_staging_directory(staging_dir: &Path) -> Result<Vec<FileSizeFact>> {
    if !staging_dir.exists() {
        bail!("{staging_dir:?} does not exist");
    }
    if !staging_dir.is_dir() {
        bail!("{staging_dir:?} is not a directory");
    }

    // Clone for move into blocking closure
    let root = staging_dir.to_path_buf();

    // Offload blocking traversal to the dedicated thread pool
    tokio::task::spawn_blocking(move || {
        let mut facts = Vec::new();

        for entry in walkdir::WalkDir::new(&root).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            debug_assert!(entry.path().starts_with(&root));
            let rel_path = entry
                .path()
                .strip_prefix(&root)
                .map_err(|e| Error::GenericError(format!("path outside staging root: {e}")))?;

            let metadata = entry.metadata()?;
            log::debug!("staged file {} ({} bytes)", rel_path.display(), metadata.len());
            facts.push(FileSizeFact::new(rel_path, metadata.len()));
        }

        // Sort by path for deterministic ordering
        facts.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(facts)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Staging scan task panicked: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scans_nested_files_with_relative_sorted_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("modules")).unwrap();
        std::fs::write(dir.path().join("pwsh"), vec![0u8; 500]).unwrap();
        std::fs::write(dir.path().join("modules/core.dll"), vec![0u8; 1000]).unwrap();

        let facts = scan_staging_directory(dir.path()).await.unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0], FileSizeFact::new("modules/core.dll", 1000));
        assert_eq!(facts[1], FileSizeFact::new("pwsh", 500));
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_staging_directory(&missing).await.is_err());
    }

    #[tokio::test]
    async fn empty_directory_yields_no_facts() {
        let dir = tempfile::tempdir().unwrap();
        let facts = scan_staging_directory(dir.path()).await.unwrap();
        assert!(facts.is_empty());
    }
}
