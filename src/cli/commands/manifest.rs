//! The `manifest` command: build the code-signing manifest.

use crate::config::load_signing_config;
use crate::error::{CliError, RelpackError, Result};
use crate::packager::{DerivationPolicy, build_manifest, pdb_companion};
use std::path::{Path, PathBuf};

/// Builds the manifest from the signing configuration and emits it as JSON.
pub async fn run(config: &Path, strict: bool, output: Option<PathBuf>) -> Result<i32> {
    let signing_config = load_signing_config(config)?;
    let primary_sources = signing_config.primary_sources();

    let policy = if strict {
        DerivationPolicy::Strict
    } else {
        DerivationPolicy::Lenient
    };

    let manifest = build_manifest(&primary_sources, pdb_companion, policy)?;
    log::info!(
        "signing manifest: {} entries from {} primary sources",
        manifest.len(),
        primary_sources.len()
    );

    let rendered = serde_json::to_string_pretty(&manifest)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, &rendered).await.map_err(|e| {
                RelpackError::Cli(CliError::ExecutionFailed {
                    command: "write_manifest".to_string(),
                    reason: format!("Failed to write {}: {}", path.display(), e),
                })
            })?;
            log::info!("wrote manifest to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(0)
}
