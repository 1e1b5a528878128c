//! The `spec` command: render RPM spec text for a staged payload.

use crate::config::load_package_config;
use crate::error::{CliError, RelpackError, Result};
use crate::packager::{SettingsBuilder, platform::rpm};
use std::path::{Path, PathBuf};

/// Renders the spec document and writes it to `output` or stdout.
pub async fn run(
    config: &Path,
    staging: &Path,
    target: Option<String>,
    output: Option<PathBuf>,
) -> Result<i32> {
    let package_config = load_package_config(config)?;

    let mut builder = SettingsBuilder::new()
        .staging_directory(staging)
        .package_settings(package_config.package);
    if let Some(prefix) = &package_config.install_prefix {
        builder = builder.install_prefix(prefix);
    }
    if let Some(target) = target {
        builder = builder.target(target);
    }
    let settings = builder.build().map_err(RelpackError::Packager)?;

    let rendered = rpm::generate_spec(&settings, &package_config.auxiliary_sizes).await?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, &rendered).await.map_err(|e| {
                RelpackError::Cli(CliError::ExecutionFailed {
                    command: "write_spec".to_string(),
                    reason: format!("Failed to write {}: {}", path.display(), e),
                })
            })?;
            log::info!("wrote spec to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(0)
}
