//! Configuration documents consumed by the packaging pipeline.
//!
//! Each document is read and parsed exactly once; extraction then works on
//! the parsed value with no additional I/O. The core components never parse
//! configuration themselves — they receive the already-extracted values.

use crate::error::{CliError, RelpackError, Result};
use crate::packager::{DistributionGroup, PackageSettings};
use std::path::{Path, PathBuf};

/// Extensions marking a signing source as a binary or executable.
const PRIMARY_EXTENSIONS: &[&str] = &["dll", "exe"];

/// One entry of the signing configuration document.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SigningSource {
    /// Path of the file, relative to the staging root.
    pub path: PathBuf,

    /// Signing treatment label from the configuration (e.g. "authenticode").
    ///
    /// Informational; primary selection is extension-driven.
    #[serde(default)]
    pub sign_type: Option<String>,
}

/// The signing configuration document (JSON).
///
/// Lists every source file the release pipeline knows about; only entries
/// whose extension marks them as binaries/executables become primary signing
/// sources.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SigningConfig {
    /// All source files, in document order.
    pub files: Vec<SigningSource>,
}

impl SigningConfig {
    /// Extracts the ordered primary file list for manifest building.
    ///
    /// Selects entries whose extension is `.dll` or `.exe`, preserving
    /// document order.
    pub fn primary_sources(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|f| {
                f.path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| {
                        PRIMARY_EXTENSIONS
                            .iter()
                            .any(|p| ext.eq_ignore_ascii_case(p))
                    })
            })
            .map(|f| f.path.clone())
            .collect()
    }
}

/// Loads the signing configuration from a JSON document.
pub fn load_signing_config(path: &Path) -> Result<SigningConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RelpackError::Cli(CliError::ExecutionFailed {
            command: "read_signing_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// The distribution targets document (TOML).
#[derive(Debug, Clone, serde::Deserialize)]
pub struct DistroConfig {
    /// Named groups, in packaging order.
    #[serde(default)]
    pub groups: Vec<DistributionGroup>,

    /// Loose names belonging to no group, appended after all groups.
    #[serde(default)]
    pub extras: Vec<String>,
}

/// Loads the distribution targets from a TOML document.
pub fn load_distro_config(path: &Path) -> Result<DistroConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RelpackError::Cli(CliError::ExecutionFailed {
            command: "read_distro_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;
    Ok(toml::from_str(&raw)?)
}

/// The package metadata document (TOML) driving descriptor generation.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PackageConfig {
    /// Package metadata ([package] table).
    pub package: PackageSettings,

    /// Install prefix the payload lands under.
    ///
    /// Default: `/usr/local`
    #[serde(default)]
    pub install_prefix: Option<PathBuf>,

    /// Auxiliary byte counts added to the installed size (e.g. a compressed
    /// manual page installed outside the staging tree).
    #[serde(default)]
    pub auxiliary_sizes: Vec<u64>,
}

/// Loads package metadata from a TOML document.
pub fn load_package_config(path: &Path) -> Result<PackageConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RelpackError::Cli(CliError::ExecutionFailed {
            command: "read_package_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;
    Ok(toml::from_str(&raw)?)
}
