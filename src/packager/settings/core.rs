//! Core Settings struct and implementations.

use super::{Arch, PackageSettings};
use std::path::{Path, PathBuf};

/// Main settings for descriptor generation.
///
/// Central configuration for one packaging run, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). Contains package metadata,
/// the staging directory holding the prepared payload, and the target triple
/// used for architecture detection.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Staging directory containing the fully-prepared package payload.
    staging_directory: PathBuf,

    /// Install prefix the payload lands under (e.g. `/opt/microsoft/powershell/7`).
    install_prefix: PathBuf,

    /// Target triple (e.g. "x86_64-unknown-linux-gnu").
    target: String,
}

impl Settings {
    /// Returns the package name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the release number string.
    pub fn release(&self) -> &str {
        &self.package.release
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the staging directory holding the prepared payload.
    pub fn staging_directory(&self) -> &Path {
        &self.staging_directory
    }

    /// Returns the install prefix the payload lands under.
    pub fn install_prefix(&self) -> &Path {
        &self.install_prefix
    }

    /// Returns the SPDX license identifier, if set.
    pub fn license(&self) -> Option<&str> {
        self.package.license.as_deref()
    }

    /// Returns the vendor string, if set.
    pub fn vendor(&self) -> Option<&str> {
        self.package.vendor.as_deref()
    }

    /// Returns the homepage URL, if set.
    pub fn homepage(&self) -> Option<&str> {
        self.package.homepage.as_deref()
    }

    /// Detects the binary architecture from the target triple.
    pub fn binary_arch(&self) -> Arch {
        if self.target.starts_with("x86_64") {
            Arch::X86_64
        } else if self.target.starts_with('i') {
            Arch::X86
        } else if self.target.starts_with("aarch64") {
            Arch::AArch64
        } else if self.target.starts_with("arm") && self.target.ends_with("hf") {
            Arch::Armhf
        } else if self.target.starts_with("arm") {
            Arch::Armel
        } else if self.target.starts_with("riscv64") {
            Arch::Riscv64
        } else {
            Arch::X86_64 // fallback
        }
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        staging_directory: PathBuf,
        install_prefix: PathBuf,
        target: String,
    ) -> Self {
        Self {
            package,
            staging_directory,
            install_prefix,
            target,
        }
    }
}
