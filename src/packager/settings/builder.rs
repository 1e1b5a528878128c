//! Builder for constructing Settings.

use super::{PackageSettings, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use relpack::packager::{SettingsBuilder, PackageSettings};
///
/// # fn example() -> relpack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .staging_directory("staging/linux-x64")
///     .install_prefix("/opt/microsoft/powershell/7")
///     .package_settings(PackageSettings {
///         product_name: "pwsh".into(),
///         version: "7.4.0".into(),
///         description: "Automation and configuration shell".into(),
///         ..Default::default()
///     })
///     .target("x86_64-unknown-linux-gnu".into())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    staging_directory: Option<PathBuf>,
    install_prefix: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    target: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the staging directory containing the prepared payload.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn staging_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the install prefix the payload lands under.
    ///
    /// Default: `/usr/local`
    pub fn install_prefix<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.install_prefix = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the target triple.
    ///
    /// If not set, uses the `TARGET` environment variable or the current
    /// architecture.
    pub fn target(mut self, target: String) -> Self {
        self.target = Some(target);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `staging_directory`
    /// - `package_settings`
    pub fn build(self) -> crate::packager::Result<Settings> {
        use crate::packager::error::Context;

        let target = self.target.unwrap_or_else(|| {
            std::env::var("TARGET").unwrap_or_else(|_| std::env::consts::ARCH.to_string())
        });

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            self.staging_directory
                .context("staging_directory is required")?,
            self.install_prefix
                .unwrap_or_else(|| PathBuf::from("/usr/local")),
            target,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fails_without_staging_directory() {
        let result = SettingsBuilder::new()
            .package_settings(PackageSettings::default())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_fails_without_package_settings() {
        let result = SettingsBuilder::new().staging_directory("staging").build();
        assert!(result.is_err());
    }
}
