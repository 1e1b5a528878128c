//! Package metadata and configuration.

/// Package metadata used across descriptor generation.
///
/// # Examples
///
/// ```no_run
/// use relpack::packager::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "pwsh".into(),
///     version: "7.4.0".into(),
///     description: "Automation and configuration shell".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PackageSettings {
    /// Package name as it appears in the descriptor's `Name` tag.
    pub product_name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "7.4.0", "7.5.0-preview.2"
    pub version: String,

    /// Brief description for the descriptor's `Summary`/`%description`.
    pub description: String,

    /// Release number appended to the version.
    ///
    /// Incremented for packaging changes without version bumps.
    ///
    /// Default: "1"
    #[serde(default = "default_release")]
    pub release: String,

    /// SPDX license identifier.
    ///
    /// Default: None
    #[serde(default)]
    pub license: Option<String>,

    /// Vendor string for the descriptor's `Vendor` tag.
    ///
    /// Default: None
    #[serde(default)]
    pub vendor: Option<String>,

    /// Homepage URL.
    ///
    /// Default: None
    #[serde(default)]
    pub homepage: Option<String>,
}

fn default_release() -> String {
    "1".to_string()
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            version: String::new(),
            description: String::new(),
            release: default_release(),
            license: None,
            vendor: None,
            homepage: None,
        }
    }
}
