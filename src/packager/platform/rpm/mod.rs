//! RPM spec descriptor generation.
//!
//! Produces the ordered fragments of an RPM spec document from settings and
//! staged-payload facts, then hands them to the assembler. Variable
//! substitution (name, version, architecture, installed size) happens here;
//! the assembler only joins.

mod template;

use crate::packager::{
    document::{FragmentKind, SpecFragment, assemble},
    error::{Error, Result},
    settings::Settings,
    size::{FileSizeFact, InstalledSize},
    utils::fs::scan_staging_directory,
};
use handlebars::Handlebars;
use std::collections::BTreeMap;

/// Produces the spec fragments for one package, in final output order.
///
/// `facts` lists the staged payload (paths relative to the staging root) and
/// `size` the aggregated installed size to report.
///
/// # Errors
///
/// Returns a validation error when the version string is not valid semver,
/// and a template error when preamble rendering fails.
pub fn spec_fragments(
    settings: &Settings,
    facts: &[FileSizeFact],
    size: InstalledSize,
) -> Result<Vec<SpecFragment>> {
    // RPM rejects malformed version tags at build time; catch it here where
    // the message can name the offending value.
    semver::Version::parse(settings.version_string()).map_err(|e| Error::Validation {
        reason: format!(
            "version {:?} is not valid semver: {}",
            settings.version_string(),
            e
        ),
    })?;

    let mut fragments = Vec::with_capacity(6);

    fragments.push(SpecFragment::new(
        FragmentKind::Header,
        render_header(settings)?,
    ));

    fragments.push(SpecFragment::new(
        FragmentKind::BuildArch,
        format!("BuildArch: {}", settings.binary_arch().rpm_arch()),
    ));

    fragments.push(SpecFragment::new(
        FragmentKind::Macros,
        format!(
            "%define _prefix {}\n%define __installed_size_kb {}",
            settings.install_prefix().display(),
            size.kilobytes
        ),
    ));

    fragments.push(SpecFragment::new(
        FragmentKind::Description,
        format!("%description\n{}", settings.description()),
    ));

    fragments.push(SpecFragment::new(
        FragmentKind::FileList,
        files_section(settings, facts),
    ));

    Ok(fragments)
}

/// Renders the full spec text for the staged payload.
///
/// Scans the staging directory, aggregates installed size (plus any
/// auxiliary byte counts, e.g. a compressed manual page installed outside
/// the staging tree), produces the fragments and assembles them.
pub async fn generate_spec(settings: &Settings, auxiliary: &[u64]) -> Result<String> {
    let facts = scan_staging_directory(settings.staging_directory()).await?;
    let size = InstalledSize::calculate(&facts, auxiliary);

    log::info!(
        "{}: {} staged files, installed size {} bytes ({} KB)",
        settings.product_name(),
        facts.len(),
        size.bytes,
        size.kilobytes
    );

    let fragments = spec_fragments(settings, &facts, size)?;
    Ok(assemble(fragments))
}

/// Renders the preamble fragment from the header template.
fn render_header(settings: &Settings) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let mut data = BTreeMap::new();
    data.insert("product_name", settings.product_name().to_string());
    data.insert("version", settings.version_string().to_string());
    data.insert("release", settings.release().to_string());
    data.insert("summary", settings.description().to_string());

    if let Some(license) = settings.license() {
        data.insert("license", license.to_string());
    }
    if let Some(vendor) = settings.vendor() {
        data.insert("vendor", vendor.to_string());
    }
    if let Some(homepage) = settings.homepage() {
        data.insert("homepage", homepage.to_string());
    }

    handlebars
        .register_template_string("spec_header", template::SPEC_HEADER_TEMPLATE)
        .map_err(|e| Error::Template(format!("failed to register spec header template: {e}")))?;

    handlebars
        .render("spec_header", &data)
        .map_err(|e| Error::Template(format!("failed to render spec header: {e}")))
}

/// Builds the `%files` section from the staged payload listing.
///
/// Each staged path is emitted under the install prefix. Collected first,
/// joined once.
fn files_section(settings: &Settings, facts: &[FileSizeFact]) -> String {
    let mut lines = Vec::with_capacity(facts.len() + 1);
    lines.push("%files".to_string());
    for fact in facts {
        lines.push(format!(
            "{}/{}",
            settings.install_prefix().display(),
            fact.path.display()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::{PackageSettings, SettingsBuilder};

    fn settings() -> Settings {
        SettingsBuilder::new()
            .staging_directory("staging/linux-x64")
            .install_prefix("/opt/microsoft/powershell/7")
            .package_settings(PackageSettings {
                product_name: "pwsh".into(),
                version: "7.4.0".into(),
                description: "Automation and configuration shell".into(),
                license: Some("MIT".into()),
                ..Default::default()
            })
            .target("x86_64-unknown-linux-gnu".into())
            .build()
            .unwrap()
    }

    #[test]
    fn header_carries_substituted_metadata() {
        let header = render_header(&settings()).unwrap();
        assert!(header.starts_with("Name: pwsh\nVersion: 7.4.0\nRelease: 1\n"));
        assert!(header.contains("License: MIT"));
        assert!(!header.contains("Vendor:"));
        assert!(!header.contains("{{"));
    }

    #[test]
    fn fragments_appear_in_descriptor_order() {
        let facts = vec![FileSizeFact::new("pwsh", 500)];
        let size = InstalledSize::calculate(&facts, &[]);
        let fragments = spec_fragments(&settings(), &facts, size).unwrap();

        let kinds: Vec<_> = fragments.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                FragmentKind::Header,
                FragmentKind::BuildArch,
                FragmentKind::Macros,
                FragmentKind::Description,
                FragmentKind::FileList,
            ]
        );
    }

    #[test]
    fn build_arch_reflects_target_triple() {
        let facts = vec![];
        let size = InstalledSize::calculate(&facts, &[]);
        let fragments = spec_fragments(&settings(), &facts, size).unwrap();
        assert_eq!(fragments[1].text(), "BuildArch: x86_64");
    }

    #[test]
    fn files_section_prefixes_staged_paths() {
        let facts = vec![
            FileSizeFact::new("pwsh", 500),
            FileSizeFact::new("modules/psreadline.dll", 1000),
        ];
        let section = files_section(&settings(), &facts);
        assert_eq!(
            section,
            "%files\n/opt/microsoft/powershell/7/pwsh\n\
             /opt/microsoft/powershell/7/modules/psreadline.dll"
        );
    }

    #[test]
    fn installed_size_macro_uses_ceiling_kilobytes() {
        let facts = vec![FileSizeFact::new("a", 500), FileSizeFact::new("b", 1000)];
        let size = InstalledSize::calculate(&facts, &[48]);
        let fragments = spec_fragments(&settings(), &facts, size).unwrap();
        assert!(fragments[2].text().contains("__installed_size_kb 2"));
    }

    #[test]
    fn invalid_version_is_rejected() {
        let bad = SettingsBuilder::new()
            .staging_directory("staging")
            .package_settings(PackageSettings {
                product_name: "pwsh".into(),
                version: "not-a-version".into(),
                description: "d".into(),
                ..Default::default()
            })
            .build()
            .unwrap();

        let err = spec_fragments(&bad, &[], InstalledSize::calculate(&[], &[])).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
