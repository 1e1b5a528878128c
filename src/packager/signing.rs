//! Signing manifest derivation.
//!
//! Builds the complete set of files requiring a code-signing operation: the
//! primary binaries extracted from the signing configuration, plus companion
//! files (e.g. debug symbols) derived from them by a naming rule.
//!
//! Derivation is two-phase: the companion set is computed from an immutable
//! snapshot of the primary list, then the two are combined. The rule is
//! applied exactly once per original primary entry and never to an entry that
//! is itself derived, so re-running the builder over its own output cannot
//! grow the manifest.

use super::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Why a file appears in the signing manifest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningCategory {
    /// Listed directly in the signing configuration.
    Primary,
    /// Derived from a primary entry by the companion rule.
    Derived,
}

/// One file requiring a code-signing operation.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SigningEntry {
    /// Path of the file to sign.
    pub path: PathBuf,

    /// Whether the entry is primary or derived.
    pub category: SigningCategory,
}

/// What to do when the companion rule fails for a primary path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DerivationPolicy {
    /// Log a warning and contribute no companion for that entry.
    #[default]
    Lenient,
    /// Abort manifest construction entirely.
    Strict,
}

/// The complete signing manifest for one build.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct SigningManifest {
    entries: Vec<SigningEntry>,
}

impl SigningManifest {
    /// Returns all entries. Each primary entry precedes its own derived
    /// entry; ordering is otherwise not load-bearing.
    pub fn entries(&self) -> &[SigningEntry] {
        &self.entries
    }

    /// Returns the paths of primary entries only, in manifest order.
    pub fn primary_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|e| e.category == SigningCategory::Primary)
            .map(|e| e.path.clone())
            .collect()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the manifest holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the signing manifest from the already-extracted primary file list.
///
/// `companion_rule` maps a primary path to its companion path, `Ok(None)`
/// when the entry has no companion, or `Err` when derivation fails. The rule
/// runs once per primary path, over a snapshot taken before any entry is
/// added, so derived entries are never re-derived.
///
/// # Errors
///
/// Under [`DerivationPolicy::Strict`] a failing rule aborts construction
/// with [`Error::Derivation`]. Under [`DerivationPolicy::Lenient`] the
/// failure is logged and that entry contributes no companion.
pub fn build_manifest<F>(
    primary_sources: &[PathBuf],
    companion_rule: F,
    policy: DerivationPolicy,
) -> Result<SigningManifest>
where
    F: Fn(&Path) -> Result<Option<PathBuf>>,
{
    // Phase one: derive companions from the complete primary list.
    let mut companions: Vec<Option<PathBuf>> = Vec::with_capacity(primary_sources.len());
    for primary in primary_sources {
        match companion_rule(primary) {
            Ok(companion) => companions.push(companion),
            Err(e) => match policy {
                DerivationPolicy::Strict => {
                    return Err(Error::Derivation {
                        path: primary.clone(),
                        reason: e.to_string(),
                    });
                }
                DerivationPolicy::Lenient => {
                    log::warn!(
                        "skipping companion for {}: {}",
                        primary.display(),
                        e
                    );
                    companions.push(None);
                }
            },
        }
    }

    // Phase two: combine, each primary followed by its companion.
    let mut entries = Vec::with_capacity(primary_sources.len() * 2);
    for (primary, companion) in primary_sources.iter().zip(companions) {
        entries.push(SigningEntry {
            path: primary.clone(),
            category: SigningCategory::Primary,
        });
        if let Some(path) = companion {
            entries.push(SigningEntry {
                path,
                category: SigningCategory::Derived,
            });
        }
    }

    Ok(SigningManifest { entries })
}

/// The stock companion rule: a trailing `.dll` extension becomes `.pdb`.
///
/// Paths with any other extension have no companion.
pub fn pdb_companion(path: &Path) -> Result<Option<PathBuf>> {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("dll") => {
            Ok(Some(path.with_extension("pdb")))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn derives_one_companion_per_dll() {
        let primary = paths(&["bin/app.dll", "bin/app.exe"]);
        let manifest =
            build_manifest(&primary, pdb_companion, DerivationPolicy::Lenient).unwrap();

        assert_eq!(manifest.len(), 3);
        assert_eq!(
            manifest.entries(),
            &[
                SigningEntry {
                    path: PathBuf::from("bin/app.dll"),
                    category: SigningCategory::Primary,
                },
                SigningEntry {
                    path: PathBuf::from("bin/app.pdb"),
                    category: SigningCategory::Derived,
                },
                SigningEntry {
                    path: PathBuf::from("bin/app.exe"),
                    category: SigningCategory::Primary,
                },
            ]
        );
    }

    #[test]
    fn companion_count_never_exceeds_primary_count() {
        let primary = paths(&["a.dll", "b.dll", "c.dll", "d.exe"]);
        let manifest =
            build_manifest(&primary, pdb_companion, DerivationPolicy::Lenient).unwrap();
        let derived = manifest
            .entries()
            .iter()
            .filter(|e| e.category == SigningCategory::Derived)
            .count();
        assert!(derived <= primary.len());
        assert_eq!(derived, 3);
    }

    #[test]
    fn rebuilding_from_same_inputs_is_idempotent() {
        let primary = paths(&["bin/app.dll", "bin/helper.dll"]);
        let first = build_manifest(&primary, pdb_companion, DerivationPolicy::Lenient).unwrap();
        let second = build_manifest(&primary, pdb_companion, DerivationPolicy::Lenient).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rebuilding_from_own_primary_subset_does_not_grow() {
        let primary = paths(&["bin/app.dll", "bin/app.exe"]);
        let first = build_manifest(&primary, pdb_companion, DerivationPolicy::Lenient).unwrap();

        // Derived entries are .pdb, which the rule maps to no companion, so
        // even feeding the full output back through cannot explode; feeding
        // the primary subset back must reproduce the manifest exactly.
        let again =
            build_manifest(&first.primary_paths(), pdb_companion, DerivationPolicy::Lenient)
                .unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn lenient_policy_skips_failing_entries() {
        let primary = paths(&["good.dll", "bad.dll"]);
        let rule = |p: &Path| {
            if p.starts_with("bad.dll") {
                Err(Error::GenericError("no symbol file".to_string()))
            } else {
                pdb_companion(p)
            }
        };

        let manifest = build_manifest(&primary, rule, DerivationPolicy::Lenient).unwrap();
        // Both primaries present, only the good one gained a companion.
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.primary_paths(), paths(&["good.dll", "bad.dll"]));
    }

    #[test]
    fn strict_policy_aborts_on_failure() {
        let primary = paths(&["good.dll", "bad.dll"]);
        let rule = |p: &Path| {
            if p.starts_with("bad.dll") {
                Err(Error::GenericError("no symbol file".to_string()))
            } else {
                pdb_companion(p)
            }
        };

        let err = build_manifest(&primary, rule, DerivationPolicy::Strict).unwrap_err();
        assert!(matches!(err, Error::Derivation { .. }));
    }

    #[test]
    fn empty_primary_list_yields_empty_manifest() {
        let manifest = build_manifest(&[], pdb_companion, DerivationPolicy::Strict).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn pdb_rule_is_case_insensitive_and_extension_gated() {
        assert_eq!(
            pdb_companion(Path::new("App.DLL")).unwrap(),
            Some(PathBuf::from("App.pdb"))
        );
        assert_eq!(pdb_companion(Path::new("app.so")).unwrap(), None);
        assert_eq!(pdb_companion(Path::new("noext")).unwrap(), None);
    }
}
