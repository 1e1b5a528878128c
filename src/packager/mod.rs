//! Release-packaging core: descriptor and manifest generation.
//!
//! Four pure transformations composed by an external orchestrator:
//!
//! - [`compose_matrix`] - ordered list of packaging targets from named groups
//! - [`SpecDocument`] / [`assemble`] - ordered spec-document assembly from
//!   discrete fragments
//! - [`InstalledSize`] - file-size aggregation for package metadata
//! - [`build_manifest`] - signing manifest derivation from a primary file list
//!
//! No component calls another; all are invoked by the orchestrator, hold no
//! shared mutable state, and may run concurrently for independent targets.

pub mod distro;
pub mod document;
pub mod error;
pub mod platform;
pub mod settings;
pub mod signing;
pub mod size;
pub mod utils;

pub use distro::{DistributionGroup, compose_matrix};
pub use document::{FragmentKind, SpecDocument, SpecFragment, assemble};
pub use error::{Error, Result};
pub use settings::{Arch, PackageSettings, Settings, SettingsBuilder};
pub use signing::{
    DerivationPolicy, SigningCategory, SigningEntry, SigningManifest, build_manifest,
    pdb_companion,
};
pub use size::{FileSizeFact, InstalledSize, to_kilobytes, total_size_bytes};
