//! Release-packaging descriptor and manifest generation.
//!
//! This library provides the deterministic transformations a release
//! pipeline needs between a staged build tree and platform packaging:
//! - distribution target composition
//! - RPM spec document assembly from ordered fragments
//! - installed-size aggregation for package metadata
//! - code-signing manifest derivation
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, RelpackError, Result};
