//! Configuration structures for packaging operations.
//!
//! This module provides the configuration types for descriptor generation:
//! package metadata, target architecture, and a builder pattern for
//! constructing validated settings.

mod arch;
mod builder;
mod core;
mod package;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use package::PackageSettings;
