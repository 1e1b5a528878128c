//! Installed-size aggregation for package metadata.
//!
//! Sums file-size facts from a staging-directory scan plus named auxiliary
//! sizes (e.g. a compressed manual page installed outside the staging tree)
//! into the installed-size fields packaging tools expect. Kilobyte values use
//! ceiling division: package metadata must never under-report size.

use super::error::{Error, Result};
use std::path::PathBuf;

/// One `(path, byte length)` fact, from a filesystem scan or supplied
/// directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSizeFact {
    /// Path of the file, relative to the staging root when scanned.
    pub path: PathBuf,

    /// File length in bytes.
    pub byte_length: u64,
}

impl FileSizeFact {
    /// Creates a fact from a path and byte length.
    pub fn new(path: impl Into<PathBuf>, byte_length: u64) -> Self {
        Self {
            path: path.into(),
            byte_length,
        }
    }

    /// Creates a fact from a signed length, as deserialized from external
    /// tooling output.
    ///
    /// # Errors
    ///
    /// Returns a validation error for negative lengths; callers must
    /// guarantee non-negative sizes and a negative value means the input is
    /// corrupt, not that the file is empty.
    pub fn from_signed(path: impl Into<PathBuf>, byte_length: i64) -> Result<Self> {
        let path = path.into();
        if byte_length < 0 {
            return Err(Error::Validation {
                reason: format!(
                    "negative file length {} for {}",
                    byte_length,
                    path.display()
                ),
            });
        }
        Ok(Self {
            path,
            byte_length: byte_length as u64,
        })
    }
}

/// The aggregated installed size of one package payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstalledSize {
    /// Total payload size in bytes.
    pub bytes: u64,

    /// Total payload size in kilobytes, rounded up.
    pub kilobytes: u64,
}

impl InstalledSize {
    /// Aggregates primary facts and auxiliary byte counts into one total.
    pub fn calculate(primary_facts: &[FileSizeFact], auxiliary: &[u64]) -> Self {
        let bytes = total_size_bytes(primary_facts, auxiliary);
        Self {
            bytes,
            kilobytes: to_kilobytes(bytes),
        }
    }
}

/// Sums all primary file lengths plus all auxiliary byte counts.
///
/// Zero files and zero auxiliary entries yield 0.
pub fn total_size_bytes(primary_facts: &[FileSizeFact], auxiliary: &[u64]) -> u64 {
    let primary: u64 = primary_facts.iter().map(|f| f.byte_length).sum();
    let aux: u64 = auxiliary.iter().sum();
    primary + aux
}

/// Converts bytes to kilobytes with ceiling rounding.
///
/// The smallest integer not less than `bytes / 1024` — never floor, never
/// round-to-nearest.
pub fn to_kilobytes(bytes: u64) -> u64 {
    bytes.div_ceil(1024)
}
