//! Error types for packaging operations.
//!
//! All packaging failures surface synchronously as typed values; no operation
//! in this module retries, since every transformation is a deterministic pure
//! function over fully-supplied inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all packaging operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or contradictory input. Never silently corrected.
    #[error("Validation error: {reason}")]
    Validation {
        /// What was wrong with the input
        reason: String,
    },

    /// A companion-rule application failed for a primary path.
    ///
    /// Only raised under [`DerivationPolicy::Strict`](crate::packager::signing::DerivationPolicy);
    /// the lenient policy logs and skips instead.
    #[error("Derivation failed for {path}: {reason}")]
    Derivation {
        /// The primary path whose companion could not be derived
        path: PathBuf,
        /// Why the rule failed
        reason: String,
    },

    /// IO errors from staging-directory access
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Template rendering errors from the fragment producer
    #[error("Template error: {0}")]
    Template(String),

    /// Generic errors with context
    #[error("{0}")]
    GenericError(String),
}

/// Bail out of a packaging function with a formatted [`enum@Error`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::Error::GenericError(format!($($arg)*)))
    };
}

/// Extension trait for attaching context to `Option` values.
pub trait Context<T> {
    /// Converts `None` into a `Validation` error with the given reason.
    fn context(self, reason: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, reason: &str) -> Result<T> {
        self.ok_or_else(|| Error::Validation {
            reason: reason.to_string(),
        })
    }
}

