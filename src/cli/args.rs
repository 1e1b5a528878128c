//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release packaging descriptor and manifest generator
#[derive(Parser, Debug)]
#[command(
    name = "relpack",
    version,
    about = "Release packaging descriptor and manifest generator",
    long_about = "Produces platform package descriptors (RPM spec text), installed-size \
metadata, code-signing manifests and distribution target lists from a staged build tree \
and declarative configuration.

Usage:
  relpack spec --config package.toml --staging staging/linux-x64 --output pwsh.spec
  relpack manifest --config signing.json --output manifest.json
  relpack matrix --config distributions.toml

Exit code 0 = requested artifact was produced."
)]
pub struct Args {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render RPM spec text for a staged payload
    Spec {
        /// Package metadata document (TOML)
        #[arg(short, long, value_name = "PATH")]
        config: PathBuf,

        /// Staging directory containing the prepared payload
        #[arg(short, long, value_name = "DIR")]
        staging: PathBuf,

        /// Target triple (defaults to the TARGET env var or host arch)
        #[arg(short, long, value_name = "TRIPLE")]
        target: Option<String>,

        /// Output path for the rendered spec (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Build the code-signing manifest from a signing configuration
    Manifest {
        /// Signing configuration document (JSON)
        #[arg(short, long, value_name = "PATH")]
        config: PathBuf,

        /// Abort on companion derivation failure instead of skipping
        #[arg(long)]
        strict: bool,

        /// Output path for the manifest JSON (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the composed distribution target list
    Matrix {
        /// Distribution targets document (TOML)
        #[arg(short, long, value_name = "PATH")]
        config: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        match &self.command {
            Command::Spec { config, staging, .. } => {
                if !config.exists() {
                    return Err(format!("Config not found: {}", config.display()));
                }
                if !staging.is_dir() {
                    return Err(format!(
                        "Staging directory not found: {}",
                        staging.display()
                    ));
                }
            }
            Command::Manifest { config, .. } | Command::Matrix { config } => {
                if !config.exists() {
                    return Err(format!("Config not found: {}", config.display()));
                }
            }
        }
        Ok(())
    }
}
