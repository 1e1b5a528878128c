//! Command line interface for relpack.
//!
//! Argument parsing, validation and command dispatch for the pipeline
//! operations.

mod args;
pub mod commands;

pub use args::{Args, Command};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    match args.command {
        Command::Spec {
            config,
            staging,
            target,
            output,
        } => commands::spec::run(&config, &staging, target, output).await,
        Command::Manifest {
            config,
            strict,
            output,
        } => commands::manifest::run(&config, strict, output).await,
        Command::Matrix { config } => commands::matrix::run(&config),
    }
}
