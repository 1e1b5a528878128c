//! relpack - release packaging descriptor and manifest generator.
//!
//! This binary produces RPM spec text, installed-size metadata, code-signing
//! manifests and distribution target lists for a release pipeline.

use relpack::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
