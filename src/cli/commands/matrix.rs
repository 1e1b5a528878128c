//! The `matrix` command: print the composed distribution target list.

use crate::config::load_distro_config;
use crate::error::Result;
use crate::packager::compose_matrix;
use std::path::Path;

/// Composes the matrix from configuration and prints one target per line.
pub fn run(config: &Path) -> Result<i32> {
    let distro_config = load_distro_config(config)?;
    let matrix = compose_matrix(&distro_config.groups, &distro_config.extras);

    log::info!(
        "{} targets from {} groups and {} extras",
        matrix.len(),
        distro_config.groups.len(),
        distro_config.extras.len()
    );

    for name in &matrix {
        println!("{name}");
    }

    Ok(0)
}
