//! Shared utilities for packaging operations.

pub mod fs;
