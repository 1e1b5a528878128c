//! Command implementations.

pub mod manifest;
pub mod matrix;
pub mod spec;
