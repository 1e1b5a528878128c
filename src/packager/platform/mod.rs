//! Platform-specific descriptor producers.

pub mod rpm;
