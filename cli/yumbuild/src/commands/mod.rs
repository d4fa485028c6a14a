//! CLI subcommand implementations.

pub mod build;
pub mod clean;
pub mod doctor;
pub mod package;
pub mod target;
