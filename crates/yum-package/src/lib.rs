//! Zip packaging of built YumEngine artifacts.
//!
//! Two modes: bundle one output root with paths kept relative to it, or
//! bundle several roots into one archive with every entry prefixed by its
//! root's base name so debug and release files cannot collide. Archives are
//! always written fresh; there are no append semantics.

pub mod archive;
pub mod error;

pub use archive::{bundle, bundle_combined};
pub use error::{PackageError, Result};
