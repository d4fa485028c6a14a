//! Target platform descriptors and build profiles for the YumEngine build
//! pipeline.
//!
//! A [`Platform`] describes one shared-library target: which C and C++
//! compilers to invoke, the cross-compilation triple (if any), extra compiler
//! flags, the artifact file name, and the link flags for that platform
//! family. A [`BuildProfile`] holds the per-configuration compiler flag sets
//! and directory layout (release vs. debug).

pub mod error;
pub mod platform;
pub mod profile;

pub use error::{Result, TargetError};
pub use platform::{load_platform_file, Platform};
pub use profile::BuildProfile;
