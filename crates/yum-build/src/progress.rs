//! Build progress observation.
//!
//! Rendering is cosmetic and lives in the CLI; the pipeline only announces
//! what it is doing. Every method has an empty default so observers
//! implement only what they show.

use std::path::Path;

use yum_targets::Platform;

/// Receives progress notifications from the orchestrator.
pub trait Reporter {
    /// A profile run is starting over `platforms` targets.
    fn profile_started(&self, _profile: &str, _platforms: usize) {}

    /// Platform `index` of `total` is starting.
    fn platform_started(&self, _platform: &Platform, _index: usize, _total: usize) {}

    /// Source `index` of `total` in the current batch is being compiled.
    fn compiling(&self, _source: &Path, _index: usize, _total: usize) {}

    /// The current platform's objects are being linked.
    fn linking(&self, _platform: &Platform) {}

    /// An artifact was written.
    fn artifact_built(&self, _path: &Path) {}
}

/// Observer that shows nothing.
pub struct NullReporter;

impl Reporter for NullReporter {}
