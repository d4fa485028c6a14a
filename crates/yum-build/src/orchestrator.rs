//! Per-profile build orchestration.
//!
//! One pass per (profile × platform) pair: prepare the directories once per
//! profile, discover sources once per profile, then compile and link each
//! platform in table order. The first failing step aborts the run; platforms
//! already linked keep their artifacts.

use std::path::{Path, PathBuf};

use yum_targets::{BuildProfile, Platform};

use crate::compile::{compile_all, CompileSpec};
use crate::discover;
use crate::error::{BuildError, Result};
use crate::link::{link, LinkSpec};
use crate::progress::Reporter;
use crate::runner::CommandRunner;

/// Outcome of one successful profile run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Profile name ("release" or "debug").
    pub profile: String,
    /// One artifact per platform, in table order.
    pub artifacts: Vec<PathBuf>,
}

/// Drives the compile/link loop over a platform table.
pub struct Orchestrator<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    project_root: PathBuf,
    source_root: Option<PathBuf>,
    exclude: Option<String>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a dyn Reporter) -> Self {
        Self {
            runner,
            reporter,
            project_root: PathBuf::from("."),
            source_root: None,
            exclude: None,
        }
    }

    /// Base directory for the output and object directories.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Discover sources under `root` instead of the project root.
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    /// Skip source paths containing `needle` (e.g. a docs output directory).
    pub fn with_exclusion(mut self, needle: impl Into<String>) -> Self {
        self.exclude = Some(needle.into());
        self
    }

    /// Build every platform for one profile.
    ///
    /// The profile's output and object directories are cleared and recreated
    /// before the first platform, so stale artifacts never survive a re-run,
    /// and later platforms never destroy earlier ones.
    pub fn build_profile(
        &self,
        platforms: &[Platform],
        profile: &BuildProfile,
    ) -> Result<BuildReport> {
        let output_dir = self.project_root.join(&profile.output_dir);
        let obj_dir = self.project_root.join(&profile.obj_dir);
        recreate_dir(&output_dir)?;
        recreate_dir(&obj_dir)?;

        let source_root = self.source_root.as_deref().unwrap_or(&self.project_root);
        let exclude = self.exclude.as_deref();
        let c_sources = discover::sources(source_root, ".c", exclude);
        let cpp_sources = discover::sources(source_root, ".cpp", exclude);

        self.reporter.profile_started(&profile.name, platforms.len());

        let mut artifacts = Vec::with_capacity(platforms.len());
        let total = platforms.len();
        for (index, platform) in platforms.iter().enumerate() {
            self.reporter.platform_started(platform, index + 1, total);

            let triple = platform.triple.as_deref();
            let c_objects = compile_all(
                self.runner,
                self.reporter,
                &CompileSpec {
                    compiler: &platform.cc,
                    flags: &profile.cflags,
                    triple,
                    extra_flags: &platform.extra_flags,
                    obj_dir: &obj_dir,
                },
                &c_sources,
            )?;
            let cpp_objects = compile_all(
                self.runner,
                self.reporter,
                &CompileSpec {
                    compiler: &platform.cxx,
                    flags: &profile.cxxflags,
                    triple,
                    extra_flags: &platform.extra_flags,
                    obj_dir: &obj_dir,
                },
                &cpp_sources,
            )?;

            // C objects first, then C++: either order links, but the command
            // must be reproducible.
            let mut objects = c_objects;
            objects.extend(cpp_objects);

            self.reporter.linking(platform);
            let artifact = link(
                self.runner,
                &LinkSpec {
                    driver: &platform.cxx,
                    link_flags: &platform.link_flags,
                    triple,
                    extra_flags: &platform.extra_flags,
                    output_dir: &output_dir,
                    artifact: &platform.artifact,
                },
                &objects,
                &platform.description,
            )?;
            self.reporter.artifact_built(&artifact);
            artifacts.push(artifact);
        }

        Ok(BuildReport {
            profile: profile.name.clone(),
            artifacts,
        })
    }
}

fn recreate_dir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(BuildError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
    }
    std::fs::create_dir_all(dir).map_err(|source| BuildError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
