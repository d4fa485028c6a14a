//! `yumbuild build`: run the pipeline for every target platform.

use std::path::Path;

use anyhow::{Context, Result};
use yum_build::{Orchestrator, ProcessRunner};
use yum_targets::{BuildProfile, Platform};

use crate::commands::package;
use crate::manifest::YumManifest;
use crate::{peripheral, ui};

/// Flags of the `build` subcommand.
pub struct BuildOptions {
    /// Build only the debug profile and skip packaging.
    pub debug_only: bool,
    /// Build both profiles but skip archive creation.
    pub skip_package: bool,
    /// Restrict the build to these platform names.
    pub targets: Vec<String>,
    /// Arguments forwarded to the version-bump script.
    pub bump_args: Vec<String>,
}

/// Run the build pipeline: peripheral steps, release and debug profiles,
/// then packaging. `--debug-only` reduces this to a single debug pass.
pub fn run(project_dir: &Path, manifest: &YumManifest, options: &BuildOptions) -> Result<()> {
    let platforms = select_platforms(project_dir, manifest, &options.targets)?;
    let runner = ProcessRunner;

    peripheral::bump_version(&runner, project_dir, manifest, &options.bump_args);
    peripheral::generate_docs(&runner, project_dir, manifest);

    let reporter = ui::ConsoleReporter::new();
    let mut orchestrator = Orchestrator::new(&runner, &reporter)
        .with_project_root(project_dir)
        .with_source_root(project_dir.join(manifest.source_root()));
    if let Some(needle) = manifest.exclude() {
        orchestrator = orchestrator.with_exclusion(needle);
    }

    if !options.debug_only {
        ui::header("BUILD: RELEASE");
        orchestrator
            .build_profile(&platforms, &BuildProfile::release())
            .context("release build aborted")?;
    }

    ui::header("BUILD: DEBUG");
    orchestrator
        .build_profile(&platforms, &BuildProfile::debug())
        .context("debug build aborted")?;

    ui::success("\nALL BUILDS COMPLETED SUCCESSFULLY.");

    if !options.debug_only && !options.skip_package {
        package::write_archives(project_dir, manifest)?;
    }

    Ok(())
}

fn select_platforms(
    project_dir: &Path,
    manifest: &YumManifest,
    requested: &[String],
) -> Result<Vec<Platform>> {
    let available = manifest.platforms(project_dir)?;
    if requested.is_empty() {
        return Ok(available);
    }
    let mut selected = Vec::with_capacity(requested.len());
    for name in requested {
        let platform = available
            .iter()
            .find(|p| &p.name == name)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown target: '{name}'. Use 'yumbuild target list' to see available targets."
                )
            })?;
        selected.push(platform);
    }
    Ok(selected)
}
