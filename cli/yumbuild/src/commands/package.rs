//! `yumbuild package`: bundle build outputs into zip archives.

use std::path::Path;

use anyhow::{Context, Result};
use yum_targets::BuildProfile;

use crate::manifest::YumManifest;
use crate::ui;

/// Package existing build outputs without rebuilding.
pub fn run(project_dir: &Path, manifest: &YumManifest) -> Result<()> {
    write_archives(project_dir, manifest)
}

/// Write the three distribution archives: release, debug, and the combined
/// production bundle with entries prefixed by their profile directory.
pub fn write_archives(project_dir: &Path, manifest: &YumManifest) -> Result<()> {
    let name = manifest.project_name();
    let release_dir = project_dir.join(BuildProfile::release().output_dir);
    let debug_dir = project_dir.join(BuildProfile::debug().output_dir);
    let dist = project_dir.join("dist");

    ui::header("PACKAGING");

    let release_zip = dist.join(format!("{name}-release.zip"));
    let entries = yum_package::bundle(&release_dir, &release_zip)
        .with_context(|| format!("packaging {}", release_dir.display()))?;
    ui::success(&format!(
        "Packaged → {} ({entries} files)",
        release_zip.display()
    ));

    let debug_zip = dist.join(format!("{name}-debug.zip"));
    let entries = yum_package::bundle(&debug_dir, &debug_zip)
        .with_context(|| format!("packaging {}", debug_dir.display()))?;
    ui::success(&format!(
        "Packaged → {} ({entries} files)",
        debug_zip.display()
    ));

    let production_zip = dist.join(format!("{name}-production.zip"));
    let entries = yum_package::bundle_combined(&[release_dir, debug_dir], &production_zip)
        .context("packaging production bundle")?;
    ui::success(&format!(
        "Packaged → {} ({entries} files)",
        production_zip.display()
    ));

    Ok(())
}
