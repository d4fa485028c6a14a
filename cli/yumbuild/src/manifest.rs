//! `yum.toml` manifest parsing and project configuration.
//!
//! The manifest is optional; every field has a default matching the stock
//! YumEngine source layout, so a bare checkout builds with no configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yum_targets::Platform;

/// The top-level manifest structure for a YumEngine project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct YumManifest {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Source discovery configuration.
    #[serde(default)]
    pub build: BuildConfig,
    /// Peripheral tool paths.
    #[serde(default)]
    pub scripts: ScriptsConfig,
    /// Target selection.
    #[serde(default)]
    pub targets: Option<TargetsConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
    /// Project name; used for archive file names.
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "yumengine".to_string()
}

/// Source discovery section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Root of the source tree, relative to the project directory.
    #[serde(default)]
    pub source_root: Option<String>,
    /// Substring excluding source paths from discovery. Empty disables the
    /// exclusion.
    #[serde(default)]
    pub exclude: Option<String>,
}

/// Peripheral tool paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScriptsConfig {
    /// Lua version-bump script.
    #[serde(default)]
    pub version_bump: Option<String>,
    /// Doxygen configuration file.
    #[serde(default)]
    pub doxyfile: Option<String>,
}

/// Target selection section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetsConfig {
    /// Subset of builtin platform names to build, in order.
    #[serde(default)]
    pub platforms: Vec<String>,
    /// TOML file with a custom platform table, replacing the builtin one.
    #[serde(default)]
    pub platform_file: Option<String>,
}

impl YumManifest {
    /// Search upward from `start_dir` for a `yum.toml` file, parse and return
    /// it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("yum.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: YumManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Load the manifest for `cwd`, falling back to all defaults (and `cwd`
    /// as the project directory) when none exists.
    pub fn load_or_default(cwd: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_and_load(cwd)? {
            Some((manifest, dir)) => Ok((manifest, dir)),
            None => Ok((Self::default(), cwd.to_path_buf())),
        }
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing yum.toml")
    }

    /// Project name for archive naming.
    pub fn project_name(&self) -> &str {
        &self.project.name
    }

    /// Source discovery root, relative to the project directory.
    pub fn source_root(&self) -> &str {
        self.build.source_root.as_deref().unwrap_or(".")
    }

    /// Discovery exclusion substring. Defaults to the docs output tree; an
    /// explicitly empty string disables exclusion entirely.
    pub fn exclude(&self) -> Option<&str> {
        match self.build.exclude.as_deref() {
            Some("") => None,
            Some(needle) => Some(needle),
            None => Some("docs"),
        }
    }

    /// Path of the version-bump script, relative to the project directory.
    pub fn version_bump_script(&self) -> &str {
        self.scripts.version_bump.as_deref().unwrap_or("bump-version.lua")
    }

    /// Path of the Doxygen configuration, relative to the project directory.
    pub fn doxyfile(&self) -> &str {
        self.scripts.doxyfile.as_deref().unwrap_or("Doxyfile")
    }

    /// Resolve the platform table for a build: a custom platform file wins,
    /// then a named subset of the builtin table, then the full builtin table.
    pub fn platforms(&self, project_dir: &Path) -> Result<Vec<Platform>> {
        if let Some(targets) = &self.targets {
            if let Some(file) = &targets.platform_file {
                let path = project_dir.join(file);
                let platforms = yum_targets::load_platform_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?;
                return Ok(platforms);
            }
            if !targets.platforms.is_empty() {
                let mut selected = Vec::with_capacity(targets.platforms.len());
                for name in &targets.platforms {
                    let platform = Platform::resolve(name).ok_or_else(|| {
                        anyhow::anyhow!(
                            "unknown target: '{name}'. Use 'yumbuild target list' to see available targets."
                        )
                    })?;
                    selected.push(platform);
                }
                return Ok(selected);
            }
        }
        Ok(Platform::builtin())
    }
}
