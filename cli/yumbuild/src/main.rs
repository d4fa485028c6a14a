//! Yumbuild CLI: cross-platform build pipeline for the YumEngine native
//! library.

mod commands;
mod manifest;
mod peripheral;
mod ui;

use std::process;

use clap::{Parser, Subcommand};

use manifest::YumManifest;

#[derive(Parser)]
#[command(name = "yumbuild", version, about = "Build the YumEngine native library for every target platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: version bump, docs, release + debug builds, packaging
    Build {
        /// Build only the debug profile and skip packaging
        #[arg(long)]
        debug_only: bool,
        /// Build both profiles but skip archive creation
        #[arg(long)]
        skip_package: bool,
        /// Build only the named platform (repeatable)
        #[arg(long)]
        target: Vec<String>,
        /// Argument forwarded to the version-bump script (repeatable)
        #[arg(long)]
        bump: Vec<String>,
    },
    /// Package existing build outputs into zip archives
    Package,
    /// Remove build outputs, objects, and archives
    Clean,
    /// Inspect the target platform table
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
    /// Check toolchain and project status
    Doctor,
}

#[derive(Subcommand)]
enum TargetAction {
    /// List available target platforms
    List,
    /// Show details of a target platform
    Describe {
        /// Platform name
        name: String,
        /// Output format (default: human-readable, "toml" for TOML)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (manifest, project_dir) = YumManifest::load_or_default(&cwd)?;

    match cli.command {
        Commands::Build {
            debug_only,
            skip_package,
            target,
            bump,
        } => commands::build::run(
            &project_dir,
            &manifest,
            &commands::build::BuildOptions {
                debug_only,
                skip_package,
                targets: target,
                bump_args: bump,
            },
        ),

        Commands::Package => commands::package::run(&project_dir, &manifest),

        Commands::Clean => commands::clean::run(&project_dir),

        Commands::Target { action } => match action {
            TargetAction::List => commands::target::list(),
            TargetAction::Describe { name, format } => {
                commands::target::describe(&name, format.as_deref())
            }
        },

        Commands::Doctor => commands::doctor::run(&project_dir),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::fs;

    /// Package → clean workflow over planted build outputs.
    #[test]
    fn package_clean_workflow() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("yum.toml"),
            "[project]\nname = \"workflow\"\n",
        )
        .unwrap();
        for profile in ["release", "debug"] {
            let out = dir.path().join("bin").join(profile);
            fs::create_dir_all(&out).unwrap();
            fs::write(out.join("libyum_apple.dylib"), profile).unwrap();
        }

        let (manifest, project_dir) = YumManifest::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(project_dir, dir.path());

        // Package
        commands::package::run(&project_dir, &manifest).unwrap();
        let dist = project_dir.join("dist");
        assert!(dist.join("workflow-release.zip").is_file());
        assert!(dist.join("workflow-debug.zip").is_file());
        assert!(dist.join("workflow-production.zip").is_file());

        // Clean
        commands::clean::run(&project_dir).unwrap();
        assert!(!project_dir.join("bin").exists());
        assert!(!dist.exists());
        // The manifest survives a clean.
        assert!(project_dir.join("yum.toml").is_file());
    }

    /// Packaging without build outputs fails with a helpful error.
    #[test]
    fn package_without_outputs_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (manifest, project_dir) = YumManifest::load_or_default(dir.path()).unwrap();
        assert!(commands::package::run(&project_dir, &manifest).is_err());
    }

    /// Target inspection commands cover the whole builtin table.
    #[test]
    fn target_inspection_workflow() {
        commands::target::list().unwrap();
        for platform in yum_targets::Platform::builtin() {
            commands::target::describe(&platform.name, None).unwrap();
            commands::target::describe(&platform.name, Some("toml")).unwrap();
        }
    }

    /// Manifest subset selection flows through to the build platform list.
    #[test]
    fn manifest_subset_selection() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("yum.toml"),
            "[targets]\nplatforms = [\"windows-x64\", \"windows-x86\"]\n",
        )
        .unwrap();

        let (manifest, project_dir) = YumManifest::find_and_load(dir.path()).unwrap().unwrap();
        let platforms = manifest.platforms(&project_dir).unwrap();
        assert_eq!(platforms.len(), 2);
        assert!(platforms.iter().all(|p| p.name.starts_with("windows-")));
    }
}
