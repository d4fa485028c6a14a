//! `yumbuild doctor`: toolchain diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use crate::manifest::YumManifest;

/// Print toolchain diagnostic information.
pub fn run(project_dir: &Path) -> Result<()> {
    println!("=== Yumbuild Doctor ===");
    println!();

    println!("Yumbuild version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Toolchains ---");
    print_tool_status("gcc", &["--version"]);
    print_tool_status("g++", &["--version"]);
    print_tool_status("zig", &["version"]);
    println!();

    println!("--- Peripheral Tools ---");
    print_tool_status("lua", &["-v"]);
    print_tool_status("doxygen", &["--version"]);
    println!();

    println!("--- Project Status ---");
    match YumManifest::find_and_load(project_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  yum.toml: found at {}", dir.display());
            println!("  Project:  {}", manifest.project_name());
            match manifest.platforms(&dir) {
                Ok(platforms) => println!("  Targets:  {}", platforms.len()),
                Err(e) => println!("  Targets:  error: {e:#}"),
            }
        }
        Ok(None) => {
            println!("  yum.toml: not found (using defaults)");
            println!("  Targets:  {}", yum_targets::Platform::builtin().len());
        }
        Err(e) => {
            println!("  yum.toml: error: {e:#}");
        }
    }

    Ok(())
}

fn print_tool_status(name: &str, args: &[&str]) {
    match Command::new(name).args(args).output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {name}: {first_line}");
        }
        Err(_) => {
            println!("  {name}: not found");
        }
    }
}
