//! `yumbuild target`: platform listing and description.

use anyhow::{bail, Result};
use yum_targets::Platform;

/// List the builtin platform table in build order.
pub fn list() -> Result<()> {
    println!("Built-in platforms:");
    println!();
    for platform in Platform::builtin() {
        println!(
            "  {:<18} {:<18} {}",
            platform.name, platform.description, platform.artifact
        );
    }
    println!();
    println!("Use 'yumbuild target describe <name>' for details.");
    Ok(())
}

/// Describe one platform in detail, or as TOML with `--format toml`.
pub fn describe(name: &str, format: Option<&str>) -> Result<()> {
    let platform = match Platform::resolve(name) {
        Some(p) => p,
        None => bail!("unknown target: '{name}'. Use 'yumbuild target list' to see available targets."),
    };

    if format == Some("toml") {
        print!("{}", toml::to_string(&platform)?);
        return Ok(());
    }
    if let Some(other) = format {
        bail!("unknown format: '{other}'. Choose: toml");
    }

    println!("=== Platform: {} ===", platform.name);
    println!("Description:  {}", platform.description);
    match &platform.triple {
        Some(triple) => println!("Triple:       {triple}"),
        None => println!("Triple:       (native host build)"),
    }
    println!("C compiler:   {}", platform.cc);
    println!("C++ compiler: {}", platform.cxx);
    if !platform.extra_flags.is_empty() {
        println!("Extra flags:  {}", platform.extra_flags);
    }
    println!("Artifact:     {}", platform.artifact);
    println!("Link flags:   {}", platform.link_flags);
    Ok(())
}
