//! `yumbuild clean`: remove build outputs.

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Remove the output, object, and archive directories.
pub fn run(project_dir: &Path) -> Result<()> {
    for name in ["bin", "temp", "dist"] {
        let path = project_dir.join(name);
        if path.exists() {
            fs::remove_dir_all(&path)?;
            println!("Removed {}", path.display());
        } else {
            println!("Already clean: {} does not exist", path.display());
        }
    }
    Ok(())
}
