//! Archive creation.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{PackageError, Result};

/// Bundle every file under `root` into a deflate-compressed zip at
/// `archive`, preserving paths relative to `root`. Any existing archive of
/// the same name is replaced. Returns the number of entries written.
pub fn bundle(root: &Path, archive: &Path) -> Result<usize> {
    require_root(root)?;
    let mut writer = open_archive(archive)?;
    let count = add_root(&mut writer, root, None)?;
    writer.finish()?;
    Ok(count)
}

/// Bundle every file under each of `roots` into one archive, prefixing each
/// entry with its root's base name (e.g. `release/libyum_linux_x64.so`).
pub fn bundle_combined(roots: &[PathBuf], archive: &Path) -> Result<usize> {
    for root in roots {
        require_root(root)?;
    }
    let mut writer = open_archive(archive)?;
    let mut count = 0;
    for root in roots {
        let prefix = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        count += add_root(&mut writer, root, Some(&prefix))?;
    }
    writer.finish()?;
    Ok(count)
}

fn open_archive(archive: &Path) -> Result<ZipWriter<File>> {
    if let Some(parent) = archive.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| PackageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let file = File::create(archive).map_err(|source| PackageError::Io {
        path: archive.to_path_buf(),
        source,
    })?;
    Ok(ZipWriter::new(file))
}

fn require_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(PackageError::MissingRoot {
            path: root.to_path_buf(),
        })
    }
}

fn add_root(writer: &mut ZipWriter<File>, root: &Path, prefix: Option<&str>) -> Result<usize> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();

    let mut count = 0;
    for path in files {
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let name = match prefix {
            Some(prefix) => format!("{prefix}/{}", entry_name(relative)),
            None => entry_name(relative),
        };
        writer.start_file(name, options)?;
        let mut input = File::open(&path).map_err(|source| PackageError::Io {
            path: path.clone(),
            source,
        })?;
        io::copy(&mut input, writer).map_err(|source| PackageError::Io {
            path: path.clone(),
            source,
        })?;
        count += 1;
    }
    Ok(count)
}

// Zip entries always use forward slashes, whatever the host separator.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
