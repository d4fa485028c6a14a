//! Source file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively list files under `root` whose name ends with `suffix`,
/// skipping any path that contains the `exclude` substring.
///
/// The result is sorted so build order does not depend on filesystem
/// traversal order. A missing or empty root yields an empty list.
pub fn sources(root: &Path, suffix: &str, exclude: Option<&str>) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(suffix))
        })
        .filter(|path| match exclude {
            Some(needle) => !path.to_string_lossy().contains(needle),
            None => true,
        })
        .collect();
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_matching_files_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.c"));
        touch(&dir.path().join("src/b.c"));
        touch(&dir.path().join("src/deep/nested/c.c"));
        touch(&dir.path().join("src/skip.cpp"));
        touch(&dir.path().join("README.md"));

        let found = sources(dir.path(), ".c", None);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| p.extension().unwrap() == "c"));
    }

    #[test]
    fn suffix_matches_full_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("main.cpp"));
        touch(&dir.path().join("main.c"));

        let found = sources(dir.path(), ".cpp", None);
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("main.cpp"));
    }

    #[test]
    fn exclusion_substring_filters_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("src/keep.c"));
        touch(&dir.path().join("docs/html/example.c"));

        let found = sources(dir.path(), ".c", Some("docs"));
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("keep.c"));
    }

    #[test]
    fn result_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("z.c"));
        touch(&dir.path().join("a.c"));
        touch(&dir.path().join("m/m.c"));

        let found = sources(dir.path(), ".c", None);
        let mut expected = found.clone();
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn empty_root_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sources(dir.path(), ".c", None).is_empty());
    }

    #[test]
    fn missing_root_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there");
        assert!(sources(&missing, ".c", None).is_empty());
    }
}
