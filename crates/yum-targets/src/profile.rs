//! Build configuration profiles.
//!
//! Exactly two profiles exist: release (optimized) and debug (unoptimized,
//! symbols, `YUM_DEBUG` defined). They differ only in flag strings and output
//! directory; the object directory is shared and cleared per profile run.

use std::path::PathBuf;

const INCLUDES: &str = "-I./ -I../ -I./inc/ -I./inc/lua";

/// Compiler flag sets and directory layout for one build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProfile {
    /// Profile name ("release" or "debug").
    pub name: String,
    /// Flags for every C compile.
    pub cflags: String,
    /// Flags for every C++ compile.
    pub cxxflags: String,
    /// Where the linked artifacts land, relative to the project root.
    pub output_dir: PathBuf,
    /// Where object files land, relative to the project root.
    pub obj_dir: PathBuf,
}

impl BuildProfile {
    /// Optimized build without debug symbols.
    pub fn release() -> Self {
        Self {
            name: "release".to_string(),
            cflags: format!("-std=c17 -Wall -Wextra -fPIC -O2 -c {INCLUDES}"),
            cxxflags: format!("-std=c++23 -Wall -Wextra -fPIC -O2 -c -shared {INCLUDES}"),
            output_dir: PathBuf::from("bin/release"),
            obj_dir: PathBuf::from("temp"),
        }
    }

    /// Unoptimized build with debug symbols and the `YUM_DEBUG` define.
    pub fn debug() -> Self {
        Self {
            name: "debug".to_string(),
            cflags: format!("-std=c17 -Wall -Wextra -fPIC -g -O0 -c -DYUM_DEBUG {INCLUDES}"),
            cxxflags: format!(
                "-std=c++23 -Wall -Wextra -fPIC -g -O0 -c -shared -DYUM_DEBUG {INCLUDES}"
            ),
            output_dir: PathBuf::from("bin/debug"),
            obj_dir: PathBuf::from("temp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_profile_is_optimized() {
        let p = BuildProfile::release();
        assert!(p.cflags.contains("-O2"));
        assert!(!p.cflags.contains("-g"));
        assert!(!p.cflags.contains("YUM_DEBUG"));
        assert_eq!(p.output_dir, PathBuf::from("bin/release"));
    }

    #[test]
    fn debug_profile_defines_yum_debug() {
        let p = BuildProfile::debug();
        assert!(p.cflags.contains("-g -O0"));
        assert!(p.cflags.contains("-DYUM_DEBUG"));
        assert!(p.cxxflags.contains("-DYUM_DEBUG"));
        assert_eq!(p.output_dir, PathBuf::from("bin/debug"));
    }

    #[test]
    fn profiles_share_the_object_dir() {
        assert_eq!(BuildProfile::release().obj_dir, BuildProfile::debug().obj_dir);
    }

    #[test]
    fn c_and_cxx_standards_differ() {
        let p = BuildProfile::release();
        assert!(p.cflags.contains("-std=c17"));
        assert!(p.cxxflags.contains("-std=c++23"));
    }
}
