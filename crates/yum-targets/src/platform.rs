//! Platform descriptor model.
//!
//! The builtin table mirrors the shipping target matrix of the YumEngine
//! native library: a native macOS universal build plus zig-driven cross
//! builds for Windows and Linux on x64, x86, and arm64.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

const LINK_FLAGS_MACOS: &str = "-dynamiclib";
const LINK_FLAGS_WINDOWS: &str = "-shared -static -static-libstdc++ -static-libgcc";
const LINK_FLAGS_LINUX: &str = "-shared";

const ZIG_CC: &str = "zig cc";
const ZIG_CXX: &str = "zig c++";

/// One shared-library build target.
///
/// A descriptor is immutable configuration data: it says which compilers to
/// run and how to link, never how the build is sequenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Platform {
    /// Resolution key (e.g., "windows-x64").
    pub name: String,
    /// Human display string (e.g., "Windows x64").
    pub description: String,
    /// Cross-compilation target triple. `None` means a native host build and
    /// no `-target` flag is emitted anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triple: Option<String>,
    /// C compiler command. May be multi-word ("zig cc").
    pub cc: String,
    /// C++ compiler command, also used as the link driver.
    pub cxx: String,
    /// Extra flags appended to every compile and link invocation.
    #[serde(default)]
    pub extra_flags: String,
    /// Output artifact file name (e.g., "libyum_win_x64.dll").
    pub artifact: String,
    /// Platform-family link flags.
    pub link_flags: String,
}

impl Platform {
    /// Check the invariants every descriptor must satisfy: both compiler
    /// commands and the artifact name are non-empty, and a triple, when
    /// present, is non-empty (native builds use `None`, not `""`).
    pub fn validate(&self) -> Result<()> {
        if self.cc.trim().is_empty() {
            return self.invalid("missing C compiler command");
        }
        if self.cxx.trim().is_empty() {
            return self.invalid("missing C++ compiler command");
        }
        if self.artifact.trim().is_empty() {
            return self.invalid("missing artifact file name");
        }
        if matches!(self.triple.as_deref(), Some(t) if t.trim().is_empty()) {
            return self.invalid("empty target triple (omit the field for native builds)");
        }
        Ok(())
    }

    fn invalid(&self, detail: &str) -> Result<()> {
        Err(TargetError::Validation {
            name: self.name.clone(),
            detail: detail.to_string(),
        })
    }

    /// Native macOS universal (x86_64 + arm64) build with the host toolchain.
    pub fn macos_universal() -> Self {
        Self {
            name: "macos-universal".to_string(),
            description: "macOS (Universal)".to_string(),
            triple: None,
            cc: "gcc".to_string(),
            cxx: "g++".to_string(),
            extra_flags: "-arch x86_64 -arch arm64".to_string(),
            artifact: "libyum_apple.dylib".to_string(),
            link_flags: LINK_FLAGS_MACOS.to_string(),
        }
    }

    /// Windows x64 cross build via zig.
    pub fn windows_x64() -> Self {
        Self::zig_target(
            "windows-x64",
            "Windows x64",
            "x86_64-windows-gnu",
            "libyum_win_x64.dll",
            LINK_FLAGS_WINDOWS,
        )
    }

    /// Windows x86 cross build via zig.
    pub fn windows_x86() -> Self {
        Self::zig_target(
            "windows-x86",
            "Windows x86",
            "x86-windows-gnu",
            "libyum_win_x86.dll",
            LINK_FLAGS_WINDOWS,
        )
    }

    /// Windows ARM64 cross build via zig.
    pub fn windows_arm64() -> Self {
        Self::zig_target(
            "windows-arm64",
            "Windows ARM64",
            "aarch64-windows-gnu",
            "libyum_win_arm64.dll",
            LINK_FLAGS_WINDOWS,
        )
    }

    /// Linux x86_64 cross build via zig.
    pub fn linux_x64() -> Self {
        Self::zig_target(
            "linux-x64",
            "Linux x86_64",
            "x86_64-linux-gnu",
            "libyum_linux_x64.so",
            LINK_FLAGS_LINUX,
        )
    }

    /// Linux x86 cross build via zig.
    pub fn linux_x86() -> Self {
        Self::zig_target(
            "linux-x86",
            "Linux x86",
            "x86-linux-gnu",
            "libyum_linux_x86.so",
            LINK_FLAGS_LINUX,
        )
    }

    /// Linux ARM64 cross build via zig.
    pub fn linux_arm64() -> Self {
        Self::zig_target(
            "linux-arm64",
            "Linux ARM64",
            "aarch64-linux-gnu",
            "libyum_linux_arm64.so",
            LINK_FLAGS_LINUX,
        )
    }

    fn zig_target(
        name: &str,
        description: &str,
        triple: &str,
        artifact: &str,
        link_flags: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            triple: Some(triple.to_string()),
            cc: ZIG_CC.to_string(),
            cxx: ZIG_CXX.to_string(),
            extra_flags: String::new(),
            artifact: artifact.to_string(),
            link_flags: link_flags.to_string(),
        }
    }

    /// The fixed ordered builtin target table. Build order follows this list.
    pub fn builtin() -> Vec<Platform> {
        vec![
            Self::macos_universal(),
            Self::windows_x64(),
            Self::windows_x86(),
            Self::windows_arm64(),
            Self::linux_x64(),
            Self::linux_x86(),
            Self::linux_arm64(),
        ]
    }

    /// Resolve a builtin platform by its name.
    pub fn resolve(name: &str) -> Option<Platform> {
        Self::builtin().into_iter().find(|p| p.name == name)
    }
}

/// Wrapper for the `[[platform]]` array in a custom platform file.
#[derive(Debug, Serialize, Deserialize)]
struct PlatformFile {
    #[serde(default)]
    platform: Vec<Platform>,
}

/// Load and validate a custom platform list from a TOML file.
///
/// The file holds an ordered `[[platform]]` array in the same shape as the
/// builtin descriptors; the order in the file is the build order.
pub fn load_platform_file(path: &Path) -> Result<Vec<Platform>> {
    if !path.is_file() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let file: PlatformFile = toml::from_str(&content)?;
    for platform in &file.platform {
        platform.validate()?;
    }
    Ok(file.platform)
}
