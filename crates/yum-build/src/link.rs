//! Per-platform link invocation.

use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::runner::{CommandRunner, Invocation};

/// Everything needed to link one platform artifact.
///
/// The C++ compiler is the link driver so the C++ runtime resolves even when
/// the object list mixes C and C++ translation units.
#[derive(Debug, Clone, Copy)]
pub struct LinkSpec<'a> {
    /// Link driver command (the platform's C++ compiler).
    pub driver: &'a str,
    /// Platform-family link flags.
    pub link_flags: &'a str,
    /// Cross-compilation triple; `None` emits no `-target` flag.
    pub triple: Option<&'a str>,
    /// Platform extra flags.
    pub extra_flags: &'a str,
    /// Directory receiving the artifact.
    pub output_dir: &'a Path,
    /// Artifact file name.
    pub artifact: &'a str,
}

/// Assemble the link command over the full object list.
pub fn invocation(spec: &LinkSpec<'_>, objects: &[PathBuf]) -> (Invocation, PathBuf) {
    let output = spec.output_dir.join(spec.artifact);
    let mut inv = Invocation::from_command(spec.driver).flags(spec.link_flags);
    if let Some(triple) = spec.triple {
        inv = inv.arg("-target").arg(triple);
    }
    inv = inv.flags(spec.extra_flags);
    for object in objects {
        inv = inv.arg(object.display().to_string());
    }
    inv = inv.arg("-o").arg(output.display().to_string());
    (inv, output)
}

/// Link the objects into the platform artifact. The object order is the
/// caller's (C objects before C++ objects) so the command is reproducible.
pub fn link(
    runner: &dyn CommandRunner,
    spec: &LinkSpec<'_>,
    objects: &[PathBuf],
    platform: &str,
) -> Result<PathBuf> {
    let (inv, output) = invocation(spec, objects);
    match runner.run(&inv) {
        Ok(true) => Ok(output),
        Ok(false) => Err(BuildError::LinkFailed {
            platform: platform.to_string(),
        }),
        Err(source) => Err(BuildError::Launch {
            program: inv.program().to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;

    fn spec<'a>(triple: Option<&'a str>, output_dir: &'a Path) -> LinkSpec<'a> {
        LinkSpec {
            driver: "zig c++",
            link_flags: "-shared",
            triple,
            extra_flags: "",
            output_dir,
            artifact: "libyum_linux_x64.so",
        }
    }

    #[test]
    fn objects_appear_in_given_order_before_output() {
        let objects = vec![PathBuf::from("temp/a.c.o"), PathBuf::from("temp/b.cpp.o")];
        let (inv, output) = invocation(&spec(None, Path::new("bin/release")), &objects);

        let args = inv.args();
        let a = args.iter().position(|x| x == "temp/a.c.o").unwrap();
        let b = args.iter().position(|x| x == "temp/b.cpp.o").unwrap();
        let o = args.iter().position(|x| x == "-o").unwrap();
        assert!(a < b && b < o);
        assert_eq!(output, PathBuf::from("bin/release/libyum_linux_x64.so"));
    }

    #[test]
    fn triple_emitted_verbatim_when_present() {
        let (inv, _) = invocation(
            &spec(Some("aarch64-linux-gnu"), Path::new("bin/release")),
            &[],
        );
        let args = inv.args();
        let at = args.iter().position(|a| a == "-target").unwrap();
        assert_eq!(args[at + 1], "aarch64-linux-gnu");
    }

    #[test]
    fn no_target_flag_for_native_links() {
        let (inv, _) = invocation(&spec(None, Path::new("bin/release")), &[]);
        assert!(!inv.args().iter().any(|a| a == "-target"));
    }

    #[test]
    fn link_failure_names_the_platform() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ScriptedRunner::failing_when(|_| true);

        let err = link(&runner, &spec(None, dir.path()), &[], "Linux x86_64").unwrap_err();
        match err {
            BuildError::LinkFailed { platform } => assert_eq!(platform, "Linux x86_64"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn successful_link_returns_artifact_path() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ScriptedRunner::succeeding();

        let artifact = link(&runner, &spec(None, dir.path()), &[], "Linux x86_64").unwrap();
        assert!(artifact.exists());
        assert!(artifact.ends_with("libyum_linux_x64.so"));
    }
}
