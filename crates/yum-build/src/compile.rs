//! Per-source compiler invocation.

use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::progress::Reporter;
use crate::runner::{CommandRunner, Invocation};

/// Everything needed to compile one batch of sources for one platform.
#[derive(Debug, Clone, Copy)]
pub struct CompileSpec<'a> {
    /// Compiler command string (may be multi-word, e.g. "zig cc").
    pub compiler: &'a str,
    /// Profile flag string.
    pub flags: &'a str,
    /// Cross-compilation triple; `None` emits no `-target` flag.
    pub triple: Option<&'a str>,
    /// Platform extra flags.
    pub extra_flags: &'a str,
    /// Directory receiving the object files.
    pub obj_dir: &'a Path,
}

/// Object path for a source: `<obj_dir>/<file_name>.o`, independent of the
/// source's subdirectory.
pub fn object_path(obj_dir: &Path, source: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".o");
    obj_dir.join(name)
}

/// Assemble the compile command for one source file.
pub fn invocation(spec: &CompileSpec<'_>, source: &Path, object: &Path) -> Invocation {
    let mut inv = Invocation::from_command(spec.compiler).flags(spec.flags);
    if let Some(triple) = spec.triple {
        inv = inv.arg("-target").arg(triple);
    }
    inv.flags(spec.extra_flags)
        .arg(source.display().to_string())
        .arg("-o")
        .arg(object.display().to_string())
}

/// Compile every source in order, one child process at a time.
///
/// The first failing file aborts the batch; there is no continuation to
/// collect further errors.
pub fn compile_all(
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    spec: &CompileSpec<'_>,
    sources: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let total = sources.len();
    let mut objects = Vec::with_capacity(total);

    for (index, source) in sources.iter().enumerate() {
        reporter.compiling(source, index + 1, total);
        let object = object_path(spec.obj_dir, source);
        let inv = invocation(spec, source, &object);
        match runner.run(&inv) {
            Ok(true) => objects.push(object),
            Ok(false) => {
                return Err(BuildError::CompileFailed {
                    source_file: source.clone(),
                })
            }
            Err(source) => {
                return Err(BuildError::Launch {
                    program: inv.program().to_string(),
                    source,
                })
            }
        }
    }

    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullReporter;
    use crate::test_support::ScriptedRunner;

    fn spec<'a>(triple: Option<&'a str>, obj_dir: &'a Path) -> CompileSpec<'a> {
        CompileSpec {
            compiler: "zig cc",
            flags: "-std=c17 -O2 -c",
            triple,
            extra_flags: "",
            obj_dir,
        }
    }

    #[test]
    fn object_named_after_source_file_name() {
        let obj = object_path(Path::new("temp"), Path::new("a/b/foo.c"));
        assert_eq!(obj, PathBuf::from("temp/foo.c.o"));
    }

    #[test]
    fn object_name_ignores_source_directory() {
        let from_root = object_path(Path::new("temp"), Path::new("foo.c"));
        let from_deep = object_path(Path::new("temp"), Path::new("x/y/z/foo.c"));
        assert_eq!(from_root, from_deep);
    }

    #[test]
    fn triple_emitted_verbatim_when_present() {
        let inv = invocation(
            &spec(Some("x86_64-windows-gnu"), Path::new("temp")),
            Path::new("src/a.c"),
            Path::new("temp/a.c.o"),
        );
        let args = inv.args();
        let at = args.iter().position(|a| a == "-target").unwrap();
        assert_eq!(args[at + 1], "x86_64-windows-gnu");
    }

    #[test]
    fn no_target_flag_for_native_builds() {
        let inv = invocation(
            &spec(None, Path::new("temp")),
            Path::new("src/a.c"),
            Path::new("temp/a.c.o"),
        );
        assert!(!inv.args().iter().any(|a| a == "-target"));
    }

    #[test]
    fn source_precedes_output_argument() {
        let inv = invocation(
            &spec(None, Path::new("temp")),
            Path::new("src/a.c"),
            Path::new("temp/a.c.o"),
        );
        let args = inv.args();
        let src = args.iter().position(|a| a == "src/a.c").unwrap();
        let out = args.iter().position(|a| a == "-o").unwrap();
        assert!(src < out);
        assert_eq!(args[out + 1], "temp/a.c.o");
    }

    #[test]
    fn compile_all_returns_objects_in_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ScriptedRunner::succeeding();
        let sources = vec![PathBuf::from("src/a.c"), PathBuf::from("src/b.c")];

        let objects = compile_all(
            &runner,
            &NullReporter,
            &spec(None, dir.path()),
            &sources,
        )
        .unwrap();

        assert_eq!(objects.len(), 2);
        assert!(objects[0].ends_with("a.c.o"));
        assert!(objects[1].ends_with("b.c.o"));
        assert_eq!(runner.recorded().len(), 2);
    }

    #[test]
    fn first_failure_names_the_source_and_stops() {
        let dir = tempfile::tempdir().unwrap();
        let runner =
            ScriptedRunner::failing_when(|inv| inv.args().iter().any(|a| a.ends_with("b.c")));
        let sources = vec![
            PathBuf::from("src/a.c"),
            PathBuf::from("src/b.c"),
            PathBuf::from("src/c.c"),
        ];

        let err = compile_all(
            &runner,
            &NullReporter,
            &spec(None, dir.path()),
            &sources,
        )
        .unwrap_err();

        match err {
            BuildError::CompileFailed { source_file } => {
                assert!(source_file.ends_with("b.c"));
            }
            other => panic!("unexpected error: {other}"),
        }
        // c.c was never attempted
        assert_eq!(runner.recorded().len(), 2);
    }
}
