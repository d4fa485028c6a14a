//! Peripheral pipeline steps: version bump and documentation generation.
//!
//! Both run before the build and both are best-effort: a failure is logged
//! and shown, never fatal. Only compile and link failures abort a run.

use std::io;
use std::path::Path;

use yum_build::{CommandRunner, Invocation};

use crate::manifest::YumManifest;
use crate::ui;

/// Invoke the Lua version-bump script, forwarding any user arguments.
pub fn bump_version(
    runner: &dyn CommandRunner,
    project_dir: &Path,
    manifest: &YumManifest,
    args: &[String],
) {
    let script = project_dir.join(manifest.version_bump_script());
    let mut inv = Invocation::from_command("lua").arg(script.display().to_string());
    for arg in args {
        inv = inv.arg(arg);
    }
    best_effort("version bump", runner.run(&inv));
}

/// Regenerate the API documentation via Doxygen.
pub fn generate_docs(runner: &dyn CommandRunner, project_dir: &Path, manifest: &YumManifest) {
    let doxyfile = project_dir.join(manifest.doxyfile());
    let inv = Invocation::from_command("doxygen").arg(doxyfile.display().to_string());
    best_effort("documentation", runner.run(&inv));
}

fn best_effort(step: &str, outcome: io::Result<bool>) {
    match outcome {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(step, "peripheral step reported failure, continuing");
            ui::note(&format!("note: {step} step failed, continuing"));
        }
        Err(error) => {
            tracing::warn!(step, %error, "peripheral step could not run, continuing");
            ui::note(&format!("note: {step} step could not run ({error}), continuing"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FailingRunner {
        invocations: RefCell<Vec<Invocation>>,
    }

    impl CommandRunner for FailingRunner {
        fn run(&self, invocation: &Invocation) -> io::Result<bool> {
            self.invocations.borrow_mut().push(invocation.clone());
            Ok(false)
        }
    }

    #[test]
    fn bump_failure_is_swallowed() {
        let runner = FailingRunner {
            invocations: RefCell::new(Vec::new()),
        };
        let manifest = YumManifest::default();

        // Must not panic or abort; failure is the runner's answer.
        bump_version(&runner, Path::new("/proj"), &manifest, &[]);

        let recorded = runner.invocations.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].program(), "lua");
        assert!(recorded[0].args()[0].ends_with("bump-version.lua"));
    }

    #[test]
    fn bump_forwards_user_arguments() {
        let runner = FailingRunner {
            invocations: RefCell::new(Vec::new()),
        };
        let manifest = YumManifest::default();

        bump_version(
            &runner,
            Path::new("/proj"),
            &manifest,
            &["minor".to_string()],
        );

        let recorded = runner.invocations.borrow();
        assert!(recorded[0].args().iter().any(|a| a == "minor"));
    }

    #[test]
    fn docs_use_the_manifest_doxyfile() {
        let runner = FailingRunner {
            invocations: RefCell::new(Vec::new()),
        };
        let manifest = YumManifest::from_str("[scripts]\ndoxyfile = \"docs/Doxyfile\"\n").unwrap();

        generate_docs(&runner, Path::new("/proj"), &manifest);

        let recorded = runner.invocations.borrow();
        assert_eq!(recorded[0].program(), "doxygen");
        assert!(recorded[0].args()[0].ends_with("docs/Doxyfile"));
    }
}
