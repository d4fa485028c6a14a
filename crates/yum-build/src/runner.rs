//! Command execution capability.
//!
//! Everything the pipeline does to the outside world goes through
//! [`CommandRunner`], so tests can substitute a fake that records
//! invocations and scripts failures without spawning real toolchains.

use std::fmt;
use std::io;
use std::process::Command;

/// One fully assembled child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a command string, splitting multi-word
    /// commands such as `zig cc` into the program and its leading arguments.
    pub fn from_command(command: &str) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_default();
        Self {
            program,
            args: words.collect(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append every whitespace-separated word of a flag string.
    pub fn flags(mut self, flags: &str) -> Self {
        self.args.extend(flags.split_whitespace().map(str::to_string));
        self
    }

    /// The program to spawn.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument list, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executes one invocation to completion and reports whether it succeeded.
///
/// `Ok(true)` is a zero exit status, `Ok(false)` any non-zero status, and
/// `Err` a failure to launch at all. No retries, no timeout: a hung child
/// hangs the run.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<bool>;
}

/// The real runner. The child inherits the parent's stdio, so compiler
/// diagnostics go straight to the terminal.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<bool> {
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .status()?;
        Ok(status.success())
    }
}
