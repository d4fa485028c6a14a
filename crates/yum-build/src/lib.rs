//! Multi-target compile and link orchestration for the YumEngine native
//! library.
//!
//! The pipeline is deliberately sequential: one child process at a time,
//! awaited to completion. A compile or link failure aborts the whole run at
//! that point; completed platforms keep their artifacts. Command execution
//! goes through the [`CommandRunner`] capability so the orchestration can be
//! exercised without spawning real compilers.

pub mod compile;
pub mod discover;
pub mod error;
pub mod link;
pub mod orchestrator;
pub mod progress;
pub mod runner;

pub use error::{BuildError, Result};
pub use orchestrator::{BuildReport, Orchestrator};
pub use progress::{NullReporter, Reporter};
pub use runner::{CommandRunner, Invocation, ProcessRunner};
