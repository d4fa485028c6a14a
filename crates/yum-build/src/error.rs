//! Build pipeline errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a build run.
///
/// The taxonomy is intentionally small: a child process either succeeded or
/// it did not, and any failure in a core step stops the run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed compiling {}", source_file.display())]
    CompileFailed { source_file: PathBuf },

    #[error("link failed for {platform}")]
    LinkFailed { platform: String },

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
