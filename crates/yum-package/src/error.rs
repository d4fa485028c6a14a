//! Packaging errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing an archive.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("output directory not found: {}", path.display())]
    MissingRoot { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type for packaging operations.
pub type Result<T> = std::result::Result<T, PackageError>;
