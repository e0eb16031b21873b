//! Error types for the scaffolding pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the core generation stages.
///
/// `InvalidName` is recoverable (the prompt layer re-asks); everything else
/// aborts the run. Install failures are deliberately *not* represented here:
/// by the time the installer runs, generation has already succeeded, so they
/// live in [`crate::installer::InstallError`] and degrade to a notice.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid project name: {0}")]
    InvalidName(String),

    #[error("directory {} already exists and is not empty", path.display())]
    DestinationNotEmpty { path: PathBuf },

    #[error("template directory not found: {}", path.display())]
    TemplateRootMissing { path: PathBuf },

    #[error("failed to copy {}", path.display())]
    CopyFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDirFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The user cancelled at a prompt. Not a failure; exits with code 0.
    #[error("setup cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}
