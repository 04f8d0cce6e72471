//! Error types for docsteward-sync.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The configured upstream checkout does not exist — fatal at startup.
    #[error("upstream repository not found at {path}")]
    UpstreamMissing { path: PathBuf },

    /// A mapped source file is absent from the upstream tree.
    #[error("source file not found: {path}")]
    SourceMissing { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
