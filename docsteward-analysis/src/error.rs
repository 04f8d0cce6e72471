//! Error types for docsteward-analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Failures invoking the external AI CLI for a single task.
///
/// These are per-unit errors: the runner converts them into failed
/// [`AnalysisResult`]s and continues.
///
/// [`AnalysisResult`]: crate::runner::AnalysisResult
#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent executable could not be spawned at all.
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The agent exited non-zero; carries a trimmed stderr excerpt.
    #[error("agent exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// Captured stdout exceeded the output ceiling.
    #[error("agent output exceeded {limit} bytes")]
    OutputTooLarge { limit: usize },

    /// The agent produced no output at all.
    #[error("Empty response")]
    EmptyResponse,
}

/// Run-level failures of a stewardship cycle.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Could not persist the steward report — fatal, no partial salvage.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`AnalysisError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> AnalysisError {
    AnalysisError::Io {
        path: path.into(),
        source,
    }
}
