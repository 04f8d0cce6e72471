//! File sync engine.
//!
//! Walks the mapping table in order: read source, transform, atomically
//! write the target (`.tmp` + rename, parents created as needed). Writes are
//! content-hash-gated — an identical existing target is left untouched.
//!
//! Failure semantics are total per entry: a missing source or an I/O error
//! downgrades that entry to `success: false` and the loop continues. Only a
//! missing upstream root (or a report-write failure in [`sync_and_report`])
//! aborts the run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use sha2::{Digest, Sha256};

use docsteward_core::{
    mappings::{MappingEntry, MappingTarget},
    types::SyncOutcome,
    StewardConfig,
};

use crate::error::{io_err, SyncError};
use crate::{repo_info, report, transform};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — existing target content matches the new content.
    Unchanged { path: PathBuf },
}

// ---------------------------------------------------------------------------
// sync_docs
// ---------------------------------------------------------------------------

/// Mirror every mapped file from the upstream tree into the docs tree.
///
/// Returns one [`SyncOutcome`] per non-skipped entry, in table order.
pub fn sync_docs(
    config: &StewardConfig,
    mappings: &[MappingEntry],
) -> Result<Vec<SyncOutcome>, SyncError> {
    if !config.upstream_root.exists() {
        return Err(SyncError::UpstreamMissing {
            path: config.upstream_root.clone(),
        });
    }

    let today = Utc::now().date_naive();
    let mut outcomes = Vec::new();

    for entry in mappings {
        let target_rel = match &entry.target {
            MappingTarget::Skip => {
                tracing::info!("skipping: {}", entry.source.display());
                continue;
            }
            MappingTarget::Path(path) => path,
        };

        let success = match sync_file(config, &entry.source, target_rel, today) {
            Ok(WriteResult::Written { path }) => {
                tracing::info!("synced: {} -> {}", entry.source.display(), path.display());
                true
            }
            Ok(WriteResult::Unchanged { path }) => {
                tracing::debug!("unchanged: {}", path.display());
                true
            }
            Err(e) => {
                tracing::warn!("sync failed for {}: {e}", entry.source.display());
                false
            }
        };

        outcomes.push(SyncOutcome {
            source: entry.source.clone(),
            target: target_rel.clone(),
            success,
        });
    }

    Ok(outcomes)
}

fn sync_file(
    config: &StewardConfig,
    source_rel: &Path,
    target_rel: &Path,
    today: NaiveDate,
) -> Result<WriteResult, SyncError> {
    let source_path = config.upstream_root.join(source_rel);
    if !source_path.exists() {
        return Err(SyncError::SourceMissing { path: source_path });
    }

    let content = std::fs::read_to_string(&source_path).map_err(|e| io_err(&source_path, e))?;
    let transformed = transform::transform(&content, source_rel, today);

    let target_path = config.docs_root.join(target_rel);
    atomic_write(&target_path, &transformed)
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically write one file, skipping when the target already holds the
/// same content.
fn atomic_write(path: &Path, content: &str) -> Result<WriteResult, SyncError> {
    let digest = sha256_hex(content);
    if path.exists() {
        if let Ok(existing) = std::fs::read_to_string(path) {
            if sha256_hex(&existing) == digest {
                return Ok(WriteResult::Unchanged {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.docsteward.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

// ---------------------------------------------------------------------------
// sync_and_report
// ---------------------------------------------------------------------------

/// Full sync pipeline: mirror the files, read repository metadata, persist
/// the sync report. Report-write failure is fatal.
pub fn sync_and_report(
    config: &StewardConfig,
    mappings: &[MappingEntry],
    generated_at: DateTime<Utc>,
) -> Result<Vec<SyncOutcome>, SyncError> {
    let outcomes = sync_docs(config, mappings)?;
    let metadata = repo_info::read(&config.upstream_root);
    let rendered = report::build(&outcomes, &metadata, generated_at);
    report::write(config, &rendered)?;
    tracing::info!(
        "sync report written: {}",
        config.sync_report_path.display()
    );
    Ok(outcomes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
