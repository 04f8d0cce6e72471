//! # docsteward-sync
//!
//! Deterministic file-mapping-and-transform sync engine.
//!
//! Call [`sync_docs`] to mirror every mapped upstream file into the docs
//! tree, or [`sync_and_report`] to additionally read repository metadata and
//! persist the sync report.

pub mod error;
pub mod repo_info;
pub mod report;
pub mod transform;
pub mod writer;

pub use error::SyncError;
pub use writer::{sync_and_report, sync_docs, WriteResult};
