//! # docsteward-analysis
//!
//! Subprocess orchestration for AI-driven documentation stewardship: a fixed,
//! ordered set of analysis tasks executed strictly sequentially against an
//! external AI CLI, aggregated into a single narrative report.

pub mod agent;
pub mod error;
pub mod report;
pub mod runner;
pub mod tasks;

pub use error::{AgentError, AnalysisError};
pub use runner::{AnalysisResult, TaskRunner};
pub use tasks::{stewardship_tasks, task_by_name, AnalysisTask, WorkDir};

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Utc;
use docsteward_core::StewardConfig;

/// Run the complete stewardship cycle: all five tasks, then build and persist
/// the steward report. Individual task failures are recorded and never fatal;
/// a report-write failure is.
pub fn run_stewardship(
    config: &StewardConfig,
    sync_program: Option<PathBuf>,
) -> Result<BTreeMap<&'static str, AnalysisResult>, AnalysisError> {
    let runner = TaskRunner::new(config).with_sync_program(sync_program);
    let results = runner.run_all(&tasks::stewardship_tasks());

    let rendered = report::build(&results, Utc::now());
    report::write(config, &rendered)?;
    tracing::info!(
        "steward report written: {}",
        config.steward_report_path.display()
    );

    Ok(results)
}
