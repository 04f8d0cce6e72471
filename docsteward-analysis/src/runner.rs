//! Sequential task runner.
//!
//! Tasks run strictly one at a time — the external agent is assumed
//! single-session, and each task may block for minutes. Every task produces
//! exactly one [`AnalysisResult`]; failures are recorded, never propagated,
//! and never stop the remaining tasks.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;

use docsteward_core::StewardConfig;

use crate::agent::{self, AgentRequest};
use crate::tasks::AnalysisTask;

/// Result of one analysis task.
///
/// On success `content` holds the non-empty agent output and `error` is
/// `None`. On failure `content` is a human-readable `Error: …` placeholder
/// and `error` carries the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub content: String,
    pub error: Option<String>,
}

impl AnalysisResult {
    fn success(content: String) -> Self {
        Self {
            content,
            error: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            content: format!("Error: {message}"),
            error: Some(message),
        }
    }
}

/// Executes [`AnalysisTask`]s against the configured agent.
pub struct TaskRunner<'a> {
    config: &'a StewardConfig,
    /// Binary to spawn (with the `sync` verb) for drift-detection's
    /// prerequisite re-sync. `None` skips the prerequisite.
    sync_program: Option<PathBuf>,
}

impl<'a> TaskRunner<'a> {
    pub fn new(config: &'a StewardConfig) -> Self {
        Self {
            config,
            sync_program: None,
        }
    }

    /// Set the executable used for the prerequisite sync (normally the
    /// running binary itself).
    pub fn with_sync_program(mut self, sync_program: Option<PathBuf>) -> Self {
        self.sync_program = sync_program;
        self
    }

    /// Run every task in order. Always returns one result per task.
    pub fn run_all(
        &self,
        tasks: &[AnalysisTask],
    ) -> BTreeMap<&'static str, AnalysisResult> {
        let mut results = BTreeMap::new();
        for task in tasks {
            tracing::info!("running analysis: {}", task.name);
            let result = self.run_task(task);
            if let Some(error) = &result.error {
                tracing::warn!("analysis '{}' failed: {error}", task.name);
            } else {
                tracing::info!(
                    "analysis '{}' completed ({} characters)",
                    task.name,
                    result.content.len()
                );
            }
            results.insert(task.name, result);
        }
        results
    }

    /// Run a single task, converting every failure into a recorded result.
    pub fn run_task(&self, task: &AnalysisTask) -> AnalysisResult {
        if task.sync_first {
            self.run_sync_prerequisite();
        }

        let request = AgentRequest {
            prompt: task.prompt,
            system_prompt: task.system_prompt,
            working_dir: task.work_dir.resolve(self.config),
        };

        match agent::invoke(&self.config.agent_command, &request) {
            Ok(content) => AnalysisResult::success(content),
            Err(e) => AnalysisResult::failure(e.to_string()),
        }
    }

    /// Re-run the file sync as a child process, swallowing any failure.
    ///
    /// Drift detection wants the mirror as fresh as possible, but a failed
    /// prerequisite must not block the analysis itself.
    fn run_sync_prerequisite(&self) {
        let Some(program) = &self.sync_program else {
            tracing::warn!("no sync program configured; skipping pre-analysis sync");
            return;
        };

        match Command::new(program).arg("sync").output() {
            Ok(output) if output.status.success() => {
                tracing::info!("pre-analysis sync completed");
            }
            Ok(output) => {
                tracing::warn!(
                    "pre-analysis sync exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Err(e) => {
                tracing::warn!("pre-analysis sync failed to launch: {e}");
            }
        }
    }
}
