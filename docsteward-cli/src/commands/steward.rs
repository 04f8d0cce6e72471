//! Stewardship verbs — single analyses and the full cycle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use docsteward_analysis::{run_stewardship, stewardship_tasks, task_by_name, TaskRunner};
use docsteward_core::StewardConfig;

/// Run one named analysis and print its content.
///
/// Per-task failures are recorded in the result, not propagated — the verb
/// exits zero either way.
pub fn run_single(name: &str) -> Result<()> {
    let config = StewardConfig::load().context("failed to load configuration")?;
    let task = task_by_name(name).with_context(|| format!("unknown analysis task '{name}'"))?;

    let runner = TaskRunner::new(&config).with_sync_program(sync_program());
    let result = runner.run_task(&task);
    println!("{}", result.content);
    Ok(())
}

/// Run all five analyses and persist the steward report.
pub fn run_full() -> Result<()> {
    let config = StewardConfig::load().context("failed to load configuration")?;
    let results = run_stewardship(&config, sync_program()).context("stewardship cycle failed")?;

    for task in stewardship_tasks() {
        let Some(result) = results.get(task.name) else {
            continue;
        };
        let marker = if result.error.is_none() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {marker}  {}", task.name);
    }
    println!("report: {}", config.steward_report_path.display());
    Ok(())
}

/// Drift detection re-runs the sync through this same binary.
fn sync_program() -> Option<PathBuf> {
    std::env::current_exe().ok()
}
