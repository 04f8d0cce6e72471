//! Steward report rendering and persistence.
//!
//! Sections are fixed and positional; each renders the corresponding task's
//! content verbatim, or a placeholder when that task never produced a result.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use docsteward_core::StewardConfig;

use crate::error::{io_err, AnalysisError};
use crate::runner::AnalysisResult;

const NOT_COMPLETED: &str = "Analysis not completed";
const NO_FIXES: &str = "No automatic fixes applied";

/// Render the steward report from the per-task results.
pub fn build(
    results: &BTreeMap<&'static str, AnalysisResult>,
    generated_at: DateTime<Utc>,
) -> String {
    let section = |name: &str, placeholder: &str| -> String {
        results
            .get(name)
            .map(|r| r.content.clone())
            .unwrap_or_else(|| placeholder.to_string())
    };

    format!(
        "# Documentation Steward Report\n\
         \n\
         Generated: {timestamp}\n\
         \n\
         ## Executive Summary\n\
         {summary}\n\
         \n\
         ## Documentation Quality Analysis\n\
         {quality}\n\
         \n\
         ## Synchronization Status\n\
         {drift}\n\
         \n\
         ## Improvement Recommendations\n\
         {improvements}\n\
         \n\
         ## Automated Fixes Applied\n\
         {fixes}\n\
         \n\
         ## Next Actions\n\
         Based on this analysis, the following actions are recommended:\n\
         1. Review and approve suggested improvements\n\
         2. Implement high-priority fixes\n\
         3. Update documentation sync mappings if needed\n\
         4. Schedule a follow-up steward run\n\
         \n\
         ---\n\
         *Generated by docsteward*\n",
        timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        summary = section("source-changes", NOT_COMPLETED),
        quality = section("quality-analysis", NOT_COMPLETED),
        drift = section("drift-detection", NOT_COMPLETED),
        improvements = section("improvement-suggestions", NOT_COMPLETED),
        fixes = section("automatic-fixes", NO_FIXES),
    )
}

/// Persist the rendered report, overwriting any prior version.
pub fn write(config: &StewardConfig, rendered: &str) -> Result<(), AnalysisError> {
    if let Some(parent) = config.steward_report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }
    std::fs::write(&config.steward_report_path, rendered)
        .map_err(|e| io_err(&config.steward_report_path, e))
}
