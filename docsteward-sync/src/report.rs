//! Sync report rendering and persistence.

use chrono::{DateTime, SecondsFormat, Utc};

use docsteward_core::{
    types::{RepoMetadata, SyncOutcome},
    StewardConfig,
};

use crate::error::{io_err, SyncError};

/// Render the sync report. Deterministic apart from `generated_at`.
pub fn build(
    outcomes: &[SyncOutcome],
    metadata: &RepoMetadata,
    generated_at: DateTime<Utc>,
) -> String {
    let total = outcomes.len();
    let successful = outcomes.iter().filter(|o| o.success).count();
    let failed = total - successful;

    let mut lines = Vec::new();
    for outcome in outcomes {
        let marker = if outcome.success { "✅" } else { "❌" };
        lines.push(format!(
            "- {marker} `{}` → `{}`",
            outcome.source.display(),
            outcome.target.display()
        ));
    }

    let next_steps = if failed > 0 {
        "⚠️ Review failed syncs and update mappings as needed."
    } else {
        "🎉 All documentation successfully synchronized!"
    };

    format!(
        "# Documentation Sync Report\n\
         \n\
         Generated: {timestamp}\n\
         Upstream repository: {branch}@{hash}\n\
         \n\
         ## Sync Results\n\
         - ✅ Successful: {successful}/{total}\n\
         - ❌ Failed: {failed}/{total}\n\
         \n\
         ## File Mappings\n\
         {mappings}\n\
         \n\
         ## Next Steps\n\
         {next_steps}\n",
        timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        branch = metadata.branch,
        hash = metadata.hash,
        mappings = lines.join("\n"),
    )
}

/// Persist the rendered report, overwriting any prior version.
pub fn write(config: &StewardConfig, rendered: &str) -> Result<(), SyncError> {
    if let Some(parent) = config.sync_report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }
    std::fs::write(&config.sync_report_path, rendered)
        .map_err(|e| io_err(&config.sync_report_path, e))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn outcome(source: &str, target: &str, success: bool) -> SyncOutcome {
        SyncOutcome {
            source: PathBuf::from(source),
            target: PathBuf::from(target),
            success,
        }
    }

    fn metadata() -> RepoMetadata {
        RepoMetadata {
            hash: "abc1234".to_string(),
            branch: "main".to_string(),
        }
    }

    #[test]
    fn counts_match_outcome_tallies() {
        let outcomes = vec![
            outcome("a.md", "x/a.md", true),
            outcome("b.md", "x/b.md", false),
            outcome("c.md", "x/c.md", true),
        ];
        let rendered = build(&outcomes, &metadata(), Utc::now());
        assert!(rendered.contains("- ✅ Successful: 2/3"));
        assert!(rendered.contains("- ❌ Failed: 1/3"));
    }

    #[test]
    fn every_outcome_is_itemized() {
        let outcomes = vec![
            outcome("README.md", "overview.md", true),
            outcome("missing.md", "x.md", false),
        ];
        let rendered = build(&outcomes, &metadata(), Utc::now());
        assert!(rendered.contains("- ✅ `README.md` → `overview.md`"));
        assert!(rendered.contains("- ❌ `missing.md` → `x.md`"));
    }

    #[test]
    fn failure_triggers_review_recommendation() {
        let rendered = build(
            &[outcome("a.md", "a.md", false)],
            &metadata(),
            Utc::now(),
        );
        assert!(rendered.contains("Review failed syncs"));
        assert!(!rendered.contains("All documentation successfully synchronized"));
    }

    #[test]
    fn clean_run_celebrates() {
        let rendered = build(&[outcome("a.md", "a.md", true)], &metadata(), Utc::now());
        assert!(rendered.contains("All documentation successfully synchronized!"));
    }

    #[test]
    fn header_carries_branch_at_hash() {
        let rendered = build(&[], &metadata(), Utc::now());
        assert!(rendered.contains("Upstream repository: main@abc1234"));
    }

    #[test]
    fn unknown_metadata_still_renders() {
        let rendered = build(&[], &RepoMetadata::unknown(), Utc::now());
        assert!(rendered.contains("Upstream repository: unknown@unknown"));
    }
}
