//! `docsteward sync` — mirror mapped upstream files and write the sync report.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;

use docsteward_core::{mappings, StewardConfig, SyncOutcome};
use docsteward_sync::sync_and_report;

pub fn run() -> Result<()> {
    let config = StewardConfig::load().context("failed to load configuration")?;

    let outcomes = sync_and_report(&config, &mappings::default_mappings(), Utc::now())
        .context("documentation sync failed")?;

    print_outcomes(&outcomes);
    println!("report: {}", config.sync_report_path.display());
    Ok(())
}

fn print_outcomes(outcomes: &[SyncOutcome]) {
    let total = outcomes.len();
    let successful = outcomes.iter().filter(|o| o.success).count();
    println!("synced {successful}/{total} mapped files");

    for outcome in outcomes {
        let marker = if outcome.success {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {marker}  {} → {}",
            outcome.source.display(),
            outcome.target.display()
        );
    }
}
