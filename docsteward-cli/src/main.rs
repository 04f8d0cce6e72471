//! docsteward — documentation mirroring and AI stewardship CLI.
//!
//! # Usage
//!
//! ```text
//! docsteward sync
//! docsteward monitor | quality | drift | improve | fix
//! docsteward full        (also the default with no subcommand)
//! ```
//!
//! Configuration comes from an optional `docsteward.yaml` in the invocation
//! directory; every field has a default.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "docsteward",
    version,
    about = "Mirror upstream documentation and run AI stewardship analyses",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mirror mapped upstream files into the docs tree and write the sync report.
    Sync,

    /// Monitor the upstream repository for documentation-affecting changes.
    Monitor,

    /// Audit documentation quality and completeness.
    Quality,

    /// Re-sync the mirror, then detect drift against upstream.
    Drift,

    /// Generate documentation improvement suggestions.
    Improve,

    /// Propose safe, low-risk automatic fixes.
    Fix,

    /// Run the complete stewardship cycle and write the steward report.
    Full,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Full) {
        Commands::Sync => commands::sync::run(),
        Commands::Monitor => commands::steward::run_single("source-changes"),
        Commands::Quality => commands::steward::run_single("quality-analysis"),
        Commands::Drift => commands::steward::run_single("drift-detection"),
        Commands::Improve => commands::steward::run_single("improvement-suggestions"),
        Commands::Fix => commands::steward::run_single("automatic-fixes"),
        Commands::Full => commands::steward::run_full(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
