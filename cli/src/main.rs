//! CLI for the repository consolidator.
//!
//! Rewrites the README of every repository in a migration plan, moves their
//! open issues to the consolidated repository, labels them, and archives
//! the old repositories.

use clap::Parser;
use repo_consolidator::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository consolidator - retire repositories in favour of a consolidated one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the migration plan.
    #[arg(long, default_value = "migration.toml")]
    plan: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Only read from GitHub and log what would change.
    #[arg(long)]
    dry_run: bool,

    /// Maximum repositories migrated at once (default: all).
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    // Partial failures are only logged; the run itself still succeeded.
    match run(args).await {
        Ok(summary) => {
            log_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output, filtered via `RUST_LOG` (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.plan, args.token)
        .with_dry_run(args.dry_run)
        .with_concurrency(args.concurrency);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Logs the final run summary.
fn log_summary(summary: &RunSummary) {
    info!(
        mode = if summary.dry_run { "dry run" } else { "live" },
        repositories = summary.repositories_processed,
        failed = summary.repositories_failed,
        missing = summary.repositories_missing,
        "Run finished"
    );
    info!(
        updated = summary.readmes_updated,
        unchanged = summary.readmes_unchanged,
        "READMEs"
    );

    if summary.dry_run {
        info!(would_transfer = summary.issues_planned, "Issues");
        return;
    }

    info!(
        transferred = summary.issues_transferred,
        skipped_closed = summary.issues_skipped_closed,
        failed = summary.issues_failed,
        labeled = summary.labels_applied,
        label_failures = summary.labels_failed,
        "Issues"
    );
    info!(
        archived = summary.repositories_archived,
        skipped = summary.archives_skipped,
        failed = summary.archives_failed,
        "Archival"
    );

    if summary.has_failures() {
        warn!("Some steps failed, see the log above for the affected repositories");
    }
}
