//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for a migration run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the migration plan.
    plan_path: PathBuf,
    /// GitHub token used for API calls.
    token: String,
    /// Whether to only read, logging what would change.
    dry_run: bool,
    /// Maximum repositories migrated at once; `None` runs all at once.
    concurrency: Option<usize>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(plan_path: PathBuf, token: String) -> Self {
        Self {
            plan_path,
            token,
            dry_run: false,
            concurrency: None,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Caps the number of repositories migrated at once.
    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Returns the migration plan path.
    pub fn plan_path(&self) -> &Path {
        &self.plan_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the concurrency cap.
    pub fn concurrency(&self) -> Option<usize> {
        self.concurrency
    }
}
