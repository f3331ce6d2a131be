//! Processing result types.

use crate::archive::ArchiveStatus;
use crate::content::ContentStatus;
use crate::issues::IssueOutcome;

/// Everything that happened to one source repository.
#[derive(Debug, Clone)]
pub struct MigrationOutcome {
    /// Repository short name.
    pub repository: String,

    /// README rewrite result.
    pub readme: ContentStatus,

    /// Whether the issue lookup resolved the repository.
    pub found: bool,

    /// One entry per open issue.
    pub issues: Vec<IssueOutcome>,

    /// Closed issues left in the source repository.
    pub skipped_closed: usize,

    /// Archival result.
    pub archive: ArchiveStatus,
}

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// The workflow ran to its end, possibly with per-issue failures.
    Completed(MigrationOutcome),

    /// The workflow stopped early.
    Failed {
        /// Repository short name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl ProcessingResult {
    /// Repository short name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Completed(outcome) => &outcome.repository,
            Self::Failed { repository, .. } => repository,
        }
    }
}
