//! Run summary types.

use super::result::ProcessingResult;
use crate::archive::ArchiveStatus;
use crate::content::ContentStatus;
use crate::issues::{IssueOutcome, LabelStatus};

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories in the plan.
    pub repositories_processed: usize,

    /// Repositories whose workflow stopped with an error.
    pub repositories_failed: usize,

    /// Repositories the issue lookup couldn't resolve.
    pub repositories_missing: usize,

    /// READMEs committed (or that would be, in a dry run).
    pub readmes_updated: usize,

    /// READMEs that already matched.
    pub readmes_unchanged: usize,

    /// Issues moved to the destination.
    pub issues_transferred: usize,

    /// Issues that would move (dry run).
    pub issues_planned: usize,

    /// Closed issues left behind.
    pub issues_skipped_closed: usize,

    /// Open issues still in their source repository after a failed or empty transfer.
    pub issues_failed: usize,

    /// Transferred issues that received their label.
    pub labels_applied: usize,

    /// Transferred issues whose labeling failed or returned a non-issue.
    pub labels_failed: usize,

    /// Repositories archived.
    pub repositories_archived: usize,

    /// Repositories whose archival was skipped.
    pub archives_skipped: usize,

    /// Repositories whose archival failed or reported nothing.
    pub archives_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.repositories_processed += 1;

        let outcome = match result {
            ProcessingResult::Completed(outcome) => outcome,
            ProcessingResult::Failed { .. } => {
                self.repositories_failed += 1;
                return;
            }
        };

        match outcome.readme {
            ContentStatus::Updated { .. } | ContentStatus::WouldUpdate { .. } => {
                self.readmes_updated += 1
            }
            ContentStatus::UpToDate => self.readmes_unchanged += 1,
        }

        if !outcome.found {
            self.repositories_missing += 1;
        }

        self.issues_skipped_closed += outcome.skipped_closed;
        for issue in &outcome.issues {
            match issue {
                IssueOutcome::Transferred { label, .. } => {
                    self.issues_transferred += 1;
                    match label {
                        LabelStatus::Labeled { .. } => self.labels_applied += 1,
                        LabelStatus::Unexpected { .. } | LabelStatus::Failed { .. } => {
                            self.labels_failed += 1
                        }
                    }
                }
                IssueOutcome::TransferReturnedNothing { .. } | IssueOutcome::Failed { .. } => {
                    self.issues_failed += 1
                }
                IssueOutcome::Planned { .. } => self.issues_planned += 1,
            }
        }

        match outcome.archive {
            ArchiveStatus::Archived { .. } => self.repositories_archived += 1,
            ArchiveStatus::Skipped { .. } => self.archives_skipped += 1,
            ArchiveStatus::NotReturned | ArchiveStatus::Failed { .. } => {
                self.archives_failed += 1
            }
            ArchiveStatus::NotAttempted => {}
        }
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
            || self.issues_failed > 0
            || self.labels_failed > 0
            || self.archives_failed > 0
    }
}
