//! Issue transfer status types.

use crate::github::IssueId;
use serde::Serialize;

/// Outcome of labeling a transferred issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LabelStatus {
    /// Labels were attached to the issue.
    Labeled {
        /// Repository the issue now lives in.
        repository: String,
    },

    /// The mutation returned something other than an issue.
    Unexpected {
        /// GraphQL type name of the returned node, if any.
        typename: Option<String>,
    },

    /// The label mutation failed.
    Failed {
        /// Error message.
        error: String,
    },
}

impl LabelStatus {
    /// Returns true if the labels were attached.
    #[must_use]
    pub fn is_labeled(&self) -> bool {
        matches!(self, Self::Labeled { .. })
    }
}

/// Outcome of moving one open issue to the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IssueOutcome {
    /// Issue transferred; labeling was attempted with the new id.
    Transferred {
        /// Id in the source repository (no longer valid).
        old_id: IssueId,
        /// Id in the destination repository.
        new_id: IssueId,
        /// Issue title.
        title: String,
        /// Labeling result.
        label: LabelStatus,
    },

    /// The transfer mutation returned no issue.
    TransferReturnedNothing {
        /// Id in the source repository.
        issue: IssueId,
    },

    /// The transfer mutation failed.
    Failed {
        /// Id in the source repository.
        issue: IssueId,
        /// Error message.
        error: String,
    },

    /// Dry run: the issue would be transferred.
    Planned {
        /// Id in the source repository.
        issue: IssueId,
    },
}

impl IssueOutcome {
    /// Returns true if the issue left the source repository.
    #[must_use]
    pub fn is_transferred(&self) -> bool {
        matches!(self, Self::Transferred { .. })
    }

    /// Returns true if the issue was meant to move but is still in the
    /// source repository.
    #[must_use]
    pub fn is_left_behind(&self) -> bool {
        matches!(
            self,
            Self::TransferReturnedNothing { .. } | Self::Failed { .. }
        )
    }
}
