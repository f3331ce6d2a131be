//! Repository archival.

use crate::github::{GitHubApi, RepositoryHandle};
use serde::Serialize;
use tracing::{error, info, warn};

/// What happened to the source repository at the end of its migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArchiveStatus {
    /// The repository is archived.
    Archived {
        /// Name reported by the API.
        name: String,
    },

    /// The mutation succeeded but reported no repository.
    NotReturned,

    /// Archival was deliberately not requested.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },

    /// The mutation failed.
    Failed {
        /// Error message.
        error: String,
    },

    /// The repository was never resolved, so there was nothing to archive.
    NotAttempted,
}

impl ArchiveStatus {
    /// Returns true if the repository is archived.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        matches!(self, Self::Archived { .. })
    }
}

/// Archives a source repository.
///
/// `repository` must be the handle captured when its issues were listed.
/// There is no way back from this step.
pub async fn archive_repository<A: GitHubApi + ?Sized>(
    api: &A,
    repository: &RepositoryHandle,
) -> ArchiveStatus {
    match api.archive_repository(&repository.id).await {
        Ok(Some(name)) => {
            info!(%name, "Archived repository");
            ArchiveStatus::Archived { name }
        }
        Ok(None) => {
            warn!(repo = %repository.name, "Archive mutation returned no repository");
            ArchiveStatus::NotReturned
        }
        Err(e) => {
            error!(repo = %repository.name, error = %e, "Failed to archive repository");
            ArchiveStatus::Failed {
                error: e.to_string(),
            }
        }
    }
}
