//! Idempotent file rewrites.
//!
//! The replacement README is only committed when the stored file differs,
//! so rerunning a migration never produces empty commits.

use crate::github::{ApiError, CommitIdentity, FileWrite, GitHubApi};
use serde::Serialize;
use tracing::{debug, info};

/// What happened to the target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContentStatus {
    /// A commit was written.
    Updated {
        /// Browser URL of the commit, if reported.
        commit_url: Option<String>,
        /// Whether the file was created rather than overwritten.
        created: bool,
    },

    /// The stored file already matched.
    UpToDate,

    /// Dry run: a commit would have been written.
    WouldUpdate {
        /// Whether the file would be created rather than overwritten.
        created: bool,
    },
}

impl ContentStatus {
    /// Returns true if a commit was written.
    #[must_use]
    pub fn updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// A desired file state in one repository.
#[derive(Debug, Clone)]
pub struct ContentUpdate<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub path: &'a str,
    pub content: String,
    pub message: &'a str,
    pub identity: &'a CommitIdentity,
}

/// Writes `update.content` to the file unless it's already there.
///
/// At most one commit is made. A missing file is created. With `dry_run`
/// only the read is performed.
///
/// # Errors
///
/// Returns [`ApiError`] if reading or writing the file fails.
pub async fn update_file_if_changed<A: GitHubApi + ?Sized>(
    api: &A,
    update: ContentUpdate<'_>,
    dry_run: bool,
) -> Result<ContentStatus, ApiError> {
    let existing = api.get_file(update.owner, update.repo, update.path).await?;

    if let Some(file) = &existing {
        if file.content.as_deref() == Some(update.content.as_str()) {
            debug!(repo = update.repo, path = update.path, "File already up to date");
            return Ok(ContentStatus::UpToDate);
        }
    }

    let created = existing.is_none();
    if dry_run {
        return Ok(ContentStatus::WouldUpdate { created });
    }

    let write = FileWrite {
        path: update.path.to_string(),
        content: update.content,
        message: update.message.to_string(),
        identity: update.identity.clone(),
        sha: existing.map(|file| file.sha),
    };

    let commit = api.put_file(update.owner, update.repo, &write).await?;
    info!(
        repo = update.repo,
        path = update.path,
        created,
        commit = commit.html_url.as_deref().unwrap_or("<unknown>"),
        "File updated"
    );

    Ok(ContentStatus::Updated {
        commit_url: commit.html_url,
        created,
    })
}
