//! Hosting API boundary.
//!
//! Every network call the migration makes goes through [`GitHubApi`]. The
//! production implementation is [`GitHubClient`]; tests substitute an
//! in-memory recorder.

mod client;
mod error;
mod graphql;
mod types;

pub use client::GitHubClient;
pub use error::ApiError;
pub use types::{
    CommitIdentity, CommitInfo, FileWrite, Issue, IssueId, IssueState, LabelId, LabelOutcome,
    RemoteFile, RepositoryHandle, RepositoryId, RepositoryWithIssues, TransferredIssue,
};

use async_trait::async_trait;

/// Operations the migration needs from the hosting service.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Reads a file; `Ok(None)` if it doesn't exist.
    async fn get_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<RemoteFile>, ApiError>;

    /// Creates or overwrites a file with a single commit.
    async fn put_file(
        &self,
        owner: &str,
        repo: &str,
        write: &FileWrite,
    ) -> Result<CommitInfo, ApiError>;

    /// Resolves a repository and the first `first` issues in it.
    ///
    /// `Ok(None)` means the repository doesn't exist.
    async fn repository_with_issues(
        &self,
        owner: &str,
        repo: &str,
        first: u8,
    ) -> Result<Option<RepositoryWithIssues>, ApiError>;

    /// Moves an issue into `destination` without creating missing labels.
    ///
    /// `Ok(None)` means the mutation returned no issue.
    async fn transfer_issue(
        &self,
        issue: &IssueId,
        destination: &RepositoryId,
    ) -> Result<Option<TransferredIssue>, ApiError>;

    /// Attaches labels to an issue.
    async fn label_issue(
        &self,
        issue: &IssueId,
        labels: &[LabelId],
    ) -> Result<LabelOutcome, ApiError>;

    /// Archives a repository, returning its name if the API reports it.
    async fn archive_repository(
        &self,
        repository: &RepositoryId,
    ) -> Result<Option<String>, ApiError>;
}
