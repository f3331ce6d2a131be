//! [`GitHubApi`] implementation backed by octocrab.

use super::graphql::{
    ArchiveRepositoryData, GraphQlResponse, LabelIssueData, RepoWithIssuesData,
    TransferIssueData, ARCHIVE_REPOSITORY, LABEL_ISSUE, REPO_WITH_ISSUES, TRANSFER_ISSUE,
};
use super::{
    ApiError, CommitInfo, FileWrite, GitHubApi, IssueId, LabelId, LabelOutcome, RemoteFile,
    RepositoryId, RepositoryWithIssues, TransferredIssue,
};
use async_trait::async_trait;
use octocrab::models::repos::CommitAuthor;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// GitHub client talking to the REST contents API and the GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client can't be built.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    /// Wraps an already configured octocrab instance.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    async fn graphql<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> Result<T, ApiError> {
        debug!(operation, "Sending GraphQL request");
        let response: GraphQlResponse<T> = self
            .octocrab
            .graphql(&json!({ "query": query, "variables": variables }))
            .await?;

        let (data, errors) = response.into_data(operation)?;
        if !errors.is_empty() {
            warn!(operation, errors = %errors.join(", "), "GraphQL reported errors");
        }
        Ok(data)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<RemoteFile>, ApiError> {
        let result = self
            .octocrab
            .repos(owner, repo)
            .get_content()
            .path(path)
            .send()
            .await;

        let items = match result {
            Ok(items) => items,
            Err(e) => {
                let e = ApiError::from(e);
                if e.is_not_found() {
                    debug!(owner, repo, path, "File does not exist");
                    return Ok(None);
                }
                return Err(e);
            }
        };

        let Some(item) = items.items.into_iter().next() else {
            return Ok(None);
        };

        // Undecodable content never matches, so the file gets overwritten.
        let content = item.decoded_content();
        if content.is_none() {
            warn!(owner, repo, path, "Stored file is not UTF-8 text");
        }

        Ok(Some(RemoteFile {
            content,
            sha: item.sha,
        }))
    }

    async fn put_file(
        &self,
        owner: &str,
        repo: &str,
        write: &FileWrite,
    ) -> Result<CommitInfo, ApiError> {
        let repos = self.octocrab.repos(owner, repo);
        let identity = CommitAuthor {
            name: write.identity.name.clone(),
            email: Some(write.identity.email.clone()),
            date: None,
        };

        let update = match &write.sha {
            Some(sha) => {
                repos
                    .update_file(&write.path, &write.message, &write.content, sha)
                    .author(identity.clone())
                    .commiter(identity)
                    .send()
                    .await?
            }
            None => {
                repos
                    .create_file(&write.path, &write.message, &write.content)
                    .author(identity.clone())
                    .commiter(identity)
                    .send()
                    .await?
            }
        };

        Ok(CommitInfo {
            html_url: update.commit.html_url.into(),
        })
    }

    async fn repository_with_issues(
        &self,
        owner: &str,
        repo: &str,
        first: u8,
    ) -> Result<Option<RepositoryWithIssues>, ApiError> {
        let data: RepoWithIssuesData = self
            .graphql(
                "RepoWithIssues",
                REPO_WITH_ISSUES,
                json!({ "owner": owner, "repo": repo, "first": first }),
            )
            .await?;
        Ok(data.into_repository())
    }

    async fn transfer_issue(
        &self,
        issue: &IssueId,
        destination: &RepositoryId,
    ) -> Result<Option<TransferredIssue>, ApiError> {
        let data: TransferIssueData = self
            .graphql(
                "TransferIssue",
                TRANSFER_ISSUE,
                json!({ "issueId": issue, "repositoryId": destination }),
            )
            .await?;
        Ok(data.into_issue())
    }

    async fn label_issue(
        &self,
        issue: &IssueId,
        labels: &[LabelId],
    ) -> Result<LabelOutcome, ApiError> {
        let data: LabelIssueData = self
            .graphql(
                "LabelIssue",
                LABEL_ISSUE,
                json!({ "issueId": issue, "labelIds": labels }),
            )
            .await?;
        Ok(data.into_outcome())
    }

    async fn archive_repository(
        &self,
        repository: &RepositoryId,
    ) -> Result<Option<String>, ApiError> {
        let data: ArchiveRepositoryData = self
            .graphql(
                "ArchiveRepository",
                ARCHIVE_REPOSITORY,
                json!({ "repositoryId": repository }),
            )
            .await?;
        Ok(data.into_name())
    }
}
