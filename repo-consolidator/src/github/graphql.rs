//! GraphQL documents and response shapes.

use crate::github::{
    ApiError, Issue, IssueId, IssueState, LabelOutcome, RepositoryHandle, RepositoryId,
    RepositoryWithIssues, TransferredIssue,
};
use serde::Deserialize;

pub(crate) const REPO_WITH_ISSUES: &str = r#"
query RepoWithIssues($owner: String!, $repo: String!, $first: Int!) {
  repository(owner: $owner, name: $repo) {
    id
    name
    issues(first: $first) {
      nodes {
        id
        state
      }
      pageInfo {
        hasNextPage
      }
    }
  }
}
"#;

pub(crate) const TRANSFER_ISSUE: &str = r#"
mutation TransferIssue($issueId: ID!, $repositoryId: ID!) {
  transferIssue(
    input: {issueId: $issueId, repositoryId: $repositoryId, createLabelsIfMissing: false}
  ) {
    issue {
      id
      title
    }
  }
}
"#;

pub(crate) const LABEL_ISSUE: &str = r#"
mutation LabelIssue($issueId: ID!, $labelIds: [ID!]!) {
  addLabelsToLabelable(input: {labelableId: $issueId, labelIds: $labelIds}) {
    labelable {
      __typename
      ... on Issue {
        title
        repository {
          name
        }
      }
    }
  }
}
"#;

pub(crate) const ARCHIVE_REPOSITORY: &str = r#"
mutation ArchiveRepository($repositoryId: ID!) {
  archiveRepository(input: {repositoryId: $repositoryId}) {
    repository {
      name
    }
  }
}
"#;

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Returns the payload, or the reported errors if there is none.
    ///
    /// Errors next to a payload are returned to the caller for logging; the
    /// payload's nullable fields already say what didn't happen.
    pub fn into_data(self, operation: &'static str) -> Result<(T, Vec<String>), ApiError> {
        let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
        match self.data {
            Some(data) => Ok((data, messages)),
            None => Err(ApiError::GraphQl {
                operation,
                messages: if messages.is_empty() {
                    vec!["response contained neither data nor errors".to_string()]
                } else {
                    messages
                },
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepoWithIssuesData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    id: RepositoryId,
    name: String,
    issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueConnection {
    #[serde(default)]
    nodes: Vec<Option<IssueNode>>,
    page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    id: Option<IssueId>,
    state: IssueState,
}

impl RepoWithIssuesData {
    /// Converts the payload; `None` means the repository doesn't exist.
    pub fn into_repository(self) -> Option<RepositoryWithIssues> {
        let node = self.repository?;
        let has_more = node.issues.page_info.is_some_and(|p| p.has_next_page);
        let issues = node
            .issues
            .nodes
            .into_iter()
            .flatten()
            .filter_map(|issue| {
                Some(Issue {
                    id: issue.id?,
                    state: issue.state,
                })
            })
            .collect();

        Some(RepositoryWithIssues {
            repository: RepositoryHandle {
                id: node.id,
                name: node.name,
            },
            issues,
            has_more,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransferIssueData {
    transfer_issue: Option<TransferPayload>,
}

#[derive(Debug, Deserialize)]
struct TransferPayload {
    issue: Option<TransferredIssueNode>,
}

#[derive(Debug, Deserialize)]
struct TransferredIssueNode {
    id: Option<IssueId>,
    title: String,
}

impl TransferIssueData {
    /// Returns the new issue, if the transfer produced one with an id.
    pub fn into_issue(self) -> Option<TransferredIssue> {
        let issue = self.transfer_issue?.issue?;
        Some(TransferredIssue {
            id: issue.id?,
            title: issue.title,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LabelIssueData {
    add_labels_to_labelable: Option<LabelPayload>,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    labelable: Option<LabelableNode>,
}

#[derive(Debug, Deserialize)]
struct LabelableNode {
    #[serde(rename = "__typename")]
    typename: Option<String>,
    title: Option<String>,
    repository: Option<NamedNode>,
}

#[derive(Debug, Deserialize)]
struct NamedNode {
    name: String,
}

impl LabelIssueData {
    pub fn into_outcome(self) -> LabelOutcome {
        let Some(node) = self.add_labels_to_labelable.and_then(|p| p.labelable) else {
            return LabelOutcome::UnexpectedLabelable { typename: None };
        };

        match (node.typename.as_deref(), node.title, node.repository) {
            (Some("Issue"), Some(title), Some(repository)) => LabelOutcome::Labeled {
                title,
                repository: repository.name,
            },
            _ => LabelOutcome::UnexpectedLabelable {
                typename: node.typename,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArchiveRepositoryData {
    archive_repository: Option<ArchivePayload>,
}

#[derive(Debug, Deserialize)]
struct ArchivePayload {
    repository: Option<NamedNode>,
}

impl ArchiveRepositoryData {
    /// Returns the archived repository's name, if reported.
    pub fn into_name(self) -> Option<String> {
        Some(self.archive_repository?.repository?.name)
    }
}
