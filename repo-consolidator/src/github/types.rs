//! Values exchanged with the hosting API.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! node_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Returns the raw node id.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

node_id!(
    /// GraphQL node id of a repository.
    RepositoryId
);
node_id!(
    /// GraphQL node id of an issue. Changes when the issue is transferred.
    IssueId
);
node_id!(
    /// GraphQL node id of a label.
    LabelId
);

/// Name and email used as both author and committer of file writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

/// A file as currently stored in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Decoded file content, `None` if it isn't valid UTF-8 text.
    pub content: Option<String>,

    /// Blob sha, required to overwrite the file.
    pub sha: String,
}

/// A request to create or overwrite a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    pub path: String,
    pub content: String,
    pub message: String,
    pub identity: CommitIdentity,

    /// Sha of the blob being replaced; `None` creates the file.
    pub sha: Option<String>,
}

/// The commit produced by a file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Browser URL of the commit, when the API reports one.
    pub html_url: Option<String>,
}

/// A repository resolved through the hosting API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    pub id: RepositoryId,
    pub name: String,
}

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    Open,
    Closed,
}

/// An issue as listed in its source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: IssueId,
    pub state: IssueState,
}

impl Issue {
    /// Returns true if the issue is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}

/// A repository together with the first page of its issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryWithIssues {
    pub repository: RepositoryHandle,
    pub issues: Vec<Issue>,

    /// Whether more issues exist beyond the returned page.
    pub has_more: bool,
}

/// The issue created in the destination by a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferredIssue {
    pub id: IssueId,
    pub title: String,
}

/// Result of attaching labels to a labelable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The labelable was an issue.
    Labeled {
        /// Issue title.
        title: String,
        /// Name of the repository holding the issue.
        repository: String,
    },

    /// The mutation returned something other than an issue, or nothing.
    UnexpectedLabelable {
        /// GraphQL `__typename` of the returned node, if any.
        typename: Option<String>,
    },
}
