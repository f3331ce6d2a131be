//! In-memory GitHub used by the integration tests.
//!
//! Every call is recorded in order so tests can assert which requests were
//! made, with which arguments, and in what sequence.

#![allow(dead_code)]

use async_trait::async_trait;
use repo_consolidator::github::{
    ApiError, CommitInfo, FileWrite, GitHubApi, Issue, IssueId, IssueState, LabelId,
    LabelOutcome, RemoteFile, RepositoryHandle, RepositoryId, RepositoryWithIssues,
    TransferredIssue,
};
use repo_consolidator::MigrationPlan;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

pub const GITHUB_LABEL: &str = "LA_kwDOJCgd3c8AAAABOmOtmw";
pub const NITTER_LABEL: &str = "LA_kwDOJCgd3c8AAAABOmPU1Q";
pub const DESTINATION_ID: &str = "R_kgDOJCgd3Q";

/// A request received by [`FakeGitHub`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetFile { repo: String, path: String },
    PutFile { repo: String, write: FileWrite },
    RepositoryWithIssues { repo: String, first: u8 },
    Transfer { issue: IssueId, destination: RepositoryId },
    Label { issue: IssueId, labels: Vec<LabelId> },
    Archive { repository: RepositoryId },
}

#[derive(Default)]
struct State {
    files: HashMap<String, RemoteFile>,
    repositories: HashMap<String, RepositoryWithIssues>,
    null_transfers: HashSet<IssueId>,
    failing_transfers: HashSet<IssueId>,
    failing_puts: HashSet<String>,
    unexpected_labelables: HashSet<IssueId>,
    null_archives: HashSet<RepositoryId>,
    calls: Vec<Call>,
}

/// Scriptable in-memory implementation of [`GitHubApi`].
#[derive(Default)]
pub struct FakeGitHub {
    state: Mutex<State>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a README in `repo`.
    pub fn with_readme(self, repo: &str, content: &str) -> Self {
        self.state.lock().unwrap().files.insert(
            repo.to_string(),
            RemoteFile {
                content: Some(content.to_string()),
                sha: format!("sha-{repo}"),
            },
        );
        self
    }

    /// Stores a README in `repo` whose bytes aren't valid UTF-8.
    pub fn with_binary_readme(self, repo: &str) -> Self {
        self.state.lock().unwrap().files.insert(
            repo.to_string(),
            RemoteFile {
                content: None,
                sha: format!("sha-{repo}"),
            },
        );
        self
    }

    /// Registers an existing repository with id `R_{repo}` and the given
    /// issues.
    pub fn with_repository(self, repo: &str, issues: &[(&str, IssueState)]) -> Self {
        let directory = RepositoryWithIssues {
            repository: RepositoryHandle {
                id: RepositoryId::from(format!("R_{repo}")),
                name: repo.to_string(),
            },
            issues: issues
                .iter()
                .map(|(id, state)| Issue {
                    id: IssueId::from(*id),
                    state: *state,
                })
                .collect(),
            has_more: false,
        };
        self.state
            .lock()
            .unwrap()
            .repositories
            .insert(repo.to_string(), directory);
        self
    }

    /// Makes the transfer of `issue` return no issue.
    pub fn with_null_transfer(self, issue: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .null_transfers
            .insert(IssueId::from(issue));
        self
    }

    /// Makes the transfer of `issue` fail.
    pub fn with_failing_transfer(self, issue: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_transfers
            .insert(IssueId::from(issue));
        self
    }

    /// Makes writing the README of `repo` fail.
    pub fn with_failing_put(self, repo: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_puts
            .insert(repo.to_string());
        self
    }

    /// Makes labeling the transferred copy of `issue` return a non-issue.
    pub fn with_unexpected_labelable(self, issue: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .unexpected_labelables
            .insert(transferred_id(&IssueId::from(issue)));
        self
    }

    /// Makes archiving `repo` report no repository.
    pub fn with_null_archive(self, repo: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .null_archives
            .insert(RepositoryId::from(format!("R_{repo}")));
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn puts(&self) -> Vec<(String, FileWrite)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::PutFile { repo, write } => Some((repo, write)),
                _ => None,
            })
            .collect()
    }

    pub fn transfers(&self) -> Vec<IssueId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Transfer { issue, .. } => Some(issue),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<(IssueId, Vec<LabelId>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Label { issue, labels } => Some((issue, labels)),
                _ => None,
            })
            .collect()
    }

    pub fn archives(&self) -> Vec<RepositoryId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Archive { repository } => Some(repository),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

/// Id the fake gives an issue once it has been transferred.
pub fn transferred_id(issue: &IssueId) -> IssueId {
    IssueId::from(format!("T_{issue}"))
}

fn failure(operation: &'static str) -> ApiError {
    ApiError::GraphQl {
        operation,
        messages: vec!["Bad credentials".to_string()],
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn get_file(
        &self,
        _owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<RemoteFile>, ApiError> {
        self.record(Call::GetFile {
            repo: repo.to_string(),
            path: path.to_string(),
        });
        Ok(self.state.lock().unwrap().files.get(repo).cloned())
    }

    async fn put_file(
        &self,
        _owner: &str,
        repo: &str,
        write: &FileWrite,
    ) -> Result<CommitInfo, ApiError> {
        self.record(Call::PutFile {
            repo: repo.to_string(),
            write: write.clone(),
        });
        if self.state.lock().unwrap().failing_puts.contains(repo) {
            return Err(failure("put-file"));
        }
        Ok(CommitInfo {
            html_url: Some(format!("https://github.com/catppuccin/{repo}/commit/abc")),
        })
    }

    async fn repository_with_issues(
        &self,
        _owner: &str,
        repo: &str,
        first: u8,
    ) -> Result<Option<RepositoryWithIssues>, ApiError> {
        self.record(Call::RepositoryWithIssues {
            repo: repo.to_string(),
            first,
        });
        Ok(self.state.lock().unwrap().repositories.get(repo).cloned())
    }

    async fn transfer_issue(
        &self,
        issue: &IssueId,
        destination: &RepositoryId,
    ) -> Result<Option<TransferredIssue>, ApiError> {
        self.record(Call::Transfer {
            issue: issue.clone(),
            destination: destination.clone(),
        });
        tokio::task::yield_now().await;

        let (null, failing) = {
            let state = self.state.lock().unwrap();
            (
                state.null_transfers.contains(issue),
                state.failing_transfers.contains(issue),
            )
        };
        if failing {
            return Err(failure("TransferIssue"));
        }
        if null {
            return Ok(None);
        }
        Ok(Some(TransferredIssue {
            id: transferred_id(issue),
            title: format!("Issue {issue}"),
        }))
    }

    async fn label_issue(
        &self,
        issue: &IssueId,
        labels: &[LabelId],
    ) -> Result<LabelOutcome, ApiError> {
        tokio::task::yield_now().await;
        self.record(Call::Label {
            issue: issue.clone(),
            labels: labels.to_vec(),
        });

        if self
            .state
            .lock()
            .unwrap()
            .unexpected_labelables
            .contains(issue)
        {
            return Ok(LabelOutcome::UnexpectedLabelable {
                typename: Some("PullRequest".to_string()),
            });
        }
        Ok(LabelOutcome::Labeled {
            title: format!("Issue {issue}"),
            repository: "userstyles".to_string(),
        })
    }

    async fn archive_repository(
        &self,
        repository: &RepositoryId,
    ) -> Result<Option<String>, ApiError> {
        self.record(Call::Archive {
            repository: repository.clone(),
        });
        if self
            .state
            .lock()
            .unwrap()
            .null_archives
            .contains(repository)
        {
            return Ok(None);
        }
        Ok(repository
            .as_str()
            .strip_prefix("R_")
            .map(str::to_string))
    }
}

/// Builds a plan for the given `(repository, label)` pairs.
pub fn plan(labels: &[(&str, &str)]) -> MigrationPlan {
    plan_with(labels, "")
}

/// Builds a plan with extra top-level TOML keys.
pub fn plan_with(labels: &[(&str, &str)], extra: &str) -> MigrationPlan {
    let table: String = labels
        .iter()
        .map(|(repo, label)| format!("\"{repo}\" = \"{label}\"\n"))
        .collect();

    let text = format!(
        r#"{extra}
owner = "catppuccin"
destination-repository-id = "{DESTINATION_ID}"
destination-name = "catppuccin/userstyles"
commit-message = "chore: archive repository in favor of catppuccin/userstyles"

[identity]
name = "github-actions[bot]"
email = "41898282+github-actions[bot]@users.noreply.github.com"

[readme]
template = "Moved to https://github.com/{{{{destination}}}}/tree/main/styles/{{{{repo}}}}\n"

[labels]
{table}"#
    );

    MigrationPlan::parse(&text, Path::new("test-plan.toml")).unwrap()
}

/// README the test plan renders for `repo`.
pub fn expected_readme(repo: &str) -> String {
    format!("Moved to https://github.com/catppuccin/userstyles/tree/main/styles/{repo}\n")
}
