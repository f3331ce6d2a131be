//! Issue enumeration, transfer and labeling.
//!
//! Only open issues move. A transfer gives the issue a new id in the
//! destination, and only that new id is ever labeled.

mod status;

pub use status::{IssueOutcome, LabelStatus};

use crate::github::{
    ApiError, GitHubApi, Issue, IssueId, LabelId, LabelOutcome, RepositoryId,
    RepositoryWithIssues, TransferredIssue,
};
use tracing::{debug, info, info_span, warn, Instrument};

/// Fetches a repository's id and the first page of its issues.
///
/// Returns `Ok(None)` if the repository doesn't exist.
///
/// # Errors
///
/// Returns [`ApiError`] if the query fails.
pub async fn fetch_issue_directory<A: GitHubApi + ?Sized>(
    api: &A,
    owner: &str,
    repo: &str,
    page_size: u8,
) -> Result<Option<RepositoryWithIssues>, ApiError> {
    let Some(directory) = api.repository_with_issues(owner, repo, page_size).await? else {
        info!(repo, "Repository not found");
        return Ok(None);
    };

    let open = directory.issues.iter().filter(|i| i.is_open()).count();
    info!(
        repo,
        repository_id = %directory.repository.id,
        issues = directory.issues.len(),
        open,
        "Fetched issues"
    );

    if directory.has_more {
        warn!(
            repo,
            page_size, "Repository has more issues than one page, the rest are not migrated"
        );
    }

    Ok(Some(directory))
}

/// Transfers one issue to `destination`.
///
/// # Errors
///
/// Returns [`ApiError`] if the mutation fails.
pub async fn transfer_issue<A: GitHubApi + ?Sized>(
    api: &A,
    issue: &IssueId,
    destination: &RepositoryId,
) -> Result<Option<TransferredIssue>, ApiError> {
    let transferred = api.transfer_issue(issue, destination).await?;
    match &transferred {
        Some(new) => info!(new_id = %new.id, title = %new.title, "Transferred issue"),
        None => warn!("Transfer returned no issue"),
    }
    Ok(transferred)
}

/// Attaches `labels` to a transferred issue.
///
/// `labels` must be non-empty and `issue` must be the id returned by the
/// transfer.
pub async fn label_issue<A: GitHubApi + ?Sized>(
    api: &A,
    issue: &IssueId,
    labels: &[LabelId],
) -> LabelStatus {
    debug_assert!(!labels.is_empty());

    match api.label_issue(issue, labels).await {
        Ok(LabelOutcome::Labeled { title, repository }) => {
            info!(%title, %repository, "Labeled issue");
            LabelStatus::Labeled { repository }
        }
        Ok(LabelOutcome::UnexpectedLabelable { typename }) => {
            warn!(
                typename = typename.as_deref().unwrap_or("<none>"),
                "Label mutation returned something other than an issue"
            );
            LabelStatus::Unexpected { typename }
        }
        Err(e) => {
            warn!(error = %e, "Failed to label issue");
            LabelStatus::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Moves one open issue to the destination and labels it there.
///
/// Labeling only happens when the transfer returned a new issue id.
pub async fn migrate_issue<A: GitHubApi + ?Sized>(
    api: &A,
    issue: &Issue,
    destination: &RepositoryId,
    label: &LabelId,
) -> IssueOutcome {
    let span = info_span!("issue", issue_id = %issue.id);

    async {
        let transferred = match transfer_issue(api, &issue.id, destination).await {
            Ok(Some(transferred)) => transferred,
            Ok(None) => {
                return IssueOutcome::TransferReturnedNothing {
                    issue: issue.id.clone(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to transfer issue");
                return IssueOutcome::Failed {
                    issue: issue.id.clone(),
                    error: e.to_string(),
                };
            }
        };

        debug!(label_id = %label, "Labeling transferred issue");
        let label = label_issue(api, &transferred.id, std::slice::from_ref(label)).await;

        IssueOutcome::Transferred {
            old_id: issue.id.clone(),
            new_id: transferred.id,
            title: transferred.title,
            label,
        }
    }
    .instrument(span)
    .await
}
