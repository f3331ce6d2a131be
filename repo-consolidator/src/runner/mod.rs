//! Orchestrates the migration of every repository in a plan.
//!
//! Per repository the steps are strictly ordered: README rewrite, issue
//! lookup, issue transfers (concurrent among themselves), archival. All
//! transfers and their labeling are awaited before archival starts.
//! Repositories are independent of each other and run concurrently.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::{MigrationError, RunnerError};

use crate::archive::{archive_repository, ArchiveStatus};
use crate::config::{load_plan, ArchivePolicy, MigrationPlan, RepositoryTarget};
use crate::content::{update_file_if_changed, ContentStatus, ContentUpdate};
use crate::github::{GitHubApi, GitHubClient};
use crate::issues::{fetch_issue_directory, migrate_issue, IssueOutcome};
use crate::summary::{MigrationOutcome, ProcessingResult, RunSummary};
use crate::templates::{ReadmeContext, TemplateRenderer};
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::{error, info, info_span, warn, Instrument};

/// Orchestrates a full migration run.
pub struct Runner<A = GitHubClient> {
    config: RunnerConfig,
    api: A,
    renderer: TemplateRenderer,
}

impl Runner<GitHubClient> {
    /// Builds a runner talking to GitHub with the configured token.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let api = GitHubClient::new(config.token())?;
        Ok(Self::with_api(config, api))
    }
}

impl<A: GitHubApi> Runner<A> {
    /// Builds a runner on top of any [`GitHubApi`] implementation.
    pub fn with_api(config: RunnerConfig, api: A) -> Self {
        Self {
            config,
            api,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Returns the API the runner talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Loads the configured plan and migrates every repository in it.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let plan = load_plan(self.config.plan_path())?;
        Ok(self.run_plan(&plan).await)
    }

    /// Migrates every repository in `plan` and tallies the results.
    pub async fn run_plan(&self, plan: &MigrationPlan) -> RunSummary {
        let mut summary = RunSummary::new(self.config.dry_run());
        for result in self.migrate_all(plan).await {
            summary.record_result(&result);
        }
        summary
    }

    /// Migrates every repository in `plan`, one result per repository in
    /// completion order.
    pub async fn migrate_all(&self, plan: &MigrationPlan) -> Vec<ProcessingResult> {
        let targets = plan.targets();
        if targets.is_empty() {
            warn!("Plan has no repositories");
            return Vec::new();
        }

        let limit = self
            .config
            .concurrency()
            .unwrap_or(targets.len())
            .max(1);
        info!(
            repositories = targets.len(),
            concurrency = limit,
            dry_run = self.config.dry_run(),
            "Starting migration"
        );

        stream::iter(targets)
            .map(|target| self.process_repository(plan, target))
            .buffer_unordered(limit)
            .collect()
            .await
    }

    async fn process_repository(
        &self,
        plan: &MigrationPlan,
        target: &RepositoryTarget,
    ) -> ProcessingResult {
        let span = info_span!("repository", repo = %target.short_name);

        match migrate_repository(
            &self.api,
            plan,
            target,
            &self.renderer,
            self.config.dry_run(),
        )
        .instrument(span)
        .await
        {
            Ok(outcome) => ProcessingResult::Completed(outcome),
            Err(e) => {
                error!(repo = %target.short_name, error = %e, "Repository migration failed");
                ProcessingResult::Failed {
                    repository: target.short_name.clone(),
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Runs the full workflow for one repository.
///
/// # Errors
///
/// Returns [`MigrationError`] if the README step or the issue lookup fails.
/// Per-issue and archival failures are reported in the outcome instead.
pub async fn migrate_repository<A: GitHubApi + ?Sized>(
    api: &A,
    plan: &MigrationPlan,
    target: &RepositoryTarget,
    renderer: &TemplateRenderer,
    dry_run: bool,
) -> Result<MigrationOutcome, MigrationError> {
    let repo = target.short_name.as_str();

    let content = renderer.render_readme(&plan.readme_template, &ReadmeContext::new(plan, repo))?;
    let readme = update_file_if_changed(
        api,
        ContentUpdate {
            owner: &plan.owner,
            repo,
            path: &plan.readme_path,
            content,
            message: &plan.commit_message,
            identity: &plan.identity,
        },
        dry_run,
    )
    .await
    .map_err(MigrationError::Content)?;
    log_readme(repo, &readme);

    let Some(directory) = fetch_issue_directory(api, &plan.owner, repo, plan.issue_page_size)
        .await
        .map_err(MigrationError::IssueDirectory)?
    else {
        return Ok(MigrationOutcome {
            repository: repo.to_string(),
            readme,
            found: false,
            issues: Vec::new(),
            skipped_closed: 0,
            archive: ArchiveStatus::NotAttempted,
        });
    };

    let (open, closed): (Vec<_>, Vec<_>) =
        directory.issues.iter().partition(|issue| issue.is_open());

    let issues: Vec<IssueOutcome> = if dry_run {
        open.iter()
            .map(|issue| {
                info!(issue_id = %issue.id, "Would transfer issue");
                IssueOutcome::Planned {
                    issue: issue.id.clone(),
                }
            })
            .collect()
    } else {
        join_all(open.iter().map(|issue| {
            migrate_issue(
                api,
                issue,
                &plan.destination_repository_id,
                &target.destination_label_id,
            )
        }))
        .await
    };

    let left_behind = issues.iter().filter(|o| o.is_left_behind()).count();
    let archive = if dry_run {
        info!(repository_id = %directory.repository.id, "Would archive repository");
        ArchiveStatus::Skipped {
            reason: "dry run".to_string(),
        }
    } else if plan.archive_policy == ArchivePolicy::WhenAllTransferred && left_behind > 0 {
        warn!(
            left_behind,
            "Not archiving, some open issues are still in the repository"
        );
        ArchiveStatus::Skipped {
            reason: format!("{left_behind} open issue(s) were not transferred"),
        }
    } else {
        archive_repository(api, &directory.repository).await
    };

    Ok(MigrationOutcome {
        repository: repo.to_string(),
        readme,
        found: true,
        issues,
        skipped_closed: closed.len(),
        archive,
    })
}

fn log_readme(repo: &str, status: &ContentStatus) {
    match status {
        ContentStatus::Updated { commit_url, .. } => info!(
            repo,
            commit = commit_url.as_deref().unwrap_or("<unknown>"),
            "README updated"
        ),
        ContentStatus::UpToDate => info!(repo, "README already up to date"),
        ContentStatus::WouldUpdate { created } => {
            info!(repo, created, "Would update README")
        }
    }
}
