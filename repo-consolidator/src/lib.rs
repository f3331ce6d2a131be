//! Retires a set of repositories in favour of one consolidated repository.
//!
//! For every repository named in a [`MigrationPlan`] the README is replaced
//! with a pointer to the destination, open issues are transferred there and
//! labeled after their origin, and the repository is archived.

pub mod archive;
pub mod config;
pub mod content;
pub mod github;
pub mod issues;
pub mod runner;
pub mod summary;
pub mod templates;

pub use archive::{archive_repository, ArchiveStatus};
pub use config::{load_plan, ArchivePolicy, ConfigError, MigrationPlan, RepositoryTarget};
pub use content::{update_file_if_changed, ContentStatus, ContentUpdate};
pub use github::{ApiError, GitHubApi, GitHubClient};
pub use issues::{
    fetch_issue_directory, label_issue, migrate_issue, transfer_issue, IssueOutcome, LabelStatus,
};
pub use runner::{migrate_repository, MigrationError, Runner, RunnerConfig, RunnerError};
pub use summary::{MigrationOutcome, ProcessingResult, RunSummary};
pub use templates::{create_handlebars_registry, ReadmeContext, TemplateError, TemplateRenderer};
