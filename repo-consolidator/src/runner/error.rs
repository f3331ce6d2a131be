//! Runner error types.

use crate::github::ApiError;
use crate::templates::TemplateError;

/// Errors that stop a whole run before any repository is touched.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Plan loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors that stop the migration of a single repository.
///
/// Other repositories keep going; the failed one may be left partially
/// migrated.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The README template couldn't be rendered.
    #[error("Failed to render README: {0}")]
    Template(#[from] TemplateError),

    /// Reading or writing the README failed.
    #[error("Failed to update README: {0}")]
    Content(#[source] ApiError),

    /// Listing the repository's issues failed.
    #[error("Failed to fetch issues: {0}")]
    IssueDirectory(#[source] ApiError),
}
