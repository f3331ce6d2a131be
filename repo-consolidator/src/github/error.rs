//! Hosting API error types.

use thiserror::Error;

/// Errors returned by [`GitHubApi`](super::GitHubApi) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub API error (transport, authentication, HTTP status).
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The GraphQL endpoint answered without data.
    #[error("GraphQL {operation} failed: {}", .messages.join(", "))]
    GraphQl {
        operation: &'static str,
        messages: Vec<String>,
    },

    /// The API answered with something that can't be interpreted.
    #[error("Unexpected response from {operation}: {message}")]
    UnexpectedResponse {
        operation: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Returns true if the error is an HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::GitHubError(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            _ => false,
        }
    }
}
