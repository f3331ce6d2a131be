//! Migration plan deserialization and validation.

use crate::config::{ConfigError, RepositoryTarget};
use crate::github::{CommitIdentity, RepositoryId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Largest page GitHub's GraphQL connections accept.
const MAX_ISSUE_PAGE_SIZE: u8 = 100;

/// What to do with a source repository once its issues were handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchivePolicy {
    /// Archive whenever the repository lookup succeeded.
    #[default]
    Always,

    /// Archive only if every open issue was transferred.
    WhenAllTransferred,
}

/// Raw `[readme]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ReadmeSection {
    template: Option<String>,
    template_file: Option<String>,
}

/// Raw plan file, as written on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PlanFile {
    owner: String,
    destination_repository_id: String,
    destination_name: String,
    #[serde(default = "default_readme_path")]
    readme_path: String,
    commit_message: String,
    #[serde(default)]
    archive_policy: ArchivePolicy,
    #[serde(default = "default_issue_page_size")]
    issue_page_size: u8,
    identity: CommitIdentity,
    readme: ReadmeSection,
    labels: BTreeMap<String, String>,
}

pub(crate) fn default_readme_path() -> String {
    "README.md".to_string()
}

pub(crate) fn default_issue_page_size() -> u8 {
    30
}

/// A fully resolved migration plan.
///
/// Everything that describes one particular consolidation lives here so the
/// runner stays independent of any single migration instance.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    /// Account owning both the source repositories and the destination.
    pub owner: String,

    /// GraphQL node id of the repository issues are transferred into.
    pub destination_repository_id: RepositoryId,

    /// Human readable destination (e.g. "catppuccin/userstyles"), used in
    /// the README template and in log lines.
    pub destination_name: String,

    /// Path of the file rewritten in every source repository.
    pub readme_path: String,

    /// Commit message for the README rewrite.
    pub commit_message: String,

    /// Author and committer of the README rewrite.
    pub identity: CommitIdentity,

    /// Handlebars template for the new README body.
    pub readme_template: String,

    /// Archival behaviour after issue transfers.
    pub archive_policy: ArchivePolicy,

    /// Number of issues requested per repository (first page only).
    pub issue_page_size: u8,

    targets: Vec<RepositoryTarget>,
}

impl MigrationPlan {
    /// Parses a plan from TOML text.
    ///
    /// `origin` is the location the text came from; it is used in error
    /// messages and to resolve `readme.template-file` relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML, fails
    /// validation, or references a template file that cannot be read.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let path = origin.display().to_string();
        let raw: PlanFile = toml::from_str(text).map_err(|e| ConfigError::TomlError {
            path: path.clone(),
            source: e,
        })?;

        validate(&raw, &path)?;

        let readme_template = match (raw.readme.template, raw.readme.template_file) {
            (Some(template), None) => template,
            (None, Some(file)) => {
                let base = origin.parent().unwrap_or_else(|| Path::new("."));
                let template_path = base.join(file);
                debug!(path = %template_path.display(), "Reading README template");
                std::fs::read_to_string(&template_path).map_err(|e| ConfigError::IoError {
                    path: template_path.display().to_string(),
                    source: e,
                })?
            }
            (Some(_), Some(_)) => {
                return Err(invalid(&path, "readme sets both template and template-file"));
            }
            (None, None) => {
                return Err(invalid(&path, "readme needs either template or template-file"));
            }
        };

        if readme_template.trim().is_empty() {
            return Err(invalid(&path, "README template is empty"));
        }

        let targets = raw
            .labels
            .into_iter()
            .map(|(short_name, label)| RepositoryTarget::new(short_name, label))
            .collect();

        Ok(Self {
            owner: raw.owner,
            destination_repository_id: RepositoryId::from(raw.destination_repository_id),
            destination_name: raw.destination_name,
            readme_path: raw.readme_path,
            commit_message: raw.commit_message,
            identity: raw.identity,
            readme_template,
            archive_policy: raw.archive_policy,
            issue_page_size: raw.issue_page_size,
            targets,
        })
    }

    /// Repositories to retire, ordered by name.
    #[must_use]
    pub fn targets(&self) -> &[RepositoryTarget] {
        &self.targets
    }
}

fn validate(raw: &PlanFile, path: &str) -> Result<(), ConfigError> {
    let required = [
        ("owner", &raw.owner),
        ("destination-repository-id", &raw.destination_repository_id),
        ("destination-name", &raw.destination_name),
        ("readme-path", &raw.readme_path),
        ("commit-message", &raw.commit_message),
        ("identity.name", &raw.identity.name),
        ("identity.email", &raw.identity.email),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(invalid(path, &format!("{key} must not be empty")));
        }
    }

    if raw.issue_page_size == 0 || raw.issue_page_size > MAX_ISSUE_PAGE_SIZE {
        return Err(invalid(
            path,
            &format!(
                "issue-page-size must be between 1 and {MAX_ISSUE_PAGE_SIZE}, got {}",
                raw.issue_page_size
            ),
        ));
    }

    if raw.labels.is_empty() {
        return Err(invalid(path, "labels table is empty"));
    }

    for (repo, label) in &raw.labels {
        if repo.trim().is_empty() || repo.contains('/') {
            return Err(invalid(path, &format!("invalid repository name '{repo}'")));
        }
        if label.trim().is_empty() {
            return Err(invalid(path, &format!("label id for '{repo}' is empty")));
        }
    }

    Ok(())
}

fn invalid(path: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        path: path.to_string(),
        message: message.to_string(),
    }
}
