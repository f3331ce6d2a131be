//! Migration plan loading.
//!
//! A plan is a single TOML file describing which repositories are retired,
//! where their issues go, and what their README is replaced with.

mod error;
mod plan;
mod target;

pub use error::ConfigError;
pub use plan::{ArchivePolicy, MigrationPlan};
pub use target::RepositoryTarget;

use std::path::Path;
use tracing::info;

/// Loads and validates a migration plan from disk.
///
/// # Errors
///
/// Returns an error if the file doesn't exist, can't be read, or is not a
/// valid plan.
pub fn load_plan(path: &Path) -> Result<MigrationPlan, ConfigError> {
    info!(path = %path.display(), "Loading migration plan");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let plan = MigrationPlan::parse(&text, path)?;
    info!(
        owner = %plan.owner,
        destination = %plan.destination_name,
        repositories = plan.targets().len(),
        "Loaded migration plan"
    );
    Ok(plan)
}
