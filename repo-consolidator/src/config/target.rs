//! Source repository entries.

use crate::github::LabelId;

/// A source repository to retire, paired with the label its issues receive
/// once they land in the destination repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    /// Repository name under the plan's owner.
    pub short_name: String,

    /// Destination label applied to every transferred issue.
    pub destination_label_id: LabelId,
}

impl RepositoryTarget {
    /// Creates a new target.
    pub fn new(short_name: impl Into<String>, destination_label_id: impl Into<LabelId>) -> Self {
        Self {
            short_name: short_name.into(),
            destination_label_id: destination_label_id.into(),
        }
    }
}
