//! Project model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, ProjectStatus};

/// Identifier of a project record.
pub type ProjectId = u64;

/// A tracked project, as supplied by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: ProjectId,

    /// Display name of the project
    pub name: String,

    /// Lifecycle state
    pub status: ProjectStatus,

    /// Relative importance
    #[serde(default)]
    pub priority: Priority,

    /// Timestamp of the last recorded activity (UTC)
    pub updated_at: Timestamp,
}

impl Project {
    /// Whether the project counts toward portfolio aggregates.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
