//! Milestone and dependency edge models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{MilestoneStatus, ProjectId};

/// Identifier of a milestone record.
pub type MilestoneId = u64;

/// A milestone belonging to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Unique identifier for the milestone
    pub id: MilestoneId,

    /// ID of the owning project
    pub project_id: ProjectId,

    /// Short title of the milestone
    #[serde(default)]
    pub title: String,

    /// Current progress state
    pub status: MilestoneStatus,

    /// Completion percentage, 0 through 100
    pub percent_complete: u8,

    /// Date the milestone is planned to land, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<Date>,

    /// Stable tiebreak when ordering milestones
    pub sort_order: i64,
}

impl Milestone {
    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }
}

/// Dependency edge: `milestone_id` cannot be finished before `depends_on`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MilestoneDependency {
    /// The dependent milestone
    pub milestone_id: MilestoneId,

    /// The milestone that has to complete first
    pub depends_on: MilestoneId,
}

impl MilestoneDependency {
    pub fn new(milestone_id: MilestoneId, depends_on: MilestoneId) -> Self {
        Self {
            milestone_id,
            depends_on,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.milestone_id == self.depends_on
    }
}
