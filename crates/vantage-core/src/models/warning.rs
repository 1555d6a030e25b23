//! Non-fatal data-quality findings surfaced alongside engine results.

use serde::{Deserialize, Serialize};

use super::{MilestoneId, ProjectId};

/// A record that was dropped or collapsed so computation could continue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// Edge referencing a milestone absent from the project's milestone set
    DanglingReference {
        milestone_id: MilestoneId,
        depends_on: MilestoneId,
        missing: MilestoneId,
    },
    /// The same edge appeared more than once
    DuplicateDependency {
        milestone_id: MilestoneId,
        depends_on: MilestoneId,
    },
    /// Milestone owned by a project that is not in the snapshot
    OrphanMilestone {
        milestone_id: MilestoneId,
        project_id: ProjectId,
    },
    /// Edge whose endpoints both reference unknown milestones
    OrphanDependency {
        milestone_id: MilestoneId,
        depends_on: MilestoneId,
    },
}
