//! Immutable engine input and its boundary validation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{DataQualityWarning, Milestone, MilestoneDependency, Project, ProjectId};
use crate::error::{Result, VantageError};

/// Every record the engine needs for one evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub dependencies: Vec<MilestoneDependency>,
}

/// Records belonging to a single project.
#[derive(Debug, Clone)]
pub struct ProjectRecords<'a> {
    pub project: &'a Project,
    pub milestones: Vec<Milestone>,
    pub dependencies: Vec<MilestoneDependency>,
}

/// Snapshot split per project, plus records no project could claim.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    /// One entry per project, in snapshot order
    pub groups: Vec<ProjectRecords<'a>>,
    pub warnings: Vec<DataQualityWarning>,
}

impl Snapshot {
    /// Rejects records the engine must never see.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::InvalidInput` for an out-of-range
    /// `percent_complete`, an empty project name, or a duplicated project or
    /// milestone identifier.
    pub fn validate(&self) -> Result<()> {
        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if project.name.trim().is_empty() {
                return Err(VantageError::invalid_input("name")
                    .with_reason(format!("project {} has an empty name", project.id)));
            }
            if !project_ids.insert(project.id) {
                return Err(VantageError::invalid_input("id")
                    .with_reason(format!("duplicate project id {}", project.id)));
            }
        }

        let mut milestone_ids = HashSet::new();
        for milestone in &self.milestones {
            if milestone.percent_complete > 100 {
                return Err(VantageError::invalid_input("percent_complete").with_reason(format!(
                    "milestone {} has {}%, expected 0-100",
                    milestone.id, milestone.percent_complete
                )));
            }
            if !milestone_ids.insert(milestone.id) {
                return Err(VantageError::invalid_input("id")
                    .with_reason(format!("duplicate milestone id {}", milestone.id)));
            }
        }

        Ok(())
    }

    /// Groups milestones and edges under their owning project.
    ///
    /// An edge belongs to the project owning `milestone_id`, falling back to
    /// the project owning `depends_on`. Edges and milestones nothing can claim
    /// are reported instead of grouped.
    pub fn partition(&self) -> Partition<'_> {
        let mut warnings = Vec::new();
        let mut slot: HashMap<ProjectId, usize> = HashMap::new();
        let mut groups: Vec<ProjectRecords<'_>> = Vec::with_capacity(self.projects.len());

        for project in &self.projects {
            slot.insert(project.id, groups.len());
            groups.push(ProjectRecords {
                project,
                milestones: Vec::new(),
                dependencies: Vec::new(),
            });
        }

        let mut owner: HashMap<u64, usize> = HashMap::new();
        for milestone in &self.milestones {
            match slot.get(&milestone.project_id) {
                Some(&idx) => {
                    owner.insert(milestone.id, idx);
                    groups[idx].milestones.push(milestone.clone());
                }
                None => warnings.push(DataQualityWarning::OrphanMilestone {
                    milestone_id: milestone.id,
                    project_id: milestone.project_id,
                }),
            }
        }

        for edge in &self.dependencies {
            let claimed = owner
                .get(&edge.milestone_id)
                .or_else(|| owner.get(&edge.depends_on));
            match claimed {
                Some(&idx) => groups[idx].dependencies.push(*edge),
                None => warnings.push(DataQualityWarning::OrphanDependency {
                    milestone_id: edge.milestone_id,
                    depends_on: edge.depends_on,
                }),
            }
        }

        Partition { groups, warnings }
    }

    /// Milestones owned by `project_id`, in snapshot order.
    pub fn milestones_of(&self, project_id: ProjectId) -> impl Iterator<Item = &Milestone> {
        self.milestones
            .iter()
            .filter(move |m| m.project_id == project_id)
    }
}
