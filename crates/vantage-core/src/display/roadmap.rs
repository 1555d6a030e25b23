//! Ordered roadmap of one project.

use std::{collections::HashMap, fmt};

use super::datetime::TargetDate;
use crate::{
    models::{Milestone, MilestoneId, Project},
    roadmap::{ProjectRoadmap, RoadmapError},
};

/// Renders a [`ProjectRoadmap`] with milestone titles looked up from
/// `milestones`.
pub struct RoadmapView<'a> {
    pub project: &'a Project,
    pub milestones: &'a [Milestone],
    pub roadmap: &'a ProjectRoadmap,
}

impl<'a> RoadmapView<'a> {
    pub fn new(
        project: &'a Project,
        milestones: &'a [Milestone],
        roadmap: &'a ProjectRoadmap,
    ) -> Self {
        Self {
            project,
            milestones,
            roadmap,
        }
    }
}

impl fmt::Display for RoadmapView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let by_id: HashMap<MilestoneId, &Milestone> =
            self.milestones.iter().map(|m| (m.id, m)).collect();

        writeln!(f, "# Roadmap: {} (ID: {})", self.project.name, self.project.id)?;
        writeln!(f)?;

        match &self.roadmap.error {
            Some(RoadmapError::CycleDetected { cycles, .. }) => {
                writeln!(f, "**Roadmap blocked by dependency cycles:**")?;
                writeln!(f)?;
                for cycle in cycles {
                    let path = cycle
                        .iter()
                        .map(|id| id.to_string())
                        .collect::<Vec<_>>()
                        .join(" → ");
                    writeln!(f, "- {path}")?;
                }
                writeln!(f)?;
            }
            Some(err) => {
                writeln!(f, "**Roadmap could not be scheduled:** {err}")?;
                writeln!(f)?;
            }
            None if self.roadmap.schedule.is_empty() => {
                writeln!(f, "No milestones found.")?;
                writeln!(f)?;
            }
            None => {
                for entry in &self.roadmap.schedule {
                    let Some(milestone) = by_id.get(&entry.milestone_id) else {
                        continue;
                    };
                    write!(
                        f,
                        "{}. {} {} (ID: {})",
                        entry.order_index + 1,
                        milestone.status.with_icon(),
                        milestone.title,
                        milestone.id
                    )?;
                    write!(
                        f,
                        " - target {}, feasible {}",
                        TargetDate(milestone.target_date.as_ref()),
                        TargetDate(entry.earliest_feasible.as_ref())
                    )?;
                    if entry.slipped {
                        write!(f, " **slipped**")?;
                    }
                    if entry.blocked {
                        let waits = entry
                            .blocked_by
                            .iter()
                            .map(|id| id.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        write!(f, " ⛔ blocked by {waits}")?;
                    }
                    writeln!(f)?;
                }
                writeln!(f)?;
            }
        }

        if !self.roadmap.warnings.is_empty() {
            writeln!(f, "## Warnings")?;
            writeln!(f)?;
            for warning in &self.roadmap.warnings {
                writeln!(f, "- {warning}")?;
            }
        }
        Ok(())
    }
}
