//! Milestone dependency roadmap: build, validate, and order.
//!
//! The pipeline for one project is strictly sequential:
//!
//! ```text
//! ┌──────────────────────┐    ┌────────────────┐    ┌──────────────────────┐
//! │ DependencyGraph-     │    │ detect_cycles  │    │ TopologicalScheduler │
//! │ Builder (warnings)   │───▶│ (all members)  │───▶│ (order, blocked,     │
//! │                      │    │                │    │  feasible dates)     │
//! └──────────────────────┘    └────────────────┘    └──────────────────────┘
//! ```
//!
//! A failure in any stage ends that project's roadmap with a [`RoadmapError`]
//! but keeps the warnings gathered so far. Other projects are unaffected.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DataQualityWarning, Milestone, MilestoneDependency, MilestoneId, ProjectId};

pub mod cycles;
pub mod graph;
pub mod scheduler;

pub use cycles::{cycle_groups, detect_cycles};
pub use graph::{DependencyGraph, DependencyGraphBuilder};
pub use scheduler::{ScheduleResult, TopologicalScheduler};

/// Structural faults that stop a single project's roadmap.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoadmapError {
    #[error("Milestone {milestone_id} depends on itself")]
    SelfLoop { milestone_id: MilestoneId },

    #[error("Milestone {milestone_id} appears more than once")]
    DuplicateMilestone { milestone_id: MilestoneId },

    #[error("Milestone {milestone_id} has no record to schedule from")]
    UnknownMilestone { milestone_id: MilestoneId },

    #[error("Dependency cycle detected involving milestones: {members:?}")]
    CycleDetected {
        members: Vec<MilestoneId>,
        cycles: Vec<Vec<MilestoneId>>,
    },

    /// The scheduler was handed a graph that still contains a cycle.
    #[error("Scheduler could not release milestones {remaining:?}")]
    UnresolvedDependencies { remaining: Vec<MilestoneId> },
}

/// Roadmap of one project: the schedule or the reason there is none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRoadmap {
    pub project_id: ProjectId,
    /// Ordered schedule, empty when `error` is set
    pub schedule: Vec<ScheduleResult>,
    pub warnings: Vec<DataQualityWarning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RoadmapError>,
}

impl ProjectRoadmap {
    pub fn is_scheduled(&self) -> bool {
        self.error.is_none()
    }

    /// Schedule entries that are currently blocked.
    pub fn blocked(&self) -> impl Iterator<Item = &ScheduleResult> {
        self.schedule.iter().filter(|r| r.blocked)
    }
}

/// Runs build → detect → schedule for one project.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoadmapPipeline;

impl RoadmapPipeline {
    pub fn plan(
        &self,
        project_id: ProjectId,
        milestones: &[Milestone],
        edges: &[MilestoneDependency],
    ) -> ProjectRoadmap {
        let mut builder = DependencyGraphBuilder::new();
        let outcome = builder
            .build(milestones, edges)
            .and_then(|graph| {
                detect_cycles(&graph)?;
                TopologicalScheduler.schedule(&graph, milestones)
            });
        let warnings = builder.into_warnings();

        for warning in &warnings {
            warn!("Project {project_id}: {warning}");
        }

        match outcome {
            Ok(schedule) => {
                debug!(
                    "Project {project_id}: scheduled {} milestones",
                    schedule.len()
                );
                ProjectRoadmap {
                    project_id,
                    schedule,
                    warnings,
                    error: None,
                }
            }
            Err(err) => {
                warn!("Project {project_id}: roadmap not scheduled: {err}");
                ProjectRoadmap {
                    project_id,
                    schedule: Vec::new(),
                    warnings,
                    error: Some(err),
                }
            }
        }
    }
}
