//! Engine runs over the current store contents.

use std::{collections::HashSet, sync::Arc};

use jiff::Timestamp;

use super::Tracker;
use crate::{
    engine::PortfolioReport,
    error::{Result, VantageError},
    models::{Milestone, MilestoneId, Project, Snapshot},
    params::RoadmapQuery,
    roadmap::ProjectRoadmap,
};

/// A project, its milestones, and the roadmap computed from them.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub project: Project,
    /// In `(sort_order, id)` order
    pub milestones: Vec<Milestone>,
    pub roadmap: ProjectRoadmap,
}

impl Tracker {
    /// Evaluates the whole portfolio as of `now`.
    pub async fn evaluate(&self, now: Timestamp) -> Result<PortfolioReport> {
        let (_, report) = self.evaluate_snapshot(now).await?;
        Ok(report)
    }

    /// Same as [`Tracker::evaluate`], also handing back the snapshot the
    /// report was computed from.
    pub async fn evaluate_snapshot(
        &self,
        now: Timestamp,
    ) -> Result<(Arc<Snapshot>, PortfolioReport)> {
        let snapshot = Arc::new(self.snapshot().await?);
        let report = self
            .engine
            .evaluate_concurrent(Arc::clone(&snapshot), now)
            .await?;
        Ok((snapshot, report))
    }

    /// Roadmaps for one project or for all of them, ordered by project id.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::ProjectNotFound` if the query names an unknown
    /// project.
    pub async fn roadmaps(&self, query: &RoadmapQuery) -> Result<Vec<ProjectPlan>> {
        let mut snapshot = self.snapshot().await?;
        if let Some(id) = query.project_id {
            if !snapshot.projects.iter().any(|p| p.id == id) {
                return Err(VantageError::ProjectNotFound { id });
            }
            snapshot.projects.retain(|p| p.id == id);
            snapshot.milestones.retain(|m| m.project_id == id);
            let owned: HashSet<MilestoneId> = snapshot.milestones.iter().map(|m| m.id).collect();
            snapshot
                .dependencies
                .retain(|e| owned.contains(&e.milestone_id));
        }

        let (roadmaps, _) = self.engine.plan_roadmaps(&snapshot);
        let plans = roadmaps
            .into_iter()
            .filter_map(|roadmap| {
                let project = snapshot
                    .projects
                    .iter()
                    .find(|p| p.id == roadmap.project_id)?
                    .clone();
                let milestones = snapshot.milestones_of(project.id).cloned().collect();
                Some(ProjectPlan {
                    project,
                    milestones,
                    roadmap,
                })
            })
            .collect();
        Ok(plans)
    }
}
