//! Portfolio evaluation: the health pipeline and the roadmap pipeline over one
//! snapshot.
//!
//! The two pipelines share nothing but the input, so
//! [`Engine::evaluate_concurrent`] runs them on separate blocking tasks. Both
//! entry points produce the same report for the same snapshot and `now`.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use jiff::Timestamp;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::{
    config::EngineConfig,
    error::{Result, VantageError},
    health::{HealthResult, HealthScorer, PortfolioAggregator, PortfolioSummary},
    models::{DataQualityWarning, Milestone, ProjectId, Snapshot},
    roadmap::{ProjectRoadmap, RoadmapPipeline},
};

/// Everything the engine derives from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioReport {
    /// Reference time the report was computed against
    pub generated_at: Timestamp,
    pub health: BTreeMap<ProjectId, HealthResult>,
    pub portfolio: PortfolioSummary,
    /// One roadmap per project, ordered by project id
    pub roadmaps: Vec<ProjectRoadmap>,
    /// Findings that belong to no single project
    pub warnings: Vec<DataQualityWarning>,
}

impl PortfolioReport {
    pub fn roadmap(&self, project_id: ProjectId) -> Option<&ProjectRoadmap> {
        self.roadmaps.iter().find(|r| r.project_id == project_id)
    }
}

/// Stateless evaluator configured once and reused across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine after checking its configuration.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::Configuration` for out-of-range weights.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores every project in the snapshot.
    pub fn score_health(
        &self,
        snapshot: &Snapshot,
        now: Timestamp,
    ) -> BTreeMap<ProjectId, HealthResult> {
        let scorer = HealthScorer::new(self.config.health);
        let mut by_project: HashMap<ProjectId, Vec<&Milestone>> = HashMap::new();
        for milestone in &snapshot.milestones {
            by_project
                .entry(milestone.project_id)
                .or_default()
                .push(milestone);
        }

        snapshot
            .projects
            .iter()
            .map(|project| {
                let milestones = by_project.get(&project.id).map(Vec::as_slice).unwrap_or(&[]);
                let result = scorer.score(project, milestones.iter().copied(), now);
                (project.id, result)
            })
            .collect()
    }

    /// Builds a roadmap per project plus the portfolio-level warnings.
    pub fn plan_roadmaps(
        &self,
        snapshot: &Snapshot,
    ) -> (Vec<ProjectRoadmap>, Vec<DataQualityWarning>) {
        let partition = snapshot.partition();
        for warning in &partition.warnings {
            warn!("{warning}");
        }

        let mut roadmaps: Vec<ProjectRoadmap> = partition
            .groups
            .iter()
            .map(|group| {
                RoadmapPipeline.plan(group.project.id, &group.milestones, &group.dependencies)
            })
            .collect();
        roadmaps.sort_by_key(|r| r.project_id);

        let mut warnings = partition.warnings;
        warnings.sort();
        (roadmaps, warnings)
    }

    /// Validates the snapshot and runs both pipelines sequentially.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::InvalidInput` if the snapshot fails
    /// [`Snapshot::validate`]. Per-project roadmap faults are reported inside
    /// the report, never as an error.
    pub fn evaluate(&self, snapshot: &Snapshot, now: Timestamp) -> Result<PortfolioReport> {
        snapshot.validate()?;
        let health = self.score_health(snapshot, now);
        let (roadmaps, warnings) = self.plan_roadmaps(snapshot);
        Ok(self.assemble(snapshot, now, health, roadmaps, warnings))
    }

    /// Same as [`Engine::evaluate`], with the two pipelines on separate
    /// blocking tasks.
    pub async fn evaluate_concurrent(
        &self,
        snapshot: Arc<Snapshot>,
        now: Timestamp,
    ) -> Result<PortfolioReport> {
        snapshot.validate()?;
        let engine = *self;

        let health_input = Arc::clone(&snapshot);
        let health = task::spawn_blocking(move || engine.score_health(&health_input, now));
        let roadmap_input = Arc::clone(&snapshot);
        let roadmaps = task::spawn_blocking(move || engine.plan_roadmaps(&roadmap_input));

        let (health, roadmaps) = tokio::join!(health, roadmaps);
        let health = health.map_err(VantageError::join)?;
        let (roadmaps, warnings) = roadmaps.map_err(VantageError::join)?;

        Ok(self.assemble(&snapshot, now, health, roadmaps, warnings))
    }

    fn assemble(
        &self,
        snapshot: &Snapshot,
        now: Timestamp,
        health: BTreeMap<ProjectId, HealthResult>,
        roadmaps: Vec<ProjectRoadmap>,
        warnings: Vec<DataQualityWarning>,
    ) -> PortfolioReport {
        let portfolio = PortfolioAggregator.aggregate(&snapshot.projects, &health);
        debug!(
            "Evaluated {} projects: average health {:.1}, {} need attention",
            health.len(),
            portfolio.average_health,
            portfolio.attention.len()
        );
        PortfolioReport {
            generated_at: now,
            health,
            portfolio,
            roadmaps,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::HealthConfig,
        models::{MilestoneDependency, MilestoneStatus, Priority, Project, ProjectStatus},
    };

    const NOW: i64 = 1_709_294_400;

    fn snapshot() -> Snapshot {
        let project = |id: u64, name: &str, status: ProjectStatus| Project {
            id,
            name: name.to_string(),
            status,
            priority: Priority::Medium,
            updated_at: Timestamp::from_second(NOW - 86_400 * id as i64).unwrap(),
        };
        let milestone = |id: u64, project_id: u64, status: MilestoneStatus| Milestone {
            id,
            project_id,
            title: format!("M{id}"),
            status,
            percent_complete: if status == MilestoneStatus::Completed { 100 } else { 20 },
            target_date: None,
            sort_order: 0,
        };
        Snapshot {
            projects: vec![
                project(1, "One", ProjectStatus::Active),
                project(2, "Two", ProjectStatus::Paused),
            ],
            milestones: vec![
                milestone(10, 1, MilestoneStatus::Completed),
                milestone(11, 1, MilestoneStatus::NotStarted),
                milestone(20, 2, MilestoneStatus::NotStarted),
                milestone(99, 7, MilestoneStatus::NotStarted),
            ],
            dependencies: vec![
                MilestoneDependency::new(11, 10),
                MilestoneDependency::new(500, 501),
            ],
        }
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = EngineConfig {
            health: HealthConfig {
                horizon_days: 0,
                ..HealthConfig::default()
            },
        };
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn test_evaluate_covers_every_project() {
        let engine = Engine::default();
        let now = Timestamp::from_second(NOW).unwrap();
        let report = engine.evaluate(&snapshot(), now).unwrap();

        assert_eq!(report.health.len(), 2);
        assert_eq!(report.roadmaps.len(), 2);
        assert_eq!(report.portfolio.active_projects, 1);
        assert_eq!(report.health[&1].progress, 60.0);
        assert_eq!(report.roadmap(1).unwrap().schedule.len(), 2);
        assert_eq!(
            report.warnings,
            vec![
                DataQualityWarning::OrphanMilestone {
                    milestone_id: 99,
                    project_id: 7
                },
                DataQualityWarning::OrphanDependency {
                    milestone_id: 500,
                    depends_on: 501
                },
            ]
        );
    }

    #[test]
    fn test_evaluate_rejects_invalid_snapshot() {
        let mut snapshot = snapshot();
        snapshot.milestones[0].percent_complete = 101;
        let now = Timestamp::from_second(NOW).unwrap();
        let err = Engine::default().evaluate(&snapshot, now).unwrap_err();
        assert!(matches!(err, VantageError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let engine = Engine::default();
        let now = Timestamp::from_second(NOW).unwrap();
        let snapshot = Arc::new(snapshot());

        let sequential = engine.evaluate(&snapshot, now).unwrap();
        let concurrent = engine
            .evaluate_concurrent(Arc::clone(&snapshot), now)
            .await
            .unwrap();
        assert_eq!(sequential, concurrent);
    }
}
