//! Portfolio-level roll-up of per-project health.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HealthResult;
use crate::models::{ActivityLabel, Project, ProjectId};

/// Number of active projects carrying each staleness label.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelCounts {
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
    pub frozen: usize,
}

impl LabelCounts {
    fn record(&mut self, label: ActivityLabel) {
        match label {
            ActivityLabel::Hot => self.hot += 1,
            ActivityLabel::Warm => self.warm += 1,
            ActivityLabel::Cold => self.cold += 1,
            ActivityLabel::Frozen => self.frozen += 1,
        }
    }

    pub fn get(&self, label: ActivityLabel) -> usize {
        match label {
            ActivityLabel::Hot => self.hot,
            ActivityLabel::Warm => self.warm,
            ActivityLabel::Cold => self.cold,
            ActivityLabel::Frozen => self.frozen,
        }
    }
}

/// Aggregate health over the active subset of a portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    /// Arithmetic mean of active project scores, 0.0 with no active projects
    pub average_health: f64,
    /// Names of active projects needing attention, in input order
    pub attention: Vec<String>,
    pub active_projects: usize,
    pub labels: LabelCounts,
}

/// Folds [`HealthResult`]s into a [`PortfolioSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioAggregator;

impl PortfolioAggregator {
    /// Aggregates scores of active projects.
    ///
    /// Projects without an entry in `scores` are skipped.
    pub fn aggregate(
        &self,
        projects: &[Project],
        scores: &BTreeMap<ProjectId, HealthResult>,
    ) -> PortfolioSummary {
        let mut summary = PortfolioSummary::default();
        let mut total: u64 = 0;

        for project in projects.iter().filter(|p| p.is_active()) {
            let Some(result) = scores.get(&project.id) else {
                continue;
            };
            summary.active_projects += 1;
            total += u64::from(result.score);
            summary.labels.record(result.label);
            if result.needs_attention {
                summary.attention.push(project.name.clone());
            }
        }

        if summary.active_projects > 0 {
            summary.average_health = total as f64 / summary.active_projects as f64;
        }
        summary
    }
}
