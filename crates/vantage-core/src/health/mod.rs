//! Project health scoring and portfolio aggregation.
//!
//! [`HealthScorer`] turns one project and its milestones into a
//! [`HealthResult`]; [`PortfolioAggregator`] folds those results over the
//! active projects. Both are pure: the reference time is always passed in.
//!
//! # Scoring
//!
//! ```text
//! progress  = mean(percent_complete)            (0 with no milestones)
//! recency   = max(0, 1 - days / horizon_days)
//! score     = round(100 * (wp*progress/100 + wr*recency) / (wp + wr))
//! ```
//!
//! The score never decreases when progress rises or staleness falls. The
//! [`ActivityLabel`] is a separate staleness signal and ignores the score.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    config::HealthConfig,
    models::{ActivityLabel, Milestone, Project, ProjectId},
};

pub mod portfolio;

pub use portfolio::{PortfolioAggregator, PortfolioSummary};

/// A project goes stale for attention purposes after this many days.
pub const ATTENTION_STALE_DAYS: i64 = 7;

/// Scores below this value need attention regardless of recency.
pub const ATTENTION_SCORE_FLOOR: u8 = 40;

const SECONDS_PER_DAY: i64 = 86_400;

/// Derived health of one project at a reference time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResult {
    pub project_id: ProjectId,
    /// 0 through 100
    pub score: u8,
    pub label: ActivityLabel,
    pub needs_attention: bool,
    pub days_since_update: i64,
    /// Mean milestone completion, 0.0 through 100.0
    pub progress: f64,
}

/// Whole days elapsed between `updated_at` and `now`, floored.
///
/// Timestamps in the future count as zero days.
pub fn days_since_update(updated_at: Timestamp, now: Timestamp) -> i64 {
    let elapsed = now.duration_since(updated_at).as_secs();
    elapsed.div_euclid(SECONDS_PER_DAY).max(0)
}

/// Computes [`HealthResult`]s under a fixed weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthScorer {
    config: HealthConfig,
}

impl HealthScorer {
    pub fn new(config: HealthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Scores `project` from its milestones as of `now`.
    pub fn score<'a, I>(&self, project: &Project, milestones: I, now: Timestamp) -> HealthResult
    where
        I: IntoIterator<Item = &'a Milestone>,
    {
        let days = days_since_update(project.updated_at, now);
        let progress = mean_progress(milestones);
        let score = self.weighted_score(progress, self.recency_credit(days));

        HealthResult {
            project_id: project.id,
            score,
            label: ActivityLabel::from_days(days),
            needs_attention: days > ATTENTION_STALE_DAYS || score < ATTENTION_SCORE_FLOOR,
            days_since_update: days,
            progress,
        }
    }

    /// Linear decay from 1.0 at zero days to 0.0 at the horizon.
    fn recency_credit(&self, days: i64) -> f64 {
        let horizon = f64::from(self.config.horizon_days.max(1));
        (1.0 - days as f64 / horizon).clamp(0.0, 1.0)
    }

    fn weighted_score(&self, progress: f64, recency: f64) -> u8 {
        let HealthConfig {
            progress_weight,
            recency_weight,
            ..
        } = self.config;
        let total = progress_weight + recency_weight;
        if total <= 0.0 {
            return 0;
        }
        let blended = (progress_weight * progress / 100.0 + recency_weight * recency) / total;
        (blended * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

fn mean_progress<'a, I>(milestones: I) -> f64
where
    I: IntoIterator<Item = &'a Milestone>,
{
    let (sum, count) = milestones
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), m| {
            (sum + u64::from(m.percent_complete), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
