//! Deterministic topological scheduling of milestones.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use jiff::civil::Date;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{DependencyGraph, RoadmapError};
use crate::models::{Milestone, MilestoneId};

/// Position and feasibility of one milestone within a roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleResult {
    pub milestone_id: MilestoneId,
    /// 0-indexed position in the computed order
    pub order_index: usize,
    /// True when a direct dependency is not completed
    pub blocked: bool,
    /// Incomplete direct dependencies, ascending
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_by: Vec<MilestoneId>,
    /// Earliest date the milestone can land given its dependency chain
    pub earliest_feasible: Option<Date>,
    /// True when the dependency chain pushes past the milestone's own target
    pub slipped: bool,
}

/// Orders milestones with Kahn's algorithm, releasing the ready node with the
/// lowest `(sort_order, id)` first.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalScheduler;

impl TopologicalScheduler {
    /// Schedules every node of an acyclic `graph`, reading status and dates
    /// from `milestones`.
    ///
    /// The result lists dependencies before their dependents. Identical input
    /// always yields an identical order.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::UnknownMilestone`] if a graph node has no
    /// record in `milestones`, and [`RoadmapError::UnresolvedDependencies`]
    /// if the graph still contains a cycle. The latter is a caller bug:
    /// [`super::detect_cycles`] must run first.
    pub fn schedule(
        &self,
        graph: &DependencyGraph,
        milestones: &[Milestone],
    ) -> Result<Vec<ScheduleResult>, RoadmapError> {
        let by_id: HashMap<MilestoneId, &Milestone> =
            milestones.iter().map(|m| (m.id, m)).collect();
        let facts = (0..graph.len())
            .map(|node| {
                let id = graph.id(node);
                by_id
                    .get(&id)
                    .copied()
                    .ok_or(RoadmapError::UnknownMilestone { milestone_id: id })
            })
            .collect::<Result<Vec<&Milestone>, _>>()?;

        let mut pending: Vec<usize> = (0..graph.len())
            .map(|node| graph.dependencies(node).len())
            .collect();
        let mut ready: BinaryHeap<Reverse<(i64, MilestoneId, usize)>> = pending
            .iter()
            .enumerate()
            .filter(|(_, &count)| count == 0)
            .map(|(node, _)| Reverse((facts[node].sort_order, facts[node].id, node)))
            .collect();

        let mut feasible: Vec<Option<Date>> = vec![None; graph.len()];
        let mut scheduled = Vec::with_capacity(graph.len());

        while let Some(Reverse((_, _, node))) = ready.pop() {
            let fact = facts[node];
            let dependencies = graph.dependencies(node);

            let earliest = dependencies
                .iter()
                .map(|&dep| feasible[dep])
                .fold(fact.target_date, Option::max);
            feasible[node] = earliest;

            let mut blocked_by: Vec<MilestoneId> = dependencies
                .iter()
                .filter(|&&dep| !facts[dep].is_completed())
                .map(|&dep| facts[dep].id)
                .collect();
            blocked_by.sort_unstable();

            let slipped = matches!(
                (earliest, fact.target_date),
                (Some(earliest), Some(target)) if earliest > target
            );

            scheduled.push(ScheduleResult {
                milestone_id: fact.id,
                order_index: scheduled.len(),
                blocked: !blocked_by.is_empty(),
                blocked_by,
                earliest_feasible: earliest,
                slipped,
            });

            for &dependent in graph.dependents(node) {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    let f = facts[dependent];
                    ready.push(Reverse((f.sort_order, f.id, dependent)));
                }
            }
        }

        if scheduled.len() != graph.len() {
            let mut remaining: Vec<MilestoneId> = pending
                .iter()
                .enumerate()
                .filter(|(_, &count)| count > 0)
                .map(|(node, _)| graph.id(node))
                .collect();
            remaining.sort_unstable();
            return Err(RoadmapError::UnresolvedDependencies { remaining });
        }

        debug!("Scheduled {} milestones", scheduled.len());
        Ok(scheduled)
    }
}
