//! Cycle detection over a [`DependencyGraph`].
//!
//! A depth-first walk keeps every visited node on a stack until its strongly
//! connected component is complete (Tarjan). An edge back to a node that is
//! still on that stack closes a cycle, and every component with more than one
//! node is a set of milestones that wait on each other. All such components
//! are reported at once.

use super::{DependencyGraph, RoadmapError};
use crate::models::MilestoneId;

/// Per-node DFS bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
struct Visit {
    order: Option<usize>,
    low: usize,
    on_stack: bool,
}

/// Validates that a graph is acyclic.
///
/// # Errors
///
/// Returns [`RoadmapError::CycleDetected`] naming every milestone that takes
/// part in at least one cycle, together with each cycle group.
pub fn detect_cycles(graph: &DependencyGraph) -> Result<(), RoadmapError> {
    let cycles = cycle_groups(graph);
    if cycles.is_empty() {
        return Ok(());
    }

    let mut members: Vec<MilestoneId> = cycles.iter().flatten().copied().collect();
    members.sort_unstable();
    members.dedup();
    Err(RoadmapError::CycleDetected { members, cycles })
}

/// Strongly connected components that contain a cycle, each sorted by
/// milestone id, ordered by their smallest member.
pub fn cycle_groups(graph: &DependencyGraph) -> Vec<Vec<MilestoneId>> {
    let mut visits = vec![Visit::default(); graph.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut counter = 0;
    let mut groups = Vec::new();

    for root in 0..graph.len() {
        if visits[root].order.is_some() {
            continue;
        }

        // Explicit call stack of (node, next dependency to explore).
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
        enter(&mut visits, &mut stack, &mut counter, root);

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;
            let edges = graph.dependencies(node);

            if frame.1 < edges.len() {
                let next = edges[frame.1];
                frame.1 += 1;
                match visits[next].order {
                    None => {
                        enter(&mut visits, &mut stack, &mut counter, next);
                        frames.push((next, 0));
                    }
                    Some(order) if visits[next].on_stack => {
                        visits[node].low = visits[node].low.min(order);
                    }
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                visits[parent].low = visits[parent].low.min(visits[node].low);
            }

            if Some(visits[node].low) == visits[node].order {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    visits[member].on_stack = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                let looped = component.len() > 1 || graph.dependencies(node).contains(&node);
                if looped {
                    let mut ids: Vec<MilestoneId> =
                        component.into_iter().map(|n| graph.id(n)).collect();
                    ids.sort_unstable();
                    groups.push(ids);
                }
            }
        }
    }

    groups.sort();
    groups
}

fn enter(visits: &mut [Visit], stack: &mut Vec<usize>, counter: &mut usize, node: usize) {
    visits[node] = Visit {
        order: Some(*counter),
        low: *counter,
        on_stack: true,
    };
    *counter += 1;
    stack.push(node);
}
