//! Arena-backed milestone dependency graph.
//!
//! Nodes live in a `Vec` and edges are index pairs, so the graph owns no
//! references into itself even when the data it describes is cyclic. An edge
//! `from -> to` reads "`from` depends on `to`": `to` must complete first.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::RoadmapError;
use crate::models::{DataQualityWarning, Milestone, MilestoneDependency, MilestoneId};

/// Directed dependency graph over one project's milestones.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    ids: Vec<MilestoneId>,
    index: HashMap<MilestoneId, usize>,
    /// `node -> [dependency, ...]` (upstream adjacency)
    dependencies: Vec<Vec<usize>>,
    /// `node -> [dependent, ...]` (downstream adjacency)
    dependents: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DependencyGraph {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Milestone identifier stored at `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid index for this graph.
    pub fn id(&self, node: usize) -> MilestoneId {
        self.ids[node]
    }

    pub fn index_of(&self, id: MilestoneId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Nodes `node` depends on, in edge insertion order.
    pub fn dependencies(&self, node: usize) -> &[usize] {
        &self.dependencies[node]
    }

    /// Nodes that depend on `node`, in edge insertion order.
    pub fn dependents(&self, node: usize) -> &[usize] {
        &self.dependents[node]
    }

    /// Whether the edge `from depends on to` exists.
    pub fn has_edge(&self, from: MilestoneId, to: MilestoneId) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.dependencies[f].contains(&t),
            _ => false,
        }
    }

    fn add_node(&mut self, id: MilestoneId) -> Option<usize> {
        if self.index.contains_key(&id) {
            return None;
        }
        let node = self.ids.len();
        self.ids.push(id);
        self.index.insert(id, node);
        self.dependencies.push(Vec::new());
        self.dependents.push(Vec::new());
        Some(node)
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        self.dependencies[from].push(to);
        self.dependents[to].push(from);
        self.edge_count += 1;
    }
}

/// Converts milestone and dependency records into a [`DependencyGraph`],
/// collecting data-quality warnings as it goes.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder {
    warnings: Vec<DataQualityWarning>,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from one milestone set and its candidate edges.
    ///
    /// Edges naming a milestone outside `milestones` are dropped and recorded
    /// as [`DataQualityWarning::DanglingReference`]; repeated edges collapse to
    /// one and are recorded as [`DataQualityWarning::DuplicateDependency`].
    /// Every edge is inspected before an error is returned, so warnings are
    /// complete even when the build fails.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::DuplicateMilestone`] if an identifier repeats
    /// and [`RoadmapError::SelfLoop`] if any edge points at its own source.
    pub fn build(
        &mut self,
        milestones: &[Milestone],
        edges: &[MilestoneDependency],
    ) -> Result<DependencyGraph, RoadmapError> {
        let mut graph = DependencyGraph::default();
        for milestone in milestones {
            if graph.add_node(milestone.id).is_none() {
                return Err(RoadmapError::DuplicateMilestone {
                    milestone_id: milestone.id,
                });
            }
        }

        let mut self_loop = None;
        let mut seen = HashSet::new();

        for edge in edges {
            if edge.is_self_loop() {
                self_loop.get_or_insert(edge.milestone_id);
                continue;
            }

            let (from, to) = match (
                graph.index_of(edge.milestone_id),
                graph.index_of(edge.depends_on),
            ) {
                (Some(from), Some(to)) => (from, to),
                (from, _) => {
                    let missing = if from.is_none() {
                        edge.milestone_id
                    } else {
                        edge.depends_on
                    };
                    self.warnings.push(DataQualityWarning::DanglingReference {
                        milestone_id: edge.milestone_id,
                        depends_on: edge.depends_on,
                        missing,
                    });
                    continue;
                }
            };

            if !seen.insert((from, to)) {
                self.warnings.push(DataQualityWarning::DuplicateDependency {
                    milestone_id: edge.milestone_id,
                    depends_on: edge.depends_on,
                });
                continue;
            }
            graph.add_edge(from, to);
        }

        if let Some(milestone_id) = self_loop {
            return Err(RoadmapError::SelfLoop { milestone_id });
        }

        debug!(
            "Built dependency graph with {} nodes and {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<DataQualityWarning> {
        self.warnings
    }
}
