use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use super::types::DependencyGraph;
use crate::error::DepLensError;

/// Finds every package with a forward path to a target
///
/// The walk follows incoming edges breadth-first and expands each package at
/// most once. The target only shows up in its own result when it lies on a
/// cycle, since it then depends on itself transitively.
pub struct ReverseDependencyResolver<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> ReverseDependencyResolver<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Reverse dependents of `target` as an unordered set
    pub fn dependents(&self, target: &str) -> Result<HashSet<&'g str>, DepLensError> {
        let reached = self.walk(target)?;
        Ok(reached.into_iter().map(|idx| self.graph.name(idx)).collect())
    }

    /// Reverse dependents of `target` in node discovery order
    pub fn dependents_ordered(&self, target: &str) -> Result<Vec<&'g str>, DepLensError> {
        let mut reached: Vec<NodeIndex> = self.walk(target)?.into_iter().collect();
        reached.sort();
        Ok(reached.into_iter().map(|idx| self.graph.name(idx)).collect())
    }

    fn walk(&self, target: &str) -> Result<HashSet<NodeIndex>, DepLensError> {
        let start = self.graph.index_or_unknown(target)?;

        // The target is seeded as expanded but only counts as reached when a
        // predecessor chain leads back to it.
        let mut expanded = HashSet::from([start]);
        let mut reached = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for pred in self.graph.predecessors(current) {
                reached.insert(pred);
                if expanded.insert(pred) {
                    queue.push_back(pred);
                }
            }
        }

        Ok(reached)
    }
}

/// Every package that transitively depends on `target`
pub fn reverse_dependents<'g>(
    graph: &'g DependencyGraph,
    target: &str,
) -> Result<HashSet<&'g str>, DepLensError> {
    ReverseDependencyResolver::new(graph).dependents(target)
}
