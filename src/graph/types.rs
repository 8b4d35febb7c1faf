//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::detector::Cycle;
use crate::error::{DepLensError, ResolveError};

/// Identifier of a package; equality is exact and case-sensitive
pub type PackageId = String;

/// Traversal color of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Never pushed onto the traversal stack
    #[default]
    Unvisited,
    /// On the active path, i.e. an ancestor of the current frame
    InProgress,
    /// Fully expanded
    Done,
}

/// A package and its resolved direct dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub package: PackageId,
    pub dependencies: Vec<PackageId>,
}

impl DependencyRecord {
    pub fn new(package: impl Into<PackageId>, dependencies: Vec<PackageId>) -> Self {
        Self {
            package: package.into(),
            dependencies,
        }
    }

    pub fn leaf(package: impl Into<PackageId>) -> Self {
        Self::new(package, Vec::new())
    }
}

/// Directed package graph rooted at a single package
///
/// Nodes keep their discovery order and edges keep their recording order.
/// An edge is recorded at most once no matter how many traversal paths reach
/// it.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: NodeIndex,
    graph: DiGraph<PackageId, ()>,
    indices: HashMap<PackageId, NodeIndex>,
}

impl DependencyGraph {
    /// Create a graph containing only `root`
    pub fn new(root: &str) -> Self {
        let mut graph = DiGraph::new();
        let root_idx = graph.add_node(root.to_string());

        let mut indices = HashMap::new();
        indices.insert(root.to_string(), root_idx);

        Self {
            root: root_idx,
            graph,
            indices,
        }
    }

    /// Add a package if it is not present yet and return its index
    pub fn add_node(&mut self, package: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(package) {
            return idx;
        }

        let idx = self.graph.add_node(package.to_string());
        self.indices.insert(package.to_string(), idx);
        idx
    }

    /// Record `from -> to`, adding missing endpoints
    ///
    /// Returns `true` when the edge was not recorded before.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        self.add_edge_by_index(from_idx, to_idx)
    }

    pub(crate) fn add_edge_by_index(&mut self, from: NodeIndex, to: NodeIndex) -> bool {
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }

        self.graph.add_edge(from, to, ());
        true
    }

    pub fn root(&self) -> &str {
        &self.graph[self.root]
    }

    pub(crate) fn root_index(&self) -> NodeIndex {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.indices.contains_key(package)
    }

    pub fn index_of(&self, package: &str) -> Option<NodeIndex> {
        self.indices.get(package).copied()
    }

    pub(crate) fn index_or_unknown(&self, package: &str) -> Result<NodeIndex, DepLensError> {
        self.index_of(package)
            .ok_or_else(|| DepLensError::UnknownNode {
                package: package.to_string(),
            })
    }

    pub fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Packages in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Edges in recording order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
            )
        })
    }

    /// Direct successors of `idx` in edge recording order
    ///
    /// petgraph walks adjacency lists newest-first, so the edges are sorted
    /// back into insertion order here.
    pub(crate) fn ordered_successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    pub(crate) fn predecessors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Incoming)
    }

    /// Direct dependencies of a package in recording order
    pub fn dependencies_of(&self, package: &str) -> Result<Vec<&str>, DepLensError> {
        let idx = self.index_or_unknown(package)?;
        Ok(self
            .ordered_successors(idx)
            .into_iter()
            .map(|succ| self.name(succ))
            .collect())
    }

    /// Every package reachable from `package`, in breadth-first discovery
    /// order; the package itself is never included
    pub fn transitive_dependencies(&self, package: &str) -> Result<Vec<&str>, DepLensError> {
        let start = self.index_or_unknown(package)?;

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut found = Vec::new();

        while let Some(current) = queue.pop_front() {
            for succ in self.ordered_successors(current) {
                if visited.insert(succ) {
                    found.push(self.name(succ));
                    queue.push_back(succ);
                }
            }
        }

        Ok(found)
    }

    /// Access to the underlying petgraph graph
    pub fn inner(&self) -> &DiGraph<PackageId, ()> {
        &self.graph
    }
}

/// Everything produced by one graph build
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    graph: DependencyGraph,
    cycles: Vec<Cycle>,
    advisories: Vec<ResolveError>,
}

impl BuildOutcome {
    pub fn new(graph: DependencyGraph, cycles: Vec<Cycle>, advisories: Vec<ResolveError>) -> Self {
        Self {
            graph,
            cycles,
            advisories,
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Cycles in discovery order, one per back-edge
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Dependency lookups that failed and were treated as leaves
    pub fn advisories(&self) -> &[ResolveError] {
        &self.advisories
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_parts(self) -> (DependencyGraph, Vec<Cycle>, Vec<ResolveError>) {
        (self.graph, self.cycles, self.advisories)
    }
}
