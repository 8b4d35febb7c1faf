use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use tracing::{debug, trace, warn};

use super::types::{BuildOutcome, DependencyGraph, DependencyRecord, VisitState};
use crate::detector::CycleDetector;
use crate::error::{DepLensError, ResolveError};
use crate::progress::ProgressReporter;
use crate::repository::DependencyResolver;

/// Builder for constructing transitive dependency graphs
///
/// Traversal is an iterative depth-first search over an explicit stack of
/// frames, so graph depth is bounded by memory rather than by the call stack.
/// Every package moves through `Unvisited -> InProgress -> Done` exactly once;
/// an edge into an `InProgress` package closes a cycle.
#[derive(Default)]
pub struct DependencyGraphBuilder<'p> {
    progress: Option<&'p ProgressReporter>,
}

/// One package on the traversal stack and the index of its next unexplored
/// dependency
struct Frame {
    node: NodeIndex,
    record: DependencyRecord,
    cursor: usize,
}

struct Traversal<'r, R: ?Sized> {
    resolver: &'r R,
    graph: DependencyGraph,
    states: HashMap<NodeIndex, VisitState>,
    stack: Vec<Frame>,
    detector: CycleDetector,
    advisories: Vec<ResolveError>,
}

impl<'p> DependencyGraphBuilder<'p> {
    /// Create a new dependency graph builder
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Report each resolved package on the given progress reporter
    pub fn with_progress(mut self, progress: Option<&'p ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Build the full graph reachable from `root`
    ///
    /// A failed lookup for any package other than the root turns that package
    /// into a leaf and is reported in [`BuildOutcome::advisories`]. The root
    /// itself must be known to the resolver.
    pub fn build<R>(&self, root: &str, resolver: &R) -> Result<BuildOutcome, DepLensError>
    where
        R: DependencyResolver + ?Sized,
    {
        let root_record = match resolver.resolve(root) {
            Ok(dependencies) => DependencyRecord::new(root, dependencies),
            Err(ResolveError::NotFound { .. }) => {
                return Err(DepLensError::UnknownRoot {
                    package: root.to_string(),
                });
            }
            Err(err) => {
                warn!(error = %err, "treating root package as a leaf");
                let mut traversal = Traversal::new(resolver, root);
                traversal.advisories.push(err);
                return Ok(traversal.finish());
            }
        };

        let mut traversal = Traversal::new(resolver, root);
        let root_idx = traversal.graph.root_index();
        traversal.enter(root_idx, root_record);
        traversal.run(self.progress);

        Ok(traversal.finish())
    }
}

impl<'r, R> Traversal<'r, R>
where
    R: DependencyResolver + ?Sized,
{
    fn new(resolver: &'r R, root: &str) -> Self {
        Self {
            resolver,
            graph: DependencyGraph::new(root),
            states: HashMap::new(),
            stack: Vec::new(),
            detector: CycleDetector::new(),
            advisories: Vec::new(),
        }
    }

    fn state(&self, node: NodeIndex) -> VisitState {
        self.states.get(&node).copied().unwrap_or_default()
    }

    fn enter(&mut self, node: NodeIndex, record: DependencyRecord) {
        debug!(
            package = %record.package,
            depth = self.stack.len(),
            dependencies = record.dependencies.len(),
            "expanding package"
        );
        self.states.insert(node, VisitState::InProgress);
        self.stack.push(Frame {
            node,
            record,
            cursor: 0,
        });
    }

    fn resolve(&mut self, package: &str) -> DependencyRecord {
        match self.resolver.resolve(package) {
            Ok(dependencies) => DependencyRecord::new(package, dependencies),
            Err(err) => {
                warn!(error = %err, "dependency lookup failed, treating package as a leaf");
                self.advisories.push(err);
                DependencyRecord::leaf(package)
            }
        }
    }

    fn advance_top(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.cursor += 1;
        }
    }

    fn run(&mut self, progress: Option<&ProgressReporter>) {
        while let Some(frame) = self.stack.last() {
            let Some(dependency) = frame.record.dependencies.get(frame.cursor).cloned() else {
                let node = frame.node;
                trace!(package = self.graph.name(node), "package done");
                self.states.insert(node, VisitState::Done);
                self.stack.pop();
                continue;
            };

            let from = frame.node;
            let to = self.graph.add_node(&dependency);
            self.graph.add_edge_by_index(from, to);

            match self.state(to) {
                VisitState::Unvisited => {
                    if let Some(p) = progress {
                        p.resolving_package(&dependency, self.graph.node_count());
                    }
                    // The parent's cursor stays put; once the child is done the
                    // same edge is seen again and skipped as a Done target.
                    let record = self.resolve(&dependency);
                    self.enter(to, record);
                }
                VisitState::InProgress => {
                    let active_path: Vec<&str> = self
                        .stack
                        .iter()
                        .map(|f| f.record.package.as_str())
                        .collect();
                    self.detector.record_back_edge(&active_path, &dependency);
                    self.advance_top();
                }
                VisitState::Done => self.advance_top(),
            }
        }
    }

    fn finish(self) -> BuildOutcome {
        BuildOutcome::new(self.graph, self.detector.into_cycles(), self.advisories)
    }
}

/// Build the dependency graph of `root` without progress reporting
pub fn build_graph<R>(root: &str, resolver: &R) -> Result<BuildOutcome, DepLensError>
where
    R: DependencyResolver + ?Sized,
{
    DependencyGraphBuilder::new().build(root, resolver)
}
