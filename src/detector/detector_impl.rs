use std::fmt;

use serde::Serialize;
use tracing::info;

/// A closed walk `n0 -> n1 -> ... -> n0` found through a back-edge
///
/// The first and last packages are identical and every interior package is
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    path: Vec<String>,
}

impl Cycle {
    /// Create a cycle from a closed path, returning `None` when the path is
    /// not closed or repeats an interior package
    pub fn from_path(path: Vec<String>) -> Option<Self> {
        if path.len() < 2 || path.first() != path.last() {
            return None;
        }

        let interior = &path[..path.len() - 1];
        let all_distinct = interior
            .iter()
            .enumerate()
            .all(|(i, pkg)| !interior[i + 1..].contains(pkg));

        all_distinct.then_some(Self { path })
    }

    /// The closed path, with the first package repeated at the end
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Packages taking part in the cycle, each listed once
    pub fn participants(&self) -> &[String] {
        &self.path[..self.path.len() - 1]
    }

    /// Consecutive `(from, to)` pairs of the closed walk
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Number of edges in the cycle
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, package: &str) -> bool {
        self.participants().iter().any(|p| p == package)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges().any(|(f, t)| f == from && t == to)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" -> "))
    }
}

/// Collects cycles from back-edges found during graph traversal
#[derive(Debug, Default)]
pub struct CycleDetector {
    cycles: Vec<Cycle>,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Record the cycle closed by a back-edge into `target`
    ///
    /// `active_path` is the ancestor chain in root-to-top order. The cycle is
    /// the part of the chain starting at `target`, with `target` appended to
    /// close it. Returns `None` if `target` is not on the active path, which
    /// means the edge is not a back-edge.
    pub fn record_back_edge<S: AsRef<str>>(
        &mut self,
        active_path: &[S],
        target: &str,
    ) -> Option<&Cycle> {
        let start = active_path.iter().position(|p| p.as_ref() == target)?;

        let mut path: Vec<String> = active_path[start..]
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        path.push(target.to_string());

        let cycle = Cycle::from_path(path)?;
        info!(cycle = %cycle, "dependency cycle recorded");

        self.cycles.push(cycle);
        self.cycles.last()
    }

    /// Get all detected cycles in discovery order
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cycle_from_closed_path() {
        let cycle = Cycle::from_path(path(&["A", "B", "C", "A"])).unwrap();

        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle.participants(), &path(&["A", "B", "C"])[..]);
        assert_eq!(cycle.to_string(), "A -> B -> C -> A");
        assert!(cycle.contains("B"));
        assert!(!cycle.contains("D"));
    }

    #[test]
    fn test_cycle_rejects_open_or_repeating_paths() {
        assert!(Cycle::from_path(path(&["A", "B", "C"])).is_none());
        assert!(Cycle::from_path(path(&["A"])).is_none());
        assert!(Cycle::from_path(path(&["A", "B", "B", "A"])).is_none());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let cycle = Cycle::from_path(path(&["A", "A"])).unwrap();

        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle.edges().collect::<Vec<_>>(), vec![("A", "A")]);
    }

    #[test]
    fn test_cycle_edges_are_consecutive_pairs() {
        let cycle = Cycle::from_path(path(&["A", "B", "C", "A"])).unwrap();

        assert_eq!(
            cycle.edges().collect::<Vec<_>>(),
            vec![("A", "B"), ("B", "C"), ("C", "A")]
        );
        assert!(cycle.contains_edge("C", "A"));
        assert!(!cycle.contains_edge("A", "C"));
    }

    #[test]
    fn test_record_back_edge_slices_active_path() {
        let mut detector = CycleDetector::new();

        let cycle = detector
            .record_back_edge(&["ROOT", "A", "B", "C"], "B")
            .unwrap()
            .clone();

        assert_eq!(cycle.path(), &path(&["B", "C", "B"])[..]);
        assert!(detector.has_cycles());
    }

    #[test]
    fn test_record_back_edge_ignores_targets_off_the_path() {
        let mut detector = CycleDetector::new();

        assert!(detector.record_back_edge(&["A", "B"], "Z").is_none());
        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_overlapping_back_edges_are_separate_occurrences() {
        let mut detector = CycleDetector::new();

        detector.record_back_edge(&["A", "B", "C"], "A");
        detector.record_back_edge(&["A", "B", "D"], "A");

        assert_eq!(detector.cycle_count(), 2);
        assert_eq!(detector.cycles()[0].to_string(), "A -> B -> C -> A");
        assert_eq!(detector.cycles()[1].to_string(), "A -> B -> D -> A");
    }

    #[test]
    fn test_cycle_serializes_as_path() {
        let cycle = Cycle::from_path(path(&["A", "B", "A"])).unwrap();

        let json = serde_json::to_string(&cycle).unwrap();
        assert_eq!(json, r#"["A","B","A"]"#);
    }
}
