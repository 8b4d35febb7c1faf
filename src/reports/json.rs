//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::DepLensError;
use crate::graph::BuildOutcome;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcome: &BuildOutcome) -> Result<String, DepLensError> {
        let graph = outcome.graph();

        let edges: Vec<_> = graph
            .edges()
            .map(|(from, to)| json!({ "from": from, "to": to }))
            .collect();

        let advisories: Vec<_> = outcome
            .advisories()
            .iter()
            .map(|advisory| {
                json!({
                    "package": advisory.package(),
                    "message": advisory.to_string(),
                })
            })
            .collect();

        let report = json!({
            "root": graph.root(),
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "nodes": graph.nodes().collect::<Vec<_>>(),
            "edges": edges,
            "has_cycles": outcome.has_cycles(),
            "cycle_count": outcome.cycle_count(),
            "cycles": outcome.cycles(),
            "advisories": advisories,
        });

        serde_json::to_string_pretty(&report).map_err(DepLensError::Json)
    }

    fn generate_reverse_report(
        &self,
        target: &str,
        dependents: &[&str],
    ) -> Result<String, DepLensError> {
        let report = json!({
            "target": target,
            "count": dependents.len(),
            "dependents": dependents,
        });

        serde_json::to_string_pretty(&report).map_err(DepLensError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::graph::build_graph;
    use crate::repository::FixtureRepository;

    fn report_json(listing: &str, root: &str) -> Value {
        let repo = FixtureRepository::parse(listing);
        let outcome = build_graph(root, &repo).unwrap();
        let report = JsonReportGenerator::new().generate_report(&outcome).unwrap();
        serde_json::from_str(&report).unwrap()
    }

    #[test]
    fn test_json_report_no_cycles() {
        let json = report_json("A: B C\nB: D\nC: D\nD:\n", "A");

        assert_eq!(json["root"], "A");
        assert_eq!(json["node_count"], 4);
        assert_eq!(json["edge_count"], 4);
        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycles"].as_array().unwrap().len(), 0);
        assert_eq!(json["nodes"], json!(["A", "B", "D", "C"]));
    }

    #[test]
    fn test_json_report_with_cycles() {
        let json = report_json("D: A\nA: B\nB: C\nC: A\n", "D");

        assert_eq!(json["cycle_count"], 1);
        assert_eq!(json["cycles"][0], json!(["A", "B", "C", "A"]));
        assert_eq!(json["edges"][0], json!({ "from": "D", "to": "A" }));
    }

    #[test]
    fn test_json_report_advisories() {
        let json = report_json("A: B\n", "A");

        let advisories = json["advisories"].as_array().unwrap();
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0]["package"], "B");
    }

    #[test]
    fn test_json_reverse_report() {
        let report = JsonReportGenerator::new()
            .generate_reverse_report("A", &["B", "C"])
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["target"], "A");
        assert_eq!(json["count"], 2);
        assert_eq!(json["dependents"], json!(["B", "C"]));
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator::new()
            .generate_reverse_report("A", &[])
            .unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
