//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::DepLensError;
use crate::graph::BuildOutcome;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcome: &BuildOutcome) -> Result<String, DepLensError> {
        let mut output = String::new();
        let graph = outcome.graph();

        writeln!(
            output,
            "{} Dependency graph of {}",
            style("📊").cyan(),
            style(graph.root()).bold()
        )?;
        writeln!(output, "Nodes: {}", graph.node_count())?;
        writeln!(output, "Edges: {}", graph.edge_count())?;

        if outcome.has_cycles() {
            writeln!(
                output,
                "{} {}",
                style("Cycles detected:").red().bold(),
                style(outcome.cycle_count()).red().bold()
            )?;

            let limit = self.max_cycles.unwrap_or(usize::MAX);
            for cycle in outcome.cycles().iter().take(limit) {
                writeln!(output, "  {cycle}")?;
            }

            if outcome.cycle_count() > limit {
                writeln!(
                    output,
                    "  {} {} more {} not shown",
                    style("…").dim(),
                    outcome.cycle_count() - limit,
                    pluralize("cycle", outcome.cycle_count() - limit)
                )?;
            }
        } else {
            writeln!(output, "{}", style("No cycles detected").green())?;
        }

        if !outcome.advisories().is_empty() {
            writeln!(
                output,
                "{} Advisories: {} (treated as having no dependencies)",
                style("⚠").yellow().bold(),
                outcome.advisories().len()
            )?;
            for advisory in outcome.advisories() {
                writeln!(output, "  {} {}", style("•").dim(), advisory)?;
            }
        }

        Ok(output)
    }

    fn generate_reverse_report(
        &self,
        target: &str,
        dependents: &[&str],
    ) -> Result<String, DepLensError> {
        let mut output = String::new();

        writeln!(output, "Packages that depend on '{target}':")?;
        for dependent in dependents {
            writeln!(output, "{dependent}")?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::build_graph;
    use crate::repository::FixtureRepository;

    fn report(listing: &str, root: &str, max_cycles: Option<usize>) -> String {
        let repo = FixtureRepository::parse(listing);
        let outcome = build_graph(root, &repo).unwrap();
        let text = HumanReportGenerator::new(max_cycles)
            .generate_report(&outcome)
            .unwrap();
        strip_ansi_codes(&text).into_owned()
    }

    #[test]
    fn test_report_without_cycles() {
        let text = report("A: B C\nB: D\nC: D\nD:\n", "A", None);

        assert_eq!(
            text,
            "📊 Dependency graph of A\nNodes: 4\nEdges: 4\nNo cycles detected\n"
        );
    }

    #[test]
    fn test_report_lists_cycles() {
        let text = report("D: A\nA: B\nB: C\nC: A\n", "D", None);

        assert!(text.contains("Cycles detected: 1\n"));
        assert!(text.contains("  A -> B -> C -> A\n"));
    }

    #[test]
    fn test_report_truncates_cycles() {
        let text = report("A: B\nB: C D\nC: A\nD: A\n", "A", Some(1));

        assert!(text.contains("Cycles detected: 2\n"));
        assert!(text.contains("A -> B -> C -> A"));
        assert!(!text.contains("A -> B -> D -> A"));
        assert!(text.contains("1 more cycle not shown"));
    }

    #[test]
    fn test_report_lists_advisories() {
        let text = report("A: B\n", "A", None);

        assert!(text.contains("Advisories: 1 (treated as having no dependencies)"));
        assert!(text.contains("package 'B' was not found in the repository"));
    }

    #[test]
    fn test_reverse_report() {
        let text = HumanReportGenerator::default()
            .generate_reverse_report("A", &["B", "C", "D"])
            .unwrap();

        assert_eq!(text, "Packages that depend on 'A':\nB\nC\nD\n");
    }
}
