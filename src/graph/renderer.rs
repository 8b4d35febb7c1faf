use std::collections::{HashMap, HashSet};
use std::io::Write;

use petgraph::graph::NodeIndex;

use super::types::DependencyGraph;
use crate::detector::Cycle;
use crate::error::DepLensError;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepLensError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepLensError::from)
    };
}

/// Diagram dialects understood by [`GraphRenderer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DiagramFormat {
    Mermaid,
    Dot,
}

impl DiagramFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DiagramFormat::Mermaid => "mmd",
            DiagramFormat::Dot => "dot",
        }
    }
}

/// Exports a dependency graph as diagram text
///
/// Edges are written in recording order, so the output is stable for a given
/// build. Edges that lie on a recorded cycle are styled once each, however
/// many cycles share them.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

/// Edges and nodes that take part in at least one cycle
struct CycleMembership<'a> {
    edges: HashSet<(&'a str, &'a str)>,
    nodes: HashSet<&'a str>,
}

impl<'a> CycleMembership<'a> {
    fn new(cycles: &'a [Cycle]) -> Self {
        let edges = cycles.iter().flat_map(Cycle::edges).collect();
        let nodes = cycles
            .iter()
            .flat_map(|c| c.participants().iter().map(String::as_str))
            .collect();
        Self { edges, nodes }
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&(from, to))
    }

    fn has_node(&self, package: &str) -> bool {
        self.nodes.contains(package)
    }
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    /// Render in the requested dialect
    pub fn render(
        &self,
        format: DiagramFormat,
        graph: &DependencyGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<(), DepLensError> {
        match format {
            DiagramFormat::Mermaid => self.render_mermaid(graph, cycles, output),
            DiagramFormat::Dot => self.render_dot(graph, cycles, output),
        }
    }

    /// Render to an owned string
    pub fn export(
        &self,
        format: DiagramFormat,
        graph: &DependencyGraph,
        cycles: &[Cycle],
    ) -> Result<String, DepLensError> {
        let mut buffer = Vec::new();
        self.render(format, graph, cycles, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| DepLensError::Io(std::io::Error::other(e)))
    }

    pub fn render_mermaid(
        &self,
        graph: &DependencyGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<(), DepLensError> {
        let membership = CycleMembership::new(cycles);
        let ids = self.mermaid_ids(graph);

        writeln_out!(output, "---")?;
        writeln_out!(output, "title: Dependency graph of {}", graph.root())?;
        writeln_out!(output, "---")?;
        writeln_out!(output, "graph TD")?;

        for (idx, package) in graph.inner().node_indices().zip(graph.nodes()) {
            let node_id = &ids[&idx];
            writeln_out!(
                output,
                "    {}[\"{}\"]",
                node_id,
                package.replace('"', "#quot;")
            )?;

            if self.highlight_cycles && membership.has_node(package) {
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        let mut cyclic_links = Vec::new();
        for (link_index, (from, to)) in graph.edges().enumerate() {
            let (Some(from_idx), Some(to_idx)) = (graph.index_of(from), graph.index_of(to)) else {
                continue;
            };
            writeln_out!(output, "    {} --> {}", ids[&from_idx], ids[&to_idx])?;

            if membership.has_edge(from, to) {
                cyclic_links.push(link_index);
            }
        }

        if !cycles.is_empty() {
            writeln_out!(output)?;
            writeln_out!(output, "    %% Cycles detected: {}", cycles.len())?;
            for (i, cycle) in cycles.iter().enumerate() {
                writeln_out!(output, "    %% Cycle {}: {}", i + 1, cycle)?;
            }

            if self.highlight_cycles {
                for link_index in cyclic_links {
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:3px",
                        link_index,
                        colors::CYCLE_EDGE
                    )?;
                }
            }
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DependencyGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<(), DepLensError> {
        let membership = CycleMembership::new(cycles);

        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for package in graph.nodes() {
            let (fill_color, stroke_color) =
                if self.highlight_cycles && membership.has_node(package) {
                    (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
                } else {
                    (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
                };

            writeln_out!(
                output,
                r#"    "{}" [style="rounded,filled", fillcolor="{}", color="{}", penwidth=2];"#,
                dot_escape(package),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (from, to) in graph.edges() {
            if self.highlight_cycles && membership.has_edge(from, to) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=3];"#,
                    dot_escape(from),
                    dot_escape(to),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}"];"#,
                    dot_escape(from),
                    dot_escape(to),
                    colors::NORMAL_EDGE
                )?;
            }
        }

        if !cycles.is_empty() {
            writeln_out!(output)?;
            writeln_out!(output, "    // Cycles detected: {}", cycles.len())?;
            for (i, cycle) in cycles.iter().enumerate() {
                writeln_out!(output, "    // Cycle {}: {}", i + 1, cycle)?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Mermaid identifiers for every node
    ///
    /// Names that sanitize to the same identifier get the node index appended,
    /// plus a counter when that is taken as well.
    fn mermaid_ids(&self, graph: &DependencyGraph) -> HashMap<NodeIndex, String> {
        let mut taken = HashSet::new();
        let mut ids = HashMap::new();

        for idx in graph.inner().node_indices() {
            let natural = self.mermaid_id(graph.name(idx));
            let mut id = natural.clone();
            let mut attempt = 0;
            // A suffixed id may itself be another package's natural id
            while !taken.insert(id.clone()) {
                id = match attempt {
                    0 => format!("{natural}_{}", idx.index()),
                    n => format!("{natural}_{}_{n}", idx.index()),
                };
                attempt += 1;
            }
            ids.insert(idx, id);
        }

        ids
    }

    fn mermaid_id(&self, name: &str) -> String {
        let id: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        // Mermaid reserves a few words and rejects ids starting with a digit
        match id.as_str() {
            "end" | "graph" | "subgraph" | "style" | "click" => format!("pkg_{id}"),
            _ if id.starts_with(|c: char| c.is_ascii_digit()) => format!("pkg_{id}"),
            _ => id,
        }
    }
}

fn dot_escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::repository::FixtureRepository;

    fn cycle_outcome() -> crate::graph::BuildOutcome {
        let repo = FixtureRepository::parse("D: A\nA: B\nB: C\nC: A\n");
        build_graph("D", &repo).unwrap()
    }

    #[test]
    fn test_mermaid_id_sanitizes_names() {
        let renderer = GraphRenderer::new(true);

        assert_eq!(renderer.mermaid_id("Newtonsoft.Json"), "Newtonsoft_Json");
        assert_eq!(renderer.mermaid_id("my-pkg"), "my_pkg");
        assert_eq!(renderer.mermaid_id("end"), "pkg_end");
        assert_eq!(renderer.mermaid_id("7zip"), "pkg_7zip");
    }

    #[test]
    fn test_colliding_mermaid_ids_are_disambiguated() {
        let mut graph = DependencyGraph::new("a.b");
        graph.add_edge("a.b", "a_b");
        let renderer = GraphRenderer::new(true);

        let ids = renderer.mermaid_ids(&graph);

        let mut values: Vec<_> = ids.values().cloned().collect();
        values.sort();
        assert_eq!(values, vec!["a_b", "a_b_1"]);
    }

    #[test]
    fn test_suffixed_mermaid_id_skips_natural_ids() {
        let repo = FixtureRepository::parse("a_b: a_b_2 a.b\n");
        let outcome = build_graph("a_b", &repo).unwrap();
        let renderer = GraphRenderer::new(true);

        let ids = renderer.mermaid_ids(outcome.graph());

        let unique: HashSet<_> = ids.values().collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(ids[&outcome.graph().index_of("a_b_2").unwrap()], "a_b_2");
        assert_eq!(ids[&outcome.graph().index_of("a.b").unwrap()], "a_b_2_1");

        let text = renderer
            .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
            .unwrap();
        let edges: Vec<_> = text.lines().filter(|l| l.contains(" --> ")).collect();
        assert_eq!(edges, vec!["    a_b --> a_b_2", "    a_b --> a_b_2_1"]);
    }

    #[test]
    fn test_mermaid_cycle_styling() {
        let outcome = cycle_outcome();
        let renderer = GraphRenderer::new(true);

        let text = renderer
            .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
            .unwrap();

        assert_eq!(text.lines().filter(|l| l.contains(" --> ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.contains("linkStyle")).count(), 3);
        assert!(text.contains("%% Cycle 1: A -> B -> C -> A"));
        assert!(text.contains("linkStyle 1 stroke:#FF6500"));
        assert!(!text.contains("linkStyle 0 "));
    }

    #[test]
    fn test_mermaid_without_highlighting_keeps_cycle_comments() {
        let outcome = cycle_outcome();
        let renderer = GraphRenderer::new(false);

        let text = renderer
            .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
            .unwrap();

        assert!(!text.contains("linkStyle"));
        assert!(!text.contains("style "));
        assert!(text.contains("%% Cycles detected: 1"));
    }

    #[test]
    fn test_shared_cyclic_edge_styled_once() {
        let repo = FixtureRepository::parse("A: B\nB: C D\nC: A\nD: A\n");
        let outcome = build_graph("A", &repo).unwrap();
        let renderer = GraphRenderer::new(true);

        let text = renderer
            .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
            .unwrap();

        // A->B appears in both cycles
        assert_eq!(text.matches("linkStyle 0 ").count(), 1);
        assert_eq!(text.lines().filter(|l| l.contains("linkStyle")).count(), 5);
    }

    #[test]
    fn test_dot_output() {
        let outcome = cycle_outcome();
        let renderer = GraphRenderer::new(true);

        let text = renderer
            .export(DiagramFormat::Dot, outcome.graph(), outcome.cycles())
            .unwrap();

        assert!(text.starts_with("digraph dependencies {"));
        assert!(text.contains(r##""D" -> "A" [color="#64B5F6"];"##));
        assert!(text.contains(r##""C" -> "A" [color="#FF6500", penwidth=3];"##));
        assert!(text.contains("// Cycle 1: A -> B -> C -> A"));
        assert!(text.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        assert_eq!(dot_escape(r#"we"ird"#), r#"we\"ird"#);
    }

    #[test]
    fn test_diagram_format_extension() {
        assert_eq!(DiagramFormat::Mermaid.extension(), "mmd");
        assert_eq!(DiagramFormat::Dot.extension(), "dot");
    }
}
