//! Tests for the tree and diagram renderers

use deplens::graph::{BuildOutcome, DiagramFormat, GraphRenderer, TreeRenderer, build_graph};
use deplens::repository::FixtureRepository;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn build(listing: &str, root: &str) -> BuildOutcome {
    build_graph(root, &FixtureRepository::parse(listing)).unwrap()
}

fn tree(listing: &str, root: &str) -> String {
    let outcome = build(listing, root);
    TreeRenderer::new()
        .render_to_string(outcome.graph(), root)
        .unwrap()
}

#[test]
fn test_tree_duplicates_diamond_subtrees() {
    let rendered = tree("A: B C\nB: D\nC: D\nD:\n", "A");

    assert_eq!(
        rendered,
        "📦 A\n├── B\n│   └── D\n└── C\n    └── D\n"
    );
}

#[test]
fn test_tree_stops_at_circular_ancestor() {
    let rendered = tree("D: A\nA: B\nB: C\nC: A\n", "D");

    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.last(), Some(&"            └── A [CIRCULAR]"));
    assert_eq!(rendered.matches("[CIRCULAR]").count(), 1);
}

#[test]
fn test_tree_interior_and_last_connectors() {
    let rendered = tree("R: A B C\nA: X\nB:\nC:\nX:\n", "R");

    assert_eq!(
        rendered,
        "📦 R\n├── A\n│   └── X\n├── B\n└── C\n"
    );
}

#[test]
fn test_tree_of_subgraph_root() {
    let outcome = build("R: A\nA: B\nB: A\n", "R");

    let rendered = TreeRenderer::new()
        .render_to_string(outcome.graph(), "A")
        .unwrap();

    assert_eq!(rendered, "📦 A\n└── B\n    └── A [CIRCULAR]\n");
}

#[test]
fn test_mermaid_export_for_cycle() {
    let outcome = build("D: A\nA: B\nB: C\nC: A\n", "D");

    let diagram = GraphRenderer::new(true)
        .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
        .unwrap();

    let edge_statements: Vec<_> = diagram.lines().filter(|l| l.contains(" --> ")).collect();
    assert_eq!(
        edge_statements,
        vec!["    D --> A", "    A --> B", "    B --> C", "    C --> A"]
    );
    assert_eq!(diagram.lines().filter(|l| l.contains("linkStyle")).count(), 3);
    assert_eq!(diagram.matches("%% Cycle ").count(), 1);

    assert!(predicate::str::starts_with("---\ntitle: Dependency graph of D\n---\ngraph TD\n").eval(&diagram));
    assert!(predicate::str::contains("%% Cycle 1: A -> B -> C -> A").eval(&diagram));
    assert!(predicate::str::contains("linkStyle 0").not().eval(&diagram));
}

#[test]
fn test_mermaid_export_without_cycles() {
    let outcome = build("A: B C\nB: D\nC: D\nD:\n", "A");

    let diagram = GraphRenderer::new(true)
        .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
        .unwrap();

    assert!(predicate::str::contains("linkStyle").not().eval(&diagram));
    assert!(predicate::str::contains("%%").not().eval(&diagram));
    assert_eq!(diagram.lines().filter(|l| l.contains(" --> ")).count(), 4);
}

#[test]
fn test_mermaid_sanitizes_package_names() {
    let outcome = build("Serilog.Sinks.File: Serilog\nSerilog:\n", "Serilog.Sinks.File");

    let diagram = GraphRenderer::new(true)
        .export(DiagramFormat::Mermaid, outcome.graph(), outcome.cycles())
        .unwrap();

    assert!(predicate::str::contains(r#"Serilog_Sinks_File["Serilog.Sinks.File"]"#).eval(&diagram));
    assert!(predicate::str::contains("Serilog_Sinks_File --> Serilog").eval(&diagram));
}

#[test]
fn test_dot_export_for_cycle() {
    let outcome = build("D: A\nA: B\nB: C\nC: A\n", "D");

    let diagram = GraphRenderer::new(true)
        .export(DiagramFormat::Dot, outcome.graph(), outcome.cycles())
        .unwrap();

    assert_eq!(diagram.matches(" -> \"").count(), 4);
    assert_eq!(diagram.matches("penwidth=3").count(), 3);
    assert!(predicate::str::contains("// Cycle 1: A -> B -> C -> A").eval(&diagram));
}

#[test]
fn test_export_is_deterministic() {
    let listing = "A: B C\nB: D\nC: D A\nD: B\n";

    let first = build(listing, "A");
    let second = build(listing, "A");
    let renderer = GraphRenderer::new(true);

    assert_eq!(
        renderer
            .export(DiagramFormat::Mermaid, first.graph(), first.cycles())
            .unwrap(),
        renderer
            .export(DiagramFormat::Mermaid, second.graph(), second.cycles())
            .unwrap()
    );
}
