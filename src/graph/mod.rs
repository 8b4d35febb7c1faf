//! # Graph Construction and Rendering Module
//!
//! This module builds the transitive dependency graph of a root package and
//! presents it in several ways.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Iterative depth-first expansion from the root,
//!   recording every edge once and every back-edge as a cycle
//! - **DependencyGraph**: Packages in discovery order, edges in recording order
//! - **BuildOutcome**: The graph together with its cycles and lookup advisories
//!
//! ### Queries
//! - **ReverseDependencyResolver**: Every package that transitively depends on
//!   a target
//!
//! ### Rendering
//! - **TreeRenderer**: Indented tree with `[CIRCULAR]` markers, produced lazily
//! - **GraphRenderer**: Mermaid and Graphviz DOT export with cyclic edges
//!   highlighted
//!
//! ## Example
//!
//! ```
//! use deplens::graph::{DiagramFormat, GraphRenderer, TreeRenderer, build_graph, reverse_dependents};
//! use deplens::repository::FixtureRepository;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = FixtureRepository::parse("D: A\nA: B\nB: C\nC: A\n");
//! let outcome = build_graph("D", &repo)?;
//!
//! assert_eq!(outcome.graph().node_count(), 4);
//! assert_eq!(outcome.cycles()[0].to_string(), "A -> B -> C -> A");
//!
//! // A sits on a cycle, so it is one of its own dependents
//! let mut dependents: Vec<_> = reverse_dependents(outcome.graph(), "A")?.into_iter().collect();
//! dependents.sort();
//! assert_eq!(dependents, vec!["A", "B", "C", "D"]);
//!
//! let tree = TreeRenderer::new().render_to_string(outcome.graph(), "D")?;
//! assert!(tree.contains("A [CIRCULAR]"));
//!
//! let diagram = GraphRenderer::new(true).export(
//!     DiagramFormat::Mermaid,
//!     outcome.graph(),
//!     outcome.cycles(),
//! )?;
//! assert!(diagram.contains("graph TD"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod reverse;
mod tree;
mod types;

pub use builder::{DependencyGraphBuilder, build_graph};
pub use renderer::{DiagramFormat, GraphRenderer};
pub use reverse::{ReverseDependencyResolver, reverse_dependents};
pub use tree::{TreeLine, TreeLines, TreeRenderer};
pub use types::{BuildOutcome, DependencyGraph, DependencyRecord, PackageId, VisitState};
