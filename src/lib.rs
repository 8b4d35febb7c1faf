//! # deplens - Transitive Dependency Graphs with Cycle Detection
//!
//! deplens resolves the full transitive dependency graph of a root package,
//! reports every circular dependency it encounters on the way, and renders the
//! result as a summary, an indented tree, a reverse-dependency listing or a
//! Mermaid/Graphviz diagram.
//!
//! ## Main Components
//!
//! - **Repository**: The [`repository::DependencyResolver`] seam that answers
//!   "what does this package depend on?", plus a plain-text fixture backend
//! - **Graph**: Iterative depth-first graph builder, reverse-dependency
//!   queries, tree and diagram renderers
//! - **Detector**: Cycle values recorded from back-edges during the build
//! - **Reports**: Human-readable and JSON summaries
//!
//! ## Usage
//!
//! ### Building a graph and inspecting its cycles
//!
//! ```
//! use deplens::graph::build_graph;
//! use deplens::repository::FixtureRepository;
//! use deplens::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let repo = FixtureRepository::parse(
//!     "# package: dependencies\n\
//!      app: web db\n\
//!      web: http log\n\
//!      db: log\n\
//!      http: web\n\
//!      log:\n",
//! );
//!
//! let outcome = build_graph("app", &repo)?;
//! assert_eq!(outcome.graph().node_count(), 5);
//!
//! // One entry per back-edge found during the walk
//! for cycle in outcome.cycles() {
//!     println!("cycle: {cycle}");
//! }
//! assert_eq!(outcome.cycles()[0].to_string(), "web -> http -> web");
//!
//! let report = HumanReportGenerator::new(None).generate_report(&outcome)?;
//! assert!(report.contains("Cycles detected"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom resolvers
//!
//! Any closure returning a package's direct dependencies can drive the
//! builder. Failed lookups do not abort the build; the package becomes a leaf
//! and the failure is kept as an advisory.
//!
//! ```
//! use deplens::error::ResolveError;
//! use deplens::graph::{DependencyGraphBuilder, TreeRenderer};
//!
//! # fn main() -> miette::Result<()> {
//! let resolver = |package: &str| -> Result<Vec<String>, ResolveError> {
//!     match package {
//!         "root" => Ok(vec!["left".into(), "right".into()]),
//!         "left" | "right" => Ok(vec!["shared".into()]),
//!         "shared" => Ok(vec![]),
//!         other => Err(ResolveError::NotFound { package: other.into() }),
//!     }
//! };
//!
//! let outcome = DependencyGraphBuilder::new().build("root", &resolver)?;
//! assert!(outcome.advisories().is_empty());
//!
//! let tree = TreeRenderer::new().render_to_string(outcome.graph(), "root")?;
//! assert_eq!(tree.matches("shared").count(), 2);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod repository;

/// Map `-v` occurrences to a default log filter
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("DEPLENS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    execute_command(cli.command, &cli.settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(0), "warn");
        assert_eq!(default_log_filter(1), "info");
        assert_eq!(default_log_filter(2), "debug");
        assert_eq!(default_log_filter(7), "trace");
    }
}
