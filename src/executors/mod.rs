//! Command executors that handle the actual logic for each command

pub mod build_graph;
pub mod reverse_deps;
pub mod show_config;
pub mod tree;
pub mod visualize;

use console::style;
use miette::{Result, WrapErr};
use tracing::info;

use crate::config::AppSettings;
use crate::graph::{BuildOutcome, DependencyGraphBuilder};
use crate::progress::ProgressReporter;
use crate::repository::load_repository;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the configured repository and build the graph of the root package
pub(crate) fn build_outcome(settings: &AppSettings) -> Result<BuildOutcome> {
    eprintln!(
        "{} Resolving dependencies of {}...",
        style("🔍").cyan(),
        style(&settings.package_name).bold()
    );

    let resolver = load_repository(settings).wrap_err_with(|| {
        format!(
            "Failed to load {} repository '{}'",
            settings.test_repo_mode, settings.repo_source
        )
    })?;

    let mut progress = ProgressReporter::for_terminal();
    if let Some(p) = progress.as_mut() {
        p.start_build(&settings.package_name);
    }

    let outcome = DependencyGraphBuilder::new()
        .with_progress(progress.as_ref())
        .build(&settings.package_name, resolver.as_ref())
        .wrap_err("Failed to build dependency graph")?;

    if let Some(p) = progress.as_mut() {
        p.finish_build(&outcome);
    }

    info!(
        nodes = outcome.graph().node_count(),
        edges = outcome.graph().edge_count(),
        cycles = outcome.cycle_count(),
        "dependency graph built"
    );

    Ok(outcome)
}

/// Surface lookup failures on stderr for commands whose output has no room
/// for them
pub(crate) fn warn_advisories(outcome: &BuildOutcome) {
    for advisory in outcome.advisories() {
        eprintln!(
            "{} {} (treated as having no dependencies)",
            style("⚠").yellow().bold(),
            advisory
        );
    }
}
