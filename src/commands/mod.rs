//! Command implementations for the deplens CLI
//!
//! This module contains the implementations for each CLI command:
//! - build-graph: Build the dependency graph and summarize it
//! - reverse-deps: List every package that depends on a target
//! - ascii-tree / render: Print the graph as a tree or a flat list
//! - visualize: Write a Mermaid or Graphviz diagram
//! - show-config: Print the validated run parameters

pub mod build_graph;
pub mod reverse_deps;
pub mod show_config;
pub mod tree;
pub mod visualize;

use miette::{Result, WrapErr};
use tracing::debug;

use crate::cli::Commands;
use crate::common::SettingsArgs;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands, settings_args: &SettingsArgs) -> Result<()> {
    let config_path = settings_args.config_path();
    debug!(config = %config_path.display(), "loading settings");

    let settings = settings_args
        .load()
        .wrap_err_with(|| format!("Failed to load settings from '{}'", config_path.display()))?;

    match &command {
        Commands::BuildGraph { .. } => build_graph::execute_build_graph_command(command, settings),
        Commands::ReverseDeps { .. } => {
            reverse_deps::execute_reverse_deps_command(command, settings)
        }
        Commands::AsciiTree | Commands::Render => tree::execute_tree_command(command, settings),
        Commands::Visualize { .. } => visualize::execute_visualize_command(command, settings),
        Commands::ShowConfig => show_config::execute_show_config_command(settings),
    }
}
