use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{FormatArgs, SettingsArgs};
use crate::graph::DiagramFormat;

#[derive(Parser)]
#[command(
    name = "deplens",
    about = "🔍 Build transitive package dependency graphs, find cycles and render them",
    long_about = "deplens resolves the full transitive dependency graph of a root package from \
                  a dependency listing, reports every circular dependency it runs into, and \
                  renders the result as a summary, an indented tree, a reverse-dependency \
                  listing or a Mermaid/Graphviz diagram. Run parameters are read from the [app] \
                  table of deplens.toml and can be overridden per invocation.",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the dependency graph and summarize it
    ///
    /// Prints the number of packages and dependency edges, followed by every
    /// cycle found while walking the graph.
    #[command(
        long_about = "Resolve the transitive dependencies of the configured package and print \
                      a summary: node count, edge count and either 'No cycles detected' or the \
                      list of detected cycles as 'A -> B -> C -> A'. Each back-edge found during \
                      the walk is reported as its own cycle, so two descendants looping back \
                      into the same ancestor produce two entries."
    )]
    BuildGraph {
        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of cycles to list in the human report
        #[arg(long, value_name = "N", env = "DEPLENS_MAX_CYCLES")]
        max_cycles: Option<usize>,
    },

    /// List every package that depends on PACKAGE
    ///
    /// Walks the graph backwards from PACKAGE. The package itself is only
    /// listed when it sits on a cycle.
    #[command(
        long_about = "Build the dependency graph of the configured package, then list every \
                      package with a forward path to PACKAGE, in discovery order. Fails when \
                      PACKAGE is not part of the graph."
    )]
    ReverseDeps {
        /// Package whose dependents are listed
        #[arg(value_name = "PACKAGE", env = "DEPLENS_TARGET")]
        package: String,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Print the dependency tree
    ///
    /// Shared dependencies are repeated under every parent; a package that
    /// loops back to an open ancestor is marked [CIRCULAR].
    AsciiTree,

    /// Write a Mermaid or Graphviz diagram of the graph
    #[command(
        long_about = "Export the dependency graph as diagram text. Edges appear in discovery \
                      order, edges on a cycle are drawn heavier and in a distinct color, and the \
                      detected cycles are listed in a comment block. The file defaults to \
                      <package>.mmd or <package>.dot in the working directory."
    )]
    Visualize {
        /// Diagram dialect
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_DIAGRAM_FORMAT,
            env = "DEPLENS_DIAGRAM_FORMAT"
        )]
        format: DiagramFormat,

        /// Output file (defaults to <package>.<ext>)
        #[arg(short, long, env = "DEPLENS_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the diagram
        #[arg(
            long,
            default_value_t = true,
            action = ArgAction::Set,
            env = "DEPLENS_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },

    /// Render the graph as configured by output_mode
    ///
    /// `ascii-tree` prints the dependency tree, `list` prints every
    /// transitive dependency of the root package on its own line.
    Render,

    /// Print the validated parameters as key=value lines
    ShowConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reverse_deps() {
        let cli = Cli::try_parse_from(["deplens", "reverse-deps", "A", "--format", "json"]).unwrap();

        match cli.command {
            Commands::ReverseDeps { package, format } => {
                assert_eq!(package, "A");
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("expected reverse-deps"),
        }
    }

    #[test]
    fn test_parse_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "deplens",
            "ascii-tree",
            "--package",
            "Serilog",
            "--repo-mode",
            "local-path",
            "-vv",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::AsciiTree));
        assert_eq!(cli.settings.package.as_deref(), Some("Serilog"));
        assert_eq!(cli.settings.repo_mode.as_deref(), Some("local-path"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_build_graph_max_cycles() {
        let cli = Cli::try_parse_from(["deplens", "build-graph", "--max-cycles", "3"]).unwrap();

        match cli.command {
            Commands::BuildGraph { format, max_cycles } => {
                assert_eq!(format.format, OutputFormat::Human);
                assert_eq!(max_cycles, Some(3));
            }
            _ => panic!("expected build-graph"),
        }
    }

    #[test]
    fn test_visualize_defaults() {
        let cli = Cli::try_parse_from(["deplens", "visualize"]).unwrap();

        match cli.command {
            Commands::Visualize {
                format,
                output,
                highlight_cycles,
            } => {
                assert_eq!(format, DiagramFormat::Mermaid);
                assert!(output.is_none());
                assert!(highlight_cycles);
            }
            _ => panic!("expected visualize"),
        }
    }

    #[test]
    fn test_visualize_disable_highlighting() {
        let cli = Cli::try_parse_from([
            "deplens",
            "visualize",
            "--format",
            "dot",
            "--highlight-cycles",
            "false",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Visualize {
                format: DiagramFormat::Dot,
                highlight_cycles: false,
                ..
            }
        ));
    }
}
