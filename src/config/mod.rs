//! # Configuration Module
//!
//! Run parameters come from the `[app]` table of a TOML settings file, with
//! every key overridable on the command line. [`AppSettings`] is the
//! validated result; each command then wraps it in its own options struct,
//! built through a builder with `with_*` methods.
//!
//! ## Command Configurations
//!
//! - **BuildGraphOptions**: `build-graph` summary and report format
//! - **ReverseDepsOptions**: `reverse-deps` target and report format
//! - **TreeOptions**: `ascii-tree` and `render` presentation
//! - **VisualizeOptions**: `visualize` diagram dialect and output file
//!
//! ## Example
//!
//! ```
//! use deplens::common::ConfigBuilder;
//! use deplens::config::{AppSettings, OutputMode, RawAppSettings, VisualizeOptions};
//! use deplens::graph::DiagramFormat;
//!
//! let settings = AppSettings::validate(RawAppSettings {
//!     package_name: Some("Serilog".into()),
//!     repo_source: Some("https://example.org/packages".into()),
//!     test_repo_mode: Some("remote-url".into()),
//!     output_mode: Some("ascii-tree".into()),
//! })
//! .unwrap();
//! assert_eq!(settings.output_mode, OutputMode::AsciiTree);
//!
//! let options = VisualizeOptions::builder()
//!     .with_settings(settings)
//!     .with_format(DiagramFormat::Dot)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.output.to_str(), Some("Serilog.dot"));
//! ```

pub mod build_graph;
pub mod reverse_deps;
pub mod settings;
pub mod tree;
pub mod visualize;

pub use build_graph::BuildGraphOptions;
pub use reverse_deps::ReverseDepsOptions;
pub use settings::{AppSettings, OutputMode, RawAppSettings, RepoMode};
pub use tree::TreeOptions;
pub use visualize::VisualizeOptions;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::ConfigBuilder;
    use crate::error::DepLensError;
    use crate::graph::DiagramFormat;

    fn settings() -> AppSettings {
        AppSettings {
            package_name: "A".to_string(),
            repo_source: "/tmp/deps.txt".to_string(),
            test_repo_mode: RepoMode::LocalPath,
            output_mode: OutputMode::List,
        }
    }

    #[test]
    fn test_build_graph_options_require_format() {
        let result = BuildGraphOptions::builder().with_settings(settings()).build();

        assert!(matches!(
            result,
            Err(DepLensError::ConfigurationError { message }) if message == "Missing required field: format"
        ));
    }

    #[test]
    fn test_reverse_deps_options_trim_target() {
        let options = ReverseDepsOptions::builder()
            .with_settings(settings())
            .with_target(" B ")
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();

        assert_eq!(options.target, "B");
    }

    #[test]
    fn test_reverse_deps_options_reject_blank_target() {
        let result = ReverseDepsOptions::builder()
            .with_settings(settings())
            .with_target("  ")
            .with_format(OutputFormat::Human)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_tree_options_default_to_settings_mode() {
        let render = TreeOptions::builder().with_settings(settings()).build().unwrap();
        let tree = TreeOptions::builder()
            .with_settings(settings())
            .with_mode(OutputMode::AsciiTree)
            .build()
            .unwrap();

        assert_eq!(render.mode, OutputMode::List);
        assert_eq!(tree.mode, OutputMode::AsciiTree);
    }

    #[test]
    fn test_visualize_options_explicit_output() {
        let options = VisualizeOptions::builder()
            .with_settings(settings())
            .with_format(DiagramFormat::Mermaid)
            .with_output(Some("graph.mmd".into()))
            .with_highlight_cycles(false)
            .build()
            .unwrap();

        assert_eq!(options.output.to_str(), Some("graph.mmd"));
        assert!(!options.highlight_cycles);
    }

    #[test]
    fn test_visualize_options_default_output() {
        let options = VisualizeOptions::builder()
            .with_settings(settings())
            .with_format(DiagramFormat::Mermaid)
            .build()
            .unwrap();

        assert_eq!(options.output.to_str(), Some("A.mmd"));
        assert!(options.highlight_cycles);
    }
}
