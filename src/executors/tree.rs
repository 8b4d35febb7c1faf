//! Tree and list rendering executor

use std::io::{self, Write};

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::{OutputMode, TreeOptions};
use crate::executors::{CommandExecutor, build_outcome, warn_advisories};
use crate::graph::TreeRenderer;

pub struct TreeExecutor;

impl CommandExecutor for TreeExecutor {
    type Config = TreeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let outcome = build_outcome(&config.settings)?;
        warn_advisories(&outcome);

        let graph = outcome.graph();
        let stdout = io::stdout();
        let mut output = stdout.lock();

        match config.mode {
            OutputMode::AsciiTree => {
                TreeRenderer::new()
                    .render(graph, graph.root(), &mut output)
                    .wrap_err("Failed to render dependency tree")?;
            }
            OutputMode::List => {
                let dependencies = graph
                    .transitive_dependencies(graph.root())
                    .wrap_err("Failed to collect transitive dependencies")?;
                for package in dependencies {
                    writeln!(output, "{package}").into_diagnostic()?;
                }
            }
        }

        output.flush().into_diagnostic()?;
        Ok(())
    }
}
