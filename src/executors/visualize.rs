//! Visualize command executor

use std::fs::File;
use std::io::{BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::VisualizeOptions;
use crate::executors::{CommandExecutor, build_outcome, warn_advisories};
use crate::graph::GraphRenderer;
use crate::utils::string::{count_of, pluralize};

pub struct VisualizeExecutor;

impl CommandExecutor for VisualizeExecutor {
    type Config = VisualizeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let outcome = build_outcome(&config.settings)?;
        warn_advisories(&outcome);

        let file = File::create(&config.output)
            .into_diagnostic()
            .wrap_err_with(|| {
                format!("Failed to create output file '{}'", config.output.display())
            })?;
        let mut writer = BufWriter::new(file);

        GraphRenderer::new(config.highlight_cycles)
            .render(
                config.format,
                outcome.graph(),
                outcome.cycles(),
                &mut writer,
            )
            .wrap_err_with(|| format!("Failed to render {:?} diagram", config.format))?;
        writer.flush().into_diagnostic()?;

        let graph = outcome.graph();
        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(config.output.display()).bold()
        );
        println!("{}", config.output.display());
        eprintln!(
            "  {} {}, {}",
            style("→").dim(),
            count_of(graph.node_count(), "node"),
            count_of(graph.edge_count(), "edge")
        );

        if outcome.has_cycles() {
            eprintln!(
                "{} {} {} detected{}",
                style("⚠").yellow().bold(),
                style(outcome.cycle_count()).red().bold(),
                pluralize("cycle", outcome.cycle_count()),
                if config.highlight_cycles {
                    "; cyclic edges are highlighted"
                } else {
                    ""
                }
            );
        }

        Ok(())
    }
}
