//! Reverse-deps command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::ReverseDepsOptions;
use crate::executors::{CommandExecutor, build_outcome, warn_advisories};
use crate::graph::ReverseDependencyResolver;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct ReverseDepsExecutor;

impl CommandExecutor for ReverseDepsExecutor {
    type Config = ReverseDepsOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let outcome = build_outcome(&config.settings)?;
        warn_advisories(&outcome);

        let dependents = ReverseDependencyResolver::new(outcome.graph())
            .dependents_ordered(&config.target)
            .wrap_err_with(|| format!("Cannot list packages depending on '{}'", config.target))?;

        if dependents.is_empty() {
            eprintln!(
                "{} Nothing in the graph depends on {}",
                style("ℹ").blue(),
                style(&config.target).bold()
            );
        }

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::default().generate_reverse_report(&config.target, &dependents)
            }
            OutputFormat::Json => {
                JsonReportGenerator::new().generate_reverse_report(&config.target, &dependents)
            }
        }
        .wrap_err("Failed to generate report")?;

        println!("{}", report.trim_end());
        Ok(())
    }
}
