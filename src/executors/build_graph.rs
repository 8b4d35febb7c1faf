//! Build-graph command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::BuildGraphOptions;
use crate::executors::{CommandExecutor, build_outcome};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct BuildGraphExecutor;

impl CommandExecutor for BuildGraphExecutor {
    type Config = BuildGraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let outcome = build_outcome(&config.settings)?;

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_cycles).generate_report(&outcome)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&outcome),
        }
        .wrap_err("Failed to generate report")?;

        println!("{}", report.trim_end());
        Ok(())
    }
}
