//! Build-graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{AppSettings, BuildGraphOptions};
use crate::error::DepLensError;

impl FromCommand for BuildGraphOptions {
    fn from_command(command: Commands, settings: AppSettings) -> Result<Self, DepLensError> {
        match command {
            Commands::BuildGraph { format, max_cycles } => BuildGraphOptions::builder()
                .with_settings(settings)
                .with_format(format.format)
                .with_max_cycles(max_cycles)
                .build(),
            _ => Err(DepLensError::ConfigurationError {
                message: "Invalid command type for BuildGraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BuildGraphOptions);

/// Execute the build-graph command
pub fn execute_build_graph_command(command: Commands, settings: AppSettings) -> Result<()> {
    let config = BuildGraphOptions::from_command(command, settings)
        .wrap_err("Failed to parse build-graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::build_graph::BuildGraphExecutor;
    BuildGraphExecutor::execute(config)
}
