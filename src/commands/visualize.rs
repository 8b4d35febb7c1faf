//! Visualize command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{AppSettings, VisualizeOptions};
use crate::error::DepLensError;

impl FromCommand for VisualizeOptions {
    fn from_command(command: Commands, settings: AppSettings) -> Result<Self, DepLensError> {
        match command {
            Commands::Visualize {
                format,
                output,
                highlight_cycles,
            } => VisualizeOptions::builder()
                .with_settings(settings)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(DepLensError::ConfigurationError {
                message: "Invalid command type for VisualizeOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(VisualizeOptions);

/// Execute the visualize command for writing diagram files
pub fn execute_visualize_command(command: Commands, settings: AppSettings) -> Result<()> {
    let config = VisualizeOptions::from_command(command, settings)
        .wrap_err("Failed to parse visualize command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::visualize::VisualizeExecutor;
    VisualizeExecutor::execute(config)
}
