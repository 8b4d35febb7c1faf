//! Reverse-deps command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{AppSettings, ReverseDepsOptions};
use crate::error::DepLensError;

impl FromCommand for ReverseDepsOptions {
    fn from_command(command: Commands, settings: AppSettings) -> Result<Self, DepLensError> {
        match command {
            Commands::ReverseDeps { package, format } => ReverseDepsOptions::builder()
                .with_settings(settings)
                .with_target(package)
                .with_format(format.format)
                .build(),
            _ => Err(DepLensError::ConfigurationError {
                message: "Invalid command type for ReverseDepsOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ReverseDepsOptions);

/// Execute the reverse-deps command
pub fn execute_reverse_deps_command(command: Commands, settings: AppSettings) -> Result<()> {
    let config = ReverseDepsOptions::from_command(command, settings)
        .wrap_err("Failed to parse reverse-deps command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::reverse_deps::ReverseDepsExecutor;
    ReverseDepsExecutor::execute(config)
}
