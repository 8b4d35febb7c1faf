//! Ascii-tree and render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{AppSettings, OutputMode, TreeOptions};
use crate::error::DepLensError;

impl FromCommand for TreeOptions {
    fn from_command(command: Commands, settings: AppSettings) -> Result<Self, DepLensError> {
        match command {
            Commands::AsciiTree => TreeOptions::builder()
                .with_settings(settings)
                .with_mode(OutputMode::AsciiTree)
                .build(),
            Commands::Render => {
                let mode = settings.output_mode;
                TreeOptions::builder()
                    .with_settings(settings)
                    .with_mode(mode)
                    .build()
            }
            _ => Err(DepLensError::ConfigurationError {
                message: "Invalid command type for TreeOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TreeOptions);

/// Execute the ascii-tree or render command
pub fn execute_tree_command(command: Commands, settings: AppSettings) -> Result<()> {
    let config = TreeOptions::from_command(command, settings)
        .wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}
