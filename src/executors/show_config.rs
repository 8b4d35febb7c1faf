//! Show-config command executor

use miette::Result;

use crate::config::AppSettings;
use crate::executors::CommandExecutor;

pub struct ShowConfigExecutor;

impl CommandExecutor for ShowConfigExecutor {
    type Config = AppSettings;

    fn execute(config: Self::Config) -> Result<()> {
        for (key, value) in config.parameters() {
            println!("{key}={value}");
        }
        Ok(())
    }
}
