//! Show-config command implementation

use miette::Result;

use crate::config::AppSettings;

/// Execute the show-config command
pub fn execute_show_config_command(settings: AppSettings) -> Result<()> {
    use crate::executors::CommandExecutor;
    use crate::executors::show_config::ShowConfigExecutor;
    ShowConfigExecutor::execute(settings)
}
