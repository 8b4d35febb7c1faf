//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::{AppSettings, RawAppSettings};
use crate::constants::config::DEFAULT_CONFIG_FILE;

/// Settings file location and per-invocation parameter overrides
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file holding the [app] table
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        env = "DEPLENS_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Root package (overrides package_name)
    #[arg(long, global = true, env = "DEPLENS_PACKAGE")]
    pub package: Option<String>,

    /// Dependency listing path or repository URL (overrides repo_source)
    #[arg(long, global = true, env = "DEPLENS_REPO_SOURCE")]
    pub repo_source: Option<String>,

    /// local-path or remote-url (overrides test_repo_mode)
    #[arg(long, global = true, env = "DEPLENS_REPO_MODE")]
    pub repo_mode: Option<String>,

    /// ascii-tree or list (overrides output_mode)
    #[arg(long, global = true, env = "DEPLENS_OUTPUT_MODE")]
    pub output_mode: Option<String>,
}

impl SettingsArgs {
    /// Settings file path, `deplens.toml` when none was given
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn overrides(&self) -> RawAppSettings {
        RawAppSettings {
            package_name: self.package.clone(),
            repo_source: self.repo_source.clone(),
            test_repo_mode: self.repo_mode.clone(),
            output_mode: self.output_mode.clone(),
        }
    }

    /// Load and validate the run parameters
    pub fn load(&self) -> Result<AppSettings, crate::error::DepLensError> {
        AppSettings::load(&self.config_path(), &self.overrides())
    }
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DEPLENS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepLensError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// Create the configuration from a command variant and the validated run
    /// parameters
    fn from_command(
        command: crate::cli::Commands,
        settings: AppSettings,
    ) -> Result<Self, crate::error::DepLensError>;
}

/// Macro to implement `TryFrom<(Commands, AppSettings)>` using [`FromCommand`]
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<($crate::cli::Commands, $crate::config::AppSettings)>
            for $config
        {
            type Error = $crate::error::DepLensError;

            fn try_from(
                (command, settings): ($crate::cli::Commands, $crate::config::AppSettings),
            ) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command, settings)
            }
        }
    };
}
