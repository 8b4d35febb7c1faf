//! Build-graph command configuration

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::DepLensError;

#[derive(Debug, Clone)]
pub struct BuildGraphOptions {
    pub settings: AppSettings,
    pub format: OutputFormat,
    /// Cycles listed before the human report summarizes the rest
    pub max_cycles: Option<usize>,
}

impl BuildGraphOptions {
    pub fn builder() -> BuildGraphOptionsBuilder {
        BuildGraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct BuildGraphOptionsBuilder {
    settings: Option<AppSettings>,
    format: Option<OutputFormat>,
    max_cycles: Option<usize>,
}

impl BuildGraphOptionsBuilder {
    pub fn new() -> Self {
        Self {
            settings: None,
            format: None,
            max_cycles: None,
        }
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}

impl crate::common::ConfigBuilder for BuildGraphOptionsBuilder {
    type Config = BuildGraphOptions;

    fn build(self) -> Result<Self::Config, DepLensError> {
        Ok(BuildGraphOptions {
            settings: self.settings.ok_or_else(|| DepLensError::ConfigurationError {
                message: "Missing required field: settings".to_string(),
            })?,
            format: self.format.ok_or_else(|| DepLensError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            max_cycles: self.max_cycles,
        })
    }
}
