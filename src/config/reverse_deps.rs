//! Reverse-deps command configuration

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::DepLensError;

#[derive(Debug, Clone)]
pub struct ReverseDepsOptions {
    pub settings: AppSettings,
    /// Package whose dependents are listed
    pub target: String,
    pub format: OutputFormat,
}

impl ReverseDepsOptions {
    pub fn builder() -> ReverseDepsOptionsBuilder {
        ReverseDepsOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct ReverseDepsOptionsBuilder {
    settings: Option<AppSettings>,
    target: Option<String>,
    format: Option<OutputFormat>,
}

impl ReverseDepsOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for ReverseDepsOptionsBuilder {
    type Config = ReverseDepsOptions;

    fn build(self) -> Result<Self::Config, DepLensError> {
        let target = self.target.ok_or_else(|| DepLensError::ConfigurationError {
            message: "Missing required field: target".to_string(),
        })?;

        if target.trim().is_empty() {
            return Err(DepLensError::ConfigurationError {
                message: "Target package cannot be empty".to_string(),
            });
        }

        Ok(ReverseDepsOptions {
            settings: self.settings.ok_or_else(|| DepLensError::ConfigurationError {
                message: "Missing required field: settings".to_string(),
            })?,
            target: target.trim().to_string(),
            format: self.format.ok_or_else(|| DepLensError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
        })
    }
}
