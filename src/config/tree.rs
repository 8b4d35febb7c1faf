//! Configuration shared by the ascii-tree and render commands

use crate::config::{AppSettings, OutputMode};
use crate::error::DepLensError;

#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub settings: AppSettings,
    /// Presentation to use; `render` takes it from the settings
    pub mode: OutputMode,
}

impl TreeOptions {
    pub fn builder() -> TreeOptionsBuilder {
        TreeOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct TreeOptionsBuilder {
    settings: Option<AppSettings>,
    mode: Option<OutputMode>,
}

impl TreeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl crate::common::ConfigBuilder for TreeOptionsBuilder {
    type Config = TreeOptions;

    fn build(self) -> Result<Self::Config, DepLensError> {
        let settings = self.settings.ok_or_else(|| DepLensError::ConfigurationError {
            message: "Missing required field: settings".to_string(),
        })?;
        let mode = self.mode.unwrap_or(settings.output_mode);

        Ok(TreeOptions { settings, mode })
    }
}
