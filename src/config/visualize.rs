//! Visualize command configuration

use std::path::PathBuf;

use crate::config::AppSettings;
use crate::error::DepLensError;
use crate::graph::DiagramFormat;

#[derive(Debug, Clone)]
pub struct VisualizeOptions {
    pub settings: AppSettings,
    pub format: DiagramFormat,
    pub output: PathBuf,
    pub highlight_cycles: bool,
}

impl VisualizeOptions {
    pub fn builder() -> VisualizeOptionsBuilder {
        VisualizeOptionsBuilder::new()
    }

    /// `<package>.<extension>` in the working directory
    pub fn default_output(package: &str, format: DiagramFormat) -> PathBuf {
        PathBuf::from(format!("{package}.{}", format.extension()))
    }
}

#[derive(Default)]
pub struct VisualizeOptionsBuilder {
    settings: Option<AppSettings>,
    format: Option<DiagramFormat>,
    output: Option<PathBuf>,
    highlight_cycles: Option<bool>,
}

impl VisualizeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_format(mut self, format: DiagramFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for VisualizeOptionsBuilder {
    type Config = VisualizeOptions;

    fn build(self) -> Result<Self::Config, DepLensError> {
        let settings = self.settings.ok_or_else(|| DepLensError::ConfigurationError {
            message: "Missing required field: settings".to_string(),
        })?;
        let format = self.format.ok_or_else(|| DepLensError::ConfigurationError {
            message: "Missing required field: format".to_string(),
        })?;
        let output = self
            .output
            .unwrap_or_else(|| VisualizeOptions::default_output(&settings.package_name, format));

        Ok(VisualizeOptions {
            settings,
            format,
            output,
            highlight_cycles: self.highlight_cycles.unwrap_or(true),
        })
    }
}
