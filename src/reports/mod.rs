//! Report generation modules for different output formats
//!
//! This module contains report generators for the results of a graph build
//! and of a reverse-dependency query:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::DepLensError;
use crate::graph::BuildOutcome;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Summarize a graph build: sizes, cycles and lookup advisories
    fn generate_report(&self, outcome: &BuildOutcome) -> Result<String, DepLensError>;

    /// List the packages that depend on `target`
    fn generate_reverse_report(
        &self,
        target: &str,
        dependents: &[&str],
    ) -> Result<String, DepLensError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
