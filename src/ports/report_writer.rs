//! Report Writer Port - Rendering interface for computation results.
//!
//! This port defines the contract for turning the result of a weighting or
//! ranking pass into a serialized report. The core depends on no particular
//! format; adapters (like `JsonReportWriter`) provide the implementation.

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::application::{RankAlternativesResult, WeighCriteriaResult};

/// Port for rendering pass results.
///
/// # Contract
///
/// Implementations must:
/// - Write one complete document per call
/// - Include every matrix, weight vector and consistency measure of the result
/// - Leave the result itself untouched (rounding is presentation only)
///
/// # Usage
///
/// ```rust,ignore
/// let writer: &dyn ReportWriter = get_writer();
/// let mut out = std::io::stdout().lock();
///
/// writer.write_weighting(&weighting_result, &mut out)?;
/// writer.write_ranking(&ranking_result, &mut out)?;
/// ```
pub trait ReportWriter {
    /// Render a criteria weighting result.
    fn write_weighting(
        &self,
        result: &WeighCriteriaResult,
        out: &mut dyn Write,
    ) -> Result<(), ExportError>;

    /// Render an alternative ranking result.
    fn write_ranking(
        &self,
        result: &RankAlternativesResult,
        out: &mut dyn Write,
    ) -> Result<(), ExportError>;

    /// The format this writer produces.
    fn format(&self) -> ReportFormat;
}

/// Report formats supported by the writers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML document.
    Yaml,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Yaml => "application/yaml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Unsupported report format requested.
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// The report could not be serialized.
    #[error("Report serialization failed: {0}")]
    SerializationFailed(String),

    /// Writing to the output failed.
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a serialization error.
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        Self::SerializationFailed(reason.to_string())
    }
}
