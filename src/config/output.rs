//! Report output configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::export::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::ports::ReportFormat;

/// Report output configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format when `--format` is not given
    #[serde(default)]
    pub format: ReportFormat,

    /// Decimal places shown in reports
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge {
                max: MAX_PRECISION,
                actual: self.precision,
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}
