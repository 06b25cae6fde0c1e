//! JSON report writer.

use std::io::Write;

use super::report_view::{RankingReport, Rounding, WeightingReport};
use crate::application::{RankAlternativesResult, WeighCriteriaResult};
use crate::ports::{ExportError, ReportFormat, ReportWriter};

/// Writes reports as pretty-printed JSON, one document per call.
///
/// # Example
///
/// ```rust,ignore
/// let writer = JsonReportWriter::new(4);
/// writer.write_weighting(&result, &mut std::io::stdout().lock())?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportWriter {
    rounding: Rounding,
}

impl JsonReportWriter {
    pub fn new(precision: u32) -> Self {
        Self {
            rounding: Rounding::new(precision),
        }
    }

    fn write_value<T: serde::Serialize>(
        &self,
        value: &T,
        out: &mut dyn Write,
    ) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *out, value).map_err(ExportError::serialization)?;
        writeln!(out)?;
        Ok(())
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_weighting(
        &self,
        result: &WeighCriteriaResult,
        out: &mut dyn Write,
    ) -> Result<(), ExportError> {
        self.write_value(&WeightingReport::build(result, self.rounding), out)
    }

    fn write_ranking(
        &self,
        result: &RankAlternativesResult,
        out: &mut dyn Write,
    ) -> Result<(), ExportError> {
        self.write_value(&RankingReport::build(result, self.rounding), out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
