//! YAML report writer.

use std::io::Write;

use super::report_view::{RankingReport, Rounding, WeightingReport};
use crate::application::{RankAlternativesResult, WeighCriteriaResult};
use crate::ports::{ExportError, ReportFormat, ReportWriter};

/// Writes reports as YAML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReportWriter {
    rounding: Rounding,
}

impl YamlReportWriter {
    pub fn new(precision: u32) -> Self {
        Self {
            rounding: Rounding::new(precision),
        }
    }
}

impl ReportWriter for YamlReportWriter {
    fn write_weighting(
        &self,
        result: &WeighCriteriaResult,
        out: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let report = WeightingReport::build(result, self.rounding);
        serde_yaml::to_writer(out, &report).map_err(ExportError::serialization)
    }

    fn write_ranking(
        &self,
        result: &RankAlternativesResult,
        out: &mut dyn Write,
    ) -> Result<(), ExportError> {
        let report = RankingReport::build(result, self.rounding);
        serde_yaml::to_writer(out, &report).map_err(ExportError::serialization)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Yaml
    }
}
