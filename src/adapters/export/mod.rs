//! Export adapters - `ReportWriter` implementations.
//!
//! - `JsonReportWriter` - Pretty-printed JSON
//! - `YamlReportWriter` - YAML
//!
//! Both render the same rounded report views.

mod json_writer;
mod report_view;
mod yaml_writer;

pub use json_writer::JsonReportWriter;
pub use report_view::{
    ConsistencyRow, ConsistencyView, CriteriaWeightsView, CriterionView, MatrixView,
    NormalizedView, RankingReport, RankingRow, Rounding, WeightView, WeightingReport,
    DEFAULT_PRECISION, MAX_PRECISION,
};
pub use yaml_writer::YamlReportWriter;

use crate::ports::{ReportFormat, ReportWriter};

/// Returns the writer for a report format.
pub fn writer_for(format: ReportFormat, precision: u32) -> Box<dyn ReportWriter> {
    match format {
        ReportFormat::Json => Box::new(JsonReportWriter::new(precision)),
        ReportFormat::Yaml => Box::new(YamlReportWriter::new(precision)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_for_matches_format() {
        assert_eq!(writer_for(ReportFormat::Json, 4).format(), ReportFormat::Json);
        assert_eq!(writer_for(ReportFormat::Yaml, 4).format(), ReportFormat::Yaml);
    }
}
