//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the AHP core and the outside world. Adapters implement these ports.
//!
//! - `ReportWriter` - Renders weighting and ranking results for export

mod report_writer;

pub use report_writer::{ExportError, ReportFormat, ReportWriter};
