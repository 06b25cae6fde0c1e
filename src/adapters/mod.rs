//! Adapters - Implementations of port interfaces and file boundaries.
//!
//! Adapters connect the AHP core to the outside world:
//! - `parsing` - Free-form label and number text
//! - `problem` - JSON/YAML problem files and criteria weight handoffs
//! - `export` - `ReportWriter` implementations (JSON, YAML)

pub mod export;
pub mod parsing;
pub mod problem;

pub use export::{writer_for, JsonReportWriter, YamlReportWriter};
pub use problem::{
    load_handoff, load_ranking_problem, load_weighing_problem, save_handoff, ProblemFileError,
};
