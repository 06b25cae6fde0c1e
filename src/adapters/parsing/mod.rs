//! Parsing Adapters - Free-form text to validated core inputs.

mod text_parser;

pub use text_parser::{parse_labels, parse_number, parse_weights, SEPARATOR};
