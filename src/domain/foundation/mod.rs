//! Foundation module - Shared domain primitives.
//!
//! Contains the label value object and the error vocabulary shared by
//! every AHP computation.

mod errors;
mod label;

pub use errors::{AhpError, Degeneracy, ErrorCode, InputProblem, Scope};
pub use label::{validate_label_set, Label, MIN_LABELS};
