//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::Label;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InputError,
    DegenerateMatrix,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InputError => "INPUT_ERROR",
            ErrorCode::DegenerateMatrix => "DEGENERATE_MATRIX",
        };
        write!(f, "{}", s)
    }
}

/// The part of a computation pass an error belongs to.
///
/// Core operations raise unscoped errors; the application handlers attach
/// a scope so callers can tell which matrix or criterion failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    Unscoped,
    CriteriaLabels,
    AlternativeLabels,
    CriteriaMatrix,
    CriteriaWeights,
    AlternativesMatrix { criterion: Label },
    Aggregation,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Unscoped => write!(f, "unscoped"),
            Scope::CriteriaLabels => write!(f, "criteria labels"),
            Scope::AlternativeLabels => write!(f, "alternative labels"),
            Scope::CriteriaMatrix => write!(f, "criteria comparison matrix"),
            Scope::CriteriaWeights => write!(f, "criteria weights"),
            Scope::AlternativesMatrix { criterion } => {
                write!(f, "alternatives comparison matrix for criterion '{}'", criterion)
            }
            Scope::Aggregation => write!(f, "hierarchy aggregation"),
        }
    }
}

/// What was wrong with caller-supplied input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputProblem {
    #[error("at least {min} labels are required, got {actual}")]
    TooFewLabels { min: usize, actual: usize },

    #[error("label cannot be empty")]
    EmptyLabel,

    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),

    #[error("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} entries, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("entry ({row}, {column}) must be a finite non-negative number, got {value}")]
    InvalidEntry { row: usize, column: usize, value: f64 },

    #[error("no judgment for pair ({row}, {column}): both entries are zero")]
    MissingJudgment { row: usize, column: usize },

    #[error("expected {expected} weights, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    #[error("weight {index} must be a finite non-negative number, got {value}")]
    InvalidWeight { index: usize, value: f64 },

    #[error("weights sum to zero")]
    ZeroWeightSum,

    #[error("weights sum to {sum}, expected 1")]
    UnnormalizedWeights { sum: f64 },

    #[error("labels do not match: expected [{expected}], got [{actual}]")]
    LabelMismatch { expected: String, actual: String },

    #[error("no comparisons supplied for criterion '{0}'")]
    MissingComparisons(String),

    #[error("comparisons supplied for unknown criterion '{0}'")]
    UnexpectedComparisons(String),

    #[error("malformed number '{0}'")]
    MalformedNumber(String),
}

impl InputProblem {
    /// Builds a label mismatch from two label sequences.
    pub fn label_mismatch(expected: &[Label], actual: &[Label]) -> Self {
        InputProblem::LabelMismatch {
            expected: join_labels(expected),
            actual: join_labels(actual),
        }
    }
}

fn join_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a matrix cannot yield usable weights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Degeneracy {
    #[error("column {column} sums to zero")]
    ZeroColumnSum { column: usize },

    #[error("column {column} sum is not finite")]
    NonFiniteColumnSum { column: usize },

    #[error("weight {index} is zero")]
    ZeroWeight { index: usize },

    #[error("weight {index} is not finite")]
    NonFiniteWeight { index: usize },
}

/// Errors that abort an AHP computation stage.
///
/// Inconsistent judgments are not errors; they are reported through
/// `ConsistencyReport::is_consistent`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Invalid input ({scope}): {problem}")]
    Input { scope: Scope, problem: InputProblem },

    #[error("Degenerate matrix ({scope}): {problem}")]
    DegenerateMatrix { scope: Scope, problem: Degeneracy },
}

impl AhpError {
    /// Creates an unscoped input error.
    pub fn input(problem: InputProblem) -> Self {
        AhpError::Input {
            scope: Scope::Unscoped,
            problem,
        }
    }

    /// Creates an unscoped degenerate matrix error.
    pub fn degenerate(problem: Degeneracy) -> Self {
        AhpError::DegenerateMatrix {
            scope: Scope::Unscoped,
            problem,
        }
    }

    /// Attaches a scope unless one is already set.
    pub fn within(self, scope: Scope) -> Self {
        match self {
            AhpError::Input {
                scope: Scope::Unscoped,
                problem,
            } => AhpError::Input { scope, problem },
            AhpError::DegenerateMatrix {
                scope: Scope::Unscoped,
                problem,
            } => AhpError::DegenerateMatrix { scope, problem },
            scoped => scoped,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::Input { .. } => ErrorCode::InputError,
            AhpError::DegenerateMatrix { .. } => ErrorCode::DegenerateMatrix,
        }
    }

    pub fn scope(&self) -> &Scope {
        match self {
            AhpError::Input { scope, .. } | AhpError::DegenerateMatrix { scope, .. } => scope,
        }
    }
}
