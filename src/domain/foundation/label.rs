//! Label value object for criteria and alternatives.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{AhpError, InputProblem};

/// Minimum number of labels in a criteria or alternative set.
pub const MIN_LABELS: usize = 2;

/// A non-empty, trimmed identifier for a criterion or alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Creates a label, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, AhpError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AhpError::input(InputProblem::EmptyLabel));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates an ordered label set, validating size and uniqueness.
    pub fn many<I, S>(values: I) -> Result<Vec<Self>, AhpError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = values
            .into_iter()
            .map(Self::new)
            .collect::<Result<Vec<_>, _>>()?;
        validate_label_set(&labels)?;
        Ok(labels)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks that an ordered label set has at least two unique entries.
pub fn validate_label_set(labels: &[Label]) -> Result<(), AhpError> {
    if labels.len() < MIN_LABELS {
        return Err(AhpError::input(InputProblem::TooFewLabels {
            min: MIN_LABELS,
            actual: labels.len(),
        }));
    }

    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(AhpError::input(InputProblem::DuplicateLabel(
                label.0.clone(),
            )));
        }
    }

    Ok(())
}

impl TryFrom<String> for Label {
    type Error = AhpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
