//! Priority Vector - Normalized weights aligned with an ordered label set.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{validate_label_set, AhpError, InputProblem, Label};

/// Allowed drift of a priority vector's sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Non-negative weights summing to 1, index-aligned with `labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PriorityVectorRecord")]
pub struct PriorityVector {
    labels: Vec<Label>,
    weights: Vec<f64>,
}

/// Unvalidated wire shape of a priority vector.
#[derive(Deserialize)]
struct PriorityVectorRecord {
    labels: Vec<Label>,
    weights: Vec<f64>,
}

impl TryFrom<PriorityVectorRecord> for PriorityVector {
    type Error = AhpError;

    fn try_from(record: PriorityVectorRecord) -> Result<Self, Self::Error> {
        Self::new(record.labels, record.weights)
    }
}

impl PriorityVector {
    /// Creates a vector from weights that already sum to 1.
    pub fn new(labels: Vec<Label>, weights: Vec<f64>) -> Result<Self, AhpError> {
        check_weights(&labels, &weights)?;

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AhpError::input(InputProblem::UnnormalizedWeights { sum }));
        }

        Ok(Self { labels, weights })
    }

    /// Creates a vector by re-normalizing arbitrary non-negative weights.
    ///
    /// # Errors
    /// - Length differs from the label count
    /// - A weight is negative or not finite
    /// - All weights are zero
    pub fn normalized(labels: Vec<Label>, weights: Vec<f64>) -> Result<Self, AhpError> {
        check_weights(&labels, &weights)?;

        let mut weights = weights;
        let mut sum: f64 = weights.iter().sum();
        if !sum.is_finite() {
            // Finite weights whose total overflows: rescale by the largest first.
            let largest = weights.iter().copied().fold(0.0, f64::max);
            weights.iter_mut().for_each(|w| *w /= largest);
            sum = weights.iter().sum();
        }
        if sum <= 0.0 {
            return Err(AhpError::input(InputProblem::ZeroWeightSum));
        }

        let weights = weights.into_iter().map(|w| w / sum).collect();
        Ok(Self { labels, weights })
    }

    /// Wraps weights produced by the deriver, which has already normalized
    /// them and checked that they are finite.
    pub(super) fn from_derived(labels: Vec<Label>, weights: Vec<f64>) -> Self {
        Self { labels, weights }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Gets the weight for a label.
    pub fn weight_of(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l.as_str() == label)
            .map(|i| self.weights[i])
    }

    /// Iterates `(label, weight)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, f64)> + '_ {
        self.labels.iter().zip(self.weights.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

fn check_weights(labels: &[Label], weights: &[f64]) -> Result<(), AhpError> {
    validate_label_set(labels)?;

    if weights.len() != labels.len() {
        return Err(AhpError::input(InputProblem::WeightCount {
            expected: labels.len(),
            actual: weights.len(),
        }));
    }

    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(AhpError::input(InputProblem::InvalidWeight { index, value }));
        }
    }

    Ok(())
}
