//! Weight Deriver - Priority weights from a pairwise comparison matrix.

use serde::Serialize;

use super::{PairwiseComparisonMatrix, PriorityVector};
use crate::domain::foundation::{AhpError, Degeneracy, Label};

/// A comparison matrix with every column scaled to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatrix {
    labels: Vec<Label>,
    column_sums: Vec<f64>,
    entries: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Column sums of the source matrix.
    pub fn column_sums(&self) -> &[f64] {
        &self.column_sums
    }

    pub fn entries(&self) -> &[Vec<f64>] {
        &self.entries
    }
}

/// Derives priority vectors using the mean of normalized columns, an
/// approximation of the principal eigenvector that holds well for the
/// small matrices pairwise judgments produce.
pub struct WeightDeriver;

impl WeightDeriver {
    /// Derives the priority vector for a matrix.
    ///
    /// # Algorithm
    /// 1. colSum[j] = Σ_i entry[i][j]
    /// 2. normalized[i][j] = entry[i][j] / colSum[j]
    /// 3. raw[i] = mean_j(normalized[i][j])
    /// 4. weight[i] = raw[i] / Σ raw
    ///
    /// # Errors
    /// `DegenerateMatrix` if a column sums to zero or a sum or weight is not
    /// finite. NaN or infinite weights are never returned.
    pub fn derive(matrix: &PairwiseComparisonMatrix) -> Result<PriorityVector, AhpError> {
        let normalized = Self::normalize(matrix)?;
        Self::weights(&normalized)
    }

    /// Scales each column of the matrix by its sum.
    pub fn normalize(matrix: &PairwiseComparisonMatrix) -> Result<NormalizedMatrix, AhpError> {
        let column_sums = matrix.column_sums();

        for (column, &sum) in column_sums.iter().enumerate() {
            if !sum.is_finite() {
                return Err(AhpError::degenerate(Degeneracy::NonFiniteColumnSum { column }));
            }
            if sum == 0.0 {
                return Err(AhpError::degenerate(Degeneracy::ZeroColumnSum { column }));
            }
        }

        let entries = matrix
            .entries()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .collect()
            })
            .collect();

        Ok(NormalizedMatrix {
            labels: matrix.labels().to_vec(),
            column_sums,
            entries,
        })
    }

    /// Averages each row of a normalized matrix and re-normalizes the result.
    pub fn weights(normalized: &NormalizedMatrix) -> Result<PriorityVector, AhpError> {
        let raw: Vec<f64> = normalized
            .entries
            .iter()
            .map(|row| row.iter().sum::<f64>() / row.len() as f64)
            .collect();

        let total: f64 = raw.iter().sum();
        let weights: Vec<f64> = raw.iter().map(|w| w / total).collect();

        if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
            return Err(AhpError::degenerate(Degeneracy::NonFiniteWeight { index }));
        }

        Ok(PriorityVector::from_derived(
            normalized.labels.clone(),
            weights,
        ))
    }
}
