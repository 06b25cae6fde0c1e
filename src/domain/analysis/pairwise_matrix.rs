//! Pairwise Comparison Matrix - Reciprocal judgment matrix over an ordered label set.

use serde::Serialize;

use crate::domain::foundation::{validate_label_set, AhpError, InputProblem, Label};

/// Decimal places kept when deriving a reciprocal entry.
pub const RECIPROCAL_DECIMALS: i32 = 3;

/// Rounds half away from zero to `decimals` places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// An n×n matrix of judgments, where entry (i, j) says how strongly
/// `labels[i]` is preferred over `labels[j]`.
///
/// Always reciprocity-enforced: the diagonal is 1 and
/// `entry[j][i] = round(1 / entry[i][j], 3)` for every off-diagonal pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparisonMatrix {
    labels: Vec<Label>,
    entries: Vec<Vec<f64>>,
}

impl PairwiseComparisonMatrix {
    /// Builds an enforced matrix from a raw grid.
    ///
    /// Diagonal entries are replaced by 1 whatever was supplied. Zero
    /// off-diagonal entries mean "no judgment":
    /// - upper entry non-zero: the lower entry becomes its rounded reciprocal
    /// - upper entry zero, lower non-zero: the upper entry is filled from the lower
    /// - both zero: the pair has no judgment and construction fails
    ///
    /// # Errors
    /// - Fewer than 2 labels, or duplicate labels
    /// - Grid is not `labels.len()` square
    /// - An off-diagonal entry is negative or not finite
    /// - A pair has no judgment in either triangle
    pub fn new(labels: Vec<Label>, raw: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        validate_label_set(&labels)?;
        check_shape(labels.len(), &raw)?;

        let mut matrix = Self {
            labels,
            entries: raw,
        };
        matrix.reset_diagonal();
        matrix.enforce_reciprocity()?;
        Ok(matrix)
    }

    /// Creates a builder for entering judgments by label.
    pub fn builder(labels: Vec<Label>) -> PairwiseMatrixBuilder {
        PairwiseMatrixBuilder::new(labels)
    }

    /// Wraps entries without validation or enforcement.
    #[cfg(test)]
    pub(crate) fn from_entries_unchecked(labels: Vec<Label>, entries: Vec<Vec<f64>>) -> Self {
        Self { labels, entries }
    }

    fn reset_diagonal(&mut self) {
        for (i, row) in self.entries.iter_mut().enumerate() {
            row[i] = 1.0;
        }
    }

    fn enforce_reciprocity(&mut self) -> Result<(), AhpError> {
        let n = self.size();

        for i in 0..n {
            for j in (i + 1)..n {
                let upper = self.entries[i][j];
                let lower = self.entries[j][i];

                if upper != 0.0 {
                    self.entries[j][i] = round_to(1.0 / upper, RECIPROCAL_DECIMALS);
                } else if lower != 0.0 {
                    self.entries[i][j] = round_to(1.0 / lower, RECIPROCAL_DECIMALS);
                } else {
                    return Err(AhpError::input(InputProblem::MissingJudgment {
                        row: i,
                        column: j,
                    }));
                }
            }
        }

        Ok(())
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn entries(&self) -> &[Vec<f64>] {
        &self.entries
    }

    /// Returns the matrix order n.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.entries[row][column]
    }

    /// Sums each column.
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.size())
            .map(|j| self.entries.iter().map(|row| row[j]).sum())
            .collect()
    }
}

fn check_shape(n: usize, raw: &[Vec<f64>]) -> Result<(), AhpError> {
    if raw.len() != n {
        return Err(AhpError::input(InputProblem::RowCount {
            expected: n,
            actual: raw.len(),
        }));
    }

    for (row, values) in raw.iter().enumerate() {
        if values.len() != n {
            return Err(AhpError::input(InputProblem::RowLength {
                row,
                expected: n,
                actual: values.len(),
            }));
        }

        for (column, &value) in values.iter().enumerate() {
            if row != column && (!value.is_finite() || value < 0.0) {
                return Err(AhpError::input(InputProblem::InvalidEntry {
                    row,
                    column,
                    value,
                }));
            }
        }
    }

    Ok(())
}

/// Builder that collects judgments by label before enforcing reciprocity.
#[derive(Debug)]
pub struct PairwiseMatrixBuilder {
    labels: Vec<Label>,
    entries: Vec<Vec<f64>>,
    unknown: Option<String>,
}

impl PairwiseMatrixBuilder {
    /// Creates a builder with no judgments entered.
    pub fn new(labels: Vec<Label>) -> Self {
        let n = labels.len();
        Self {
            labels,
            entries: vec![vec![0.0; n]; n],
            unknown: None,
        }
    }

    /// Records how strongly `preferred` dominates `other`.
    pub fn judge(mut self, preferred: &str, other: &str, intensity: f64) -> Self {
        match (self.index_of(preferred), self.index_of(other)) {
            (Some(i), Some(j)) => self.entries[i][j] = intensity,
            (None, _) => {
                self.unknown.get_or_insert_with(|| preferred.to_string());
            }
            (_, None) => {
                self.unknown.get_or_insert_with(|| other.to_string());
            }
        }
        self
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l.as_str() == label)
    }

    /// Builds the enforced matrix.
    pub fn build(self) -> Result<PairwiseComparisonMatrix, AhpError> {
        if let Some(label) = self.unknown {
            return Err(AhpError::input(InputProblem::LabelMismatch {
                expected: self
                    .labels
                    .iter()
                    .map(Label::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
                actual: label,
            }));
        }
        PairwiseComparisonMatrix::new(self.labels, self.entries)
    }
}
