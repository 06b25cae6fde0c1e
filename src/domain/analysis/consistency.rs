//! Consistency Evaluator - λ_max, CI and CR for a matrix and its weights.

use serde::{Deserialize, Serialize};

use super::{PairwiseComparisonMatrix, PriorityVector};
use crate::domain::foundation::{AhpError, Degeneracy, InputProblem};

/// Judgments are conventionally acceptable when CR is below this value.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Random Index for matrix orders 1 through 10.
pub const RANDOM_INDEX: [f64; 10] = [0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Looks up the Random Index for a matrix of order `n`.
///
/// Orders above 10 reuse the n = 10 value.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        1..=10 => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
    }
}

/// Whether a set of judgments passes the consistency threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyVerdict {
    Consistent,
    Inconsistent,
}

impl ConsistencyVerdict {
    /// Returns the display label for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            ConsistencyVerdict::Consistent => "Consistent (CR < 0.1)",
            ConsistencyVerdict::Inconsistent => "Inconsistent (CR >= 0.1)",
        }
    }
}

/// Consistency measures for one matrix/weight pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub n: usize,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub random_index: f64,
    /// Advisory only; an inconsistent report still accompanies usable weights.
    pub is_consistent: bool,
}

impl ConsistencyReport {
    pub fn verdict(&self) -> ConsistencyVerdict {
        if self.is_consistent {
            ConsistencyVerdict::Consistent
        } else {
            ConsistencyVerdict::Inconsistent
        }
    }
}

/// Consistency evaluation functions.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Evaluates how consistent the judgments in `matrix` are with `priorities`.
    ///
    /// # Algorithm
    /// 1. ratio[i] = Σ_j matrix[i][j] · (weight[j] / weight[i]),
    ///    i.e. (A·w)[i] / w[i]
    /// 2. λ_max = mean(ratio)
    /// 3. CI = (λ_max − n) / (n − 1)
    /// 4. CR = CI / RI(n), or 0 when RI is 0
    ///
    /// # Errors
    /// - `InputError` if the priorities are over different labels
    /// - `DegenerateMatrix` if any weight is zero
    pub fn evaluate(
        matrix: &PairwiseComparisonMatrix,
        priorities: &PriorityVector,
    ) -> Result<ConsistencyReport, AhpError> {
        if priorities.labels() != matrix.labels() {
            return Err(AhpError::input(InputProblem::label_mismatch(
                matrix.labels(),
                priorities.labels(),
            )));
        }

        let weights = priorities.weights();
        let n = matrix.size();

        let mut ratio_total = 0.0;
        for (index, (row, &weight)) in matrix.entries().iter().zip(weights).enumerate() {
            if weight == 0.0 {
                return Err(AhpError::degenerate(Degeneracy::ZeroWeight { index }));
            }

            // Dividing per term keeps uniform weights exact.
            let ratio: f64 = row.iter().zip(weights).map(|(a, w)| a * (w / weight)).sum();
            ratio_total += ratio;
        }

        let lambda_max = ratio_total / n as f64;
        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let ri = random_index(n);
        let consistency_ratio = if ri == 0.0 {
            0.0
        } else {
            consistency_index / ri
        };

        Ok(ConsistencyReport {
            n,
            lambda_max,
            consistency_index,
            consistency_ratio,
            random_index: ri,
            is_consistent: consistency_ratio < CONSISTENCY_THRESHOLD,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::WeightDeriver;
    use crate::domain::foundation::Label;

    fn labels(n: usize) -> Vec<Label> {
        Label::many((0..n).map(|i| format!("L{i}"))).unwrap()
    }

    fn evaluate(matrix: &PairwiseComparisonMatrix) -> ConsistencyReport {
        let weights = WeightDeriver::derive(matrix).unwrap();
        ConsistencyEvaluator::evaluate(matrix, &weights).unwrap()
    }

    #[test]
    fn random_index_table() {
        assert_eq!(random_index(1), 0.0);
        assert_eq!(random_index(2), 0.0);
        assert_eq!(random_index(3), 0.58);
        assert_eq!(random_index(10), 1.49);
    }

    #[test]
    fn random_index_clamps_above_ten() {
        assert_eq!(random_index(11), 1.49);
        assert_eq!(random_index(25), 1.49);
    }

    #[test]
    fn identity_matrix_is_perfectly_consistent() {
        for n in 2..=12 {
            let m = PairwiseComparisonMatrix::new(labels(n), vec![vec![1.0; n]; n]).unwrap();
            let report = evaluate(&m);

            assert_eq!(report.n, n);
            assert_eq!(report.lambda_max, n as f64);
            assert_eq!(report.consistency_index, 0.0);
            assert_eq!(report.consistency_ratio, 0.0);
            assert!(report.consistency_ratio.is_sign_positive());
            assert!(report.is_consistent);
        }
    }

    #[test]
    fn large_all_ones_matrix_has_no_rounding_noise() {
        for n in [6, 10, 25, 40] {
            let m = PairwiseComparisonMatrix::new(labels(n), vec![vec![1.0; n]; n]).unwrap();
            let report = evaluate(&m);

            assert_eq!(report.lambda_max, n as f64);
            assert_eq!(report.consistency_ratio, 0.0);
        }
    }

    #[test]
    fn textbook_matrix_is_consistent() {
        let m = PairwiseComparisonMatrix::new(
            Label::many(["A", "B", "C"]).unwrap(),
            vec![
                vec![1.0, 3.0, 5.0],
                vec![1.0 / 3.0, 1.0, 2.0],
                vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
            ],
        )
        .unwrap();
        let report = evaluate(&m);

        assert!(report.lambda_max > 3.0);
        assert!(report.consistency_ratio < CONSISTENCY_THRESHOLD);
        assert_eq!(report.random_index, 0.58);
        assert_eq!(report.verdict(), ConsistencyVerdict::Consistent);
    }

    #[test]
    fn contradictory_judgments_are_flagged_not_rejected() {
        // A > B, B > C, but C > A strongly
        let m = PairwiseComparisonMatrix::new(
            Label::many(["A", "B", "C"]).unwrap(),
            vec![
                vec![1.0, 5.0, 1.0 / 7.0],
                vec![0.0, 1.0, 5.0],
                vec![0.0, 0.0, 1.0],
            ],
        )
        .unwrap();
        let report = evaluate(&m);

        assert!(report.consistency_ratio >= CONSISTENCY_THRESHOLD);
        assert!(!report.is_consistent);
        assert_eq!(report.verdict(), ConsistencyVerdict::Inconsistent);
    }

    #[test]
    fn two_by_two_has_zero_ratio() {
        let m = PairwiseComparisonMatrix::new(labels(2), vec![vec![1.0, 9.0], vec![0.0, 1.0]])
            .unwrap();
        let report = evaluate(&m);
        assert_eq!(report.random_index, 0.0);
        assert_eq!(report.consistency_ratio, 0.0);
        assert!(report.is_consistent);
    }

    #[test]
    fn zero_weight_is_degenerate() {
        let m = PairwiseComparisonMatrix::new(labels(2), vec![vec![1.0, 2.0], vec![0.0, 1.0]])
            .unwrap();
        let priorities = PriorityVector::new(labels(2), vec![1.0, 0.0]).unwrap();
        let err = ConsistencyEvaluator::evaluate(&m, &priorities).unwrap_err();
        assert_eq!(err, AhpError::degenerate(Degeneracy::ZeroWeight { index: 1 }));
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let m = PairwiseComparisonMatrix::new(labels(2), vec![vec![1.0, 2.0], vec![0.0, 1.0]])
            .unwrap();
        let other = Label::many(["X", "Y"]).unwrap();
        let priorities = PriorityVector::new(other, vec![0.5, 0.5]).unwrap();
        let err = ConsistencyEvaluator::evaluate(&m, &priorities).unwrap_err();
        assert_eq!(err.code(), crate::domain::foundation::ErrorCode::InputError);
    }
}
