//! Hierarchy Aggregator - Final alternative scores from criteria and per-criterion weights.

use serde::Serialize;
use std::cmp::Ordering;

use super::{
    ConsistencyEvaluator, ConsistencyReport, PairwiseComparisonMatrix, PriorityVector,
    WeightDeriver,
};
use crate::domain::foundation::{AhpError, InputProblem, Label};

/// The outcome of comparing all alternatives under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionJudgment {
    pub criterion: Label,
    pub matrix: PairwiseComparisonMatrix,
    pub priorities: PriorityVector,
    pub consistency: ConsistencyReport,
}

impl CriterionJudgment {
    /// Derives priorities and consistency for one criterion's matrix.
    pub fn evaluate(criterion: Label, matrix: PairwiseComparisonMatrix) -> Result<Self, AhpError> {
        let priorities = WeightDeriver::derive(&matrix)?;
        let consistency = ConsistencyEvaluator::evaluate(&matrix, &priorities)?;

        Ok(Self {
            criterion,
            matrix,
            priorities,
            consistency,
        })
    }

    pub fn alternatives(&self) -> &[Label] {
        self.priorities.labels()
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub alternative: Label,
    pub score: f64,
}

/// Alternatives ordered by descending final score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregationResult {
    entries: Vec<RankedAlternative>,
}

impl AggregationResult {
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Gets the final score for an alternative.
    pub fn score_of(&self, alternative: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.alternative.as_str() == alternative)
            .map(|e| e.score)
    }

    pub fn total_score(&self) -> f64 {
        self.entries.iter().map(|e| e.score).sum()
    }
}

/// Hierarchy aggregation functions.
pub struct HierarchyAggregator;

impl HierarchyAggregator {
    /// Combines criteria weights with per-criterion alternative priorities.
    ///
    /// # Algorithm
    /// M[alt][crit] = judgments[crit].priorities[alt]; score = M · criteriaWeights.
    /// Results are sorted by descending score; ties keep input order.
    ///
    /// # Errors
    /// `InputError` if the judgments are not one per criterion in criteria
    /// order, or are not all over the same ordered alternatives.
    pub fn aggregate(
        criteria_weights: &PriorityVector,
        judgments: &[CriterionJudgment],
    ) -> Result<AggregationResult, AhpError> {
        let judged: Vec<Label> = judgments.iter().map(|j| j.criterion.clone()).collect();
        if judged.as_slice() != criteria_weights.labels() {
            return Err(AhpError::input(InputProblem::label_mismatch(
                criteria_weights.labels(),
                &judged,
            )));
        }

        // Non-empty: criteria weights always carry at least two labels
        let alternatives = judgments[0].alternatives();
        for judgment in &judgments[1..] {
            if judgment.alternatives() != alternatives {
                return Err(AhpError::input(InputProblem::label_mismatch(
                    alternatives,
                    judgment.alternatives(),
                )));
            }
        }

        let scores = Self::score_matrix(judgments)
            .iter()
            .map(|row| {
                row.iter()
                    .zip(criteria_weights.weights())
                    .map(|(p, w)| p * w)
                    .sum::<f64>()
            })
            .collect::<Vec<_>>();

        let mut ranked: Vec<(Label, f64)> = alternatives.iter().cloned().zip(scores).collect();
        // Stable sort keeps input order for exact ties
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let entries = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (alternative, score))| RankedAlternative {
                rank: i + 1,
                alternative,
                score,
            })
            .collect();

        Ok(AggregationResult { entries })
    }

    /// Builds M[altIndex][criterionIndex] from the per-criterion priorities.
    fn score_matrix(judgments: &[CriterionJudgment]) -> Vec<Vec<f64>> {
        let alternative_count = judgments[0].priorities.len();
        (0..alternative_count)
            .map(|alt| {
                judgments
                    .iter()
                    .map(|j| j.priorities.weights()[alt])
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternatives() -> Vec<Label> {
        Label::many(["Alt 1", "Alt 2", "Alt 3"]).unwrap()
    }

    fn criteria(weights: Vec<f64>) -> PriorityVector {
        let labels = Label::many(["Cost", "Quality"]).unwrap();
        PriorityVector::new(labels, weights).unwrap()
    }

    fn judgment(criterion: &str, raw: Vec<Vec<f64>>) -> CriterionJudgment {
        let matrix = PairwiseComparisonMatrix::new(alternatives(), raw).unwrap();
        CriterionJudgment::evaluate(Label::new(criterion).unwrap(), matrix).unwrap()
    }

    fn cost_judgment() -> CriterionJudgment {
        // Alt 1 is cheapest
        judgment(
            "Cost",
            vec![
                vec![1.0, 3.0, 5.0],
                vec![0.0, 1.0, 2.0],
                vec![0.0, 0.0, 1.0],
            ],
        )
    }

    fn quality_judgment() -> CriterionJudgment {
        // Alt 3 has the best quality
        judgment(
            "Quality",
            vec![
                vec![1.0, 0.5, 0.2],
                vec![0.0, 1.0, 0.25],
                vec![0.0, 0.0, 1.0],
            ],
        )
    }

    #[test]
    fn criterion_judgment_carries_weights_and_report() {
        let j = cost_judgment();
        assert_eq!(j.criterion.as_str(), "Cost");
        assert_eq!(j.consistency.n, 3);
        assert!((j.priorities.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_is_matrix_vector_product() {
        let cost = cost_judgment();
        let quality = quality_judgment();
        let weights = criteria(vec![0.7, 0.3]);

        let result = HierarchyAggregator::aggregate(&weights, &[cost.clone(), quality.clone()])
            .unwrap();

        for (i, alt) in alternatives().iter().enumerate() {
            let expected =
                0.7 * cost.priorities.weights()[i] + 0.3 * quality.priorities.weights()[i];
            let actual = result.score_of(alt.as_str()).unwrap();
            assert!((actual - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn aggregate_sums_to_one() {
        let weights = criteria(vec![0.4, 0.6]);
        let result =
            HierarchyAggregator::aggregate(&weights, &[cost_judgment(), quality_judgment()])
                .unwrap();
        assert!((result.total_score() - 1.0).abs() < 1e-9);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn aggregate_sorts_descending_with_ranks() {
        let weights = criteria(vec![0.9, 0.1]);
        let result =
            HierarchyAggregator::aggregate(&weights, &[cost_judgment(), quality_judgment()])
                .unwrap();

        let best = result.best().unwrap();
        assert_eq!(best.alternative.as_str(), "Alt 1");
        assert_eq!(best.rank, 1);

        for pair in result.entries().windows(2) {
            assert!(pair[0].score >= pair[1].score);
            assert_eq!(pair[1].rank, pair[0].rank + 1);
        }
    }

    #[test]
    fn aggregate_ties_keep_input_order() {
        let flat = vec![vec![1.0; 3]; 3];
        let weights = criteria(vec![0.5, 0.5]);
        let result = HierarchyAggregator::aggregate(
            &weights,
            &[judgment("Cost", flat.clone()), judgment("Quality", flat)],
        )
        .unwrap();

        let order: Vec<_> = result
            .entries()
            .iter()
            .map(|e| e.alternative.as_str())
            .collect();
        assert_eq!(order, vec!["Alt 1", "Alt 2", "Alt 3"]);
    }

    #[test]
    fn aggregate_rejects_missing_criterion() {
        let weights = criteria(vec![0.5, 0.5]);
        let err = HierarchyAggregator::aggregate(&weights, &[cost_judgment()]).unwrap_err();
        assert!(matches!(
            err,
            AhpError::Input {
                problem: InputProblem::LabelMismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn aggregate_rejects_criteria_out_of_order() {
        let weights = criteria(vec![0.5, 0.5]);
        let err = HierarchyAggregator::aggregate(&weights, &[quality_judgment(), cost_judgment()])
            .unwrap_err();
        assert!(matches!(err, AhpError::Input { .. }));
    }

    #[test]
    fn aggregate_rejects_mismatched_alternatives() {
        let other = PairwiseComparisonMatrix::new(
            Label::many(["Alt 1", "Alt 2", "Alt 4"]).unwrap(),
            vec![vec![1.0; 3]; 3],
        )
        .unwrap();
        let quality = CriterionJudgment::evaluate(Label::new("Quality").unwrap(), other).unwrap();
        let weights = criteria(vec![0.5, 0.5]);

        let err = HierarchyAggregator::aggregate(&weights, &[cost_judgment(), quality]).unwrap_err();
        assert!(matches!(err, AhpError::Input { .. }));
    }

    #[test]
    fn aggregation_result_serializes_as_list() {
        let weights = criteria(vec![0.5, 0.5]);
        let result =
            HierarchyAggregator::aggregate(&weights, &[cost_judgment(), quality_judgment()])
                .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["rank"], 1);
    }
}
