//! RankAlternativesHandler - Command handler for an alternative ranking pass.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::domain::analysis::{
    AggregationResult, CriteriaWeights, CriterionJudgment, HierarchyAggregator,
    PairwiseComparisonMatrix,
};
use crate::domain::foundation::{validate_label_set, AhpError, InputProblem, Label, Scope};

/// Where the ranking pass gets its criteria weights.
///
/// The caller decides between reusing a previous weighting pass and entering
/// weights by hand; the handler never looks anywhere else.
#[derive(Debug, Clone)]
pub enum CriteriaWeightsSource {
    /// Weights handed over from an earlier pass.
    Previous(CriteriaWeights),
    /// Weights entered directly; re-normalized to sum to 1.
    Manual {
        criteria: Vec<Label>,
        weights: Vec<f64>,
    },
}

impl CriteriaWeightsSource {
    /// Resolves the source into validated criteria weights.
    pub fn resolve(self) -> Result<CriteriaWeights, AhpError> {
        match self {
            CriteriaWeightsSource::Previous(weights) => Ok(weights),
            CriteriaWeightsSource::Manual { criteria, weights } => {
                CriteriaWeights::manual(criteria, weights)
            }
        }
    }
}

/// Raw judgments comparing the alternatives under one criterion.
#[derive(Debug, Clone)]
pub struct AlternativeComparisons {
    pub criterion: Label,
    pub matrix: Vec<Vec<f64>>,
}

/// Command to rank alternatives against weighted criteria.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub alternatives: Vec<Label>,
    pub criteria_weights: CriteriaWeightsSource,
    /// One entry per criterion, in any order.
    pub comparisons: Vec<AlternativeComparisons>,
}

/// Consistency ratio for one criterion's alternative judgments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionConsistency {
    pub criterion: Label,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
}

/// Result of a ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankAlternativesResult {
    pub criteria_weights: CriteriaWeights,
    pub judgments: Vec<CriterionJudgment>,
    pub ranking: AggregationResult,
}

impl RankAlternativesResult {
    /// Returns the consistency ratio of every criterion, in criteria order.
    pub fn consistency_summary(&self) -> Vec<CriterionConsistency> {
        self.judgments
            .iter()
            .map(|j| CriterionConsistency {
                criterion: j.criterion.clone(),
                consistency_ratio: j.consistency.consistency_ratio,
                is_consistent: j.consistency.is_consistent,
            })
            .collect()
    }

    /// Returns the criteria whose alternative judgments are inconsistent.
    pub fn inconsistent_criteria(&self) -> Vec<&Label> {
        self.judgments
            .iter()
            .filter(|j| !j.consistency.is_consistent)
            .map(|j| &j.criterion)
            .collect()
    }
}

/// Handler for ranking alternatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankAlternativesHandler;

impl RankAlternativesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankAlternativesResult, AhpError> {
        // 1. Validate alternatives
        validate_label_set(&cmd.alternatives).map_err(|e| e.within(Scope::AlternativeLabels))?;

        // 2. Resolve criteria weights
        let criteria_weights = cmd
            .criteria_weights
            .resolve()
            .map_err(|e| e.within(Scope::CriteriaWeights))?;

        // 3. Match comparisons to criteria
        let mut by_criterion: HashMap<Label, Vec<Vec<f64>>> = HashMap::new();
        for comparison in cmd.comparisons {
            if !criteria_weights.criteria().contains(&comparison.criterion) {
                return Err(AhpError::input(InputProblem::UnexpectedComparisons(
                    comparison.criterion.to_string(),
                ))
                .within(Scope::Aggregation));
            }
            by_criterion.insert(comparison.criterion, comparison.matrix);
        }

        // 4. Judge alternatives under each criterion, in criteria order
        let mut judgments = Vec::with_capacity(criteria_weights.criteria().len());
        for criterion in criteria_weights.criteria() {
            let scope = Scope::AlternativesMatrix {
                criterion: criterion.clone(),
            };
            let raw = by_criterion.remove(criterion).ok_or_else(|| {
                AhpError::input(InputProblem::MissingComparisons(criterion.to_string()))
                    .within(scope.clone())
            })?;

            let judgment = PairwiseComparisonMatrix::new(cmd.alternatives.clone(), raw)
                .and_then(|matrix| CriterionJudgment::evaluate(criterion.clone(), matrix))
                .map_err(|e| e.within(scope))?;

            if !judgment.consistency.is_consistent {
                warn!(
                    criterion = %criterion,
                    consistency_ratio = judgment.consistency.consistency_ratio,
                    "Alternative judgments are inconsistent"
                );
            }
            debug!(
                criterion = %criterion,
                consistency_ratio = judgment.consistency.consistency_ratio,
                "Judged alternatives"
            );

            judgments.push(judgment);
        }

        // 5. Aggregate
        let ranking = HierarchyAggregator::aggregate(criteria_weights.priorities(), &judgments)
            .map_err(|e| e.within(Scope::Aggregation))?;

        if let Some(best) = ranking.best() {
            info!(
                alternatives = ranking.len(),
                criteria = judgments.len(),
                best = %best.alternative,
                "Ranked alternatives"
            );
        }

        Ok(RankAlternativesResult {
            criteria_weights,
            judgments,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{PriorityVector, WeightProvenance};
    use crate::domain::foundation::ErrorCode;

    fn labels(names: &[&str]) -> Vec<Label> {
        Label::many(names.iter().copied()).unwrap()
    }

    fn comparisons(criterion: &str, matrix: Vec<Vec<f64>>) -> AlternativeComparisons {
        AlternativeComparisons {
            criterion: Label::new(criterion).unwrap(),
            matrix,
        }
    }

    fn manual(weights: Vec<f64>) -> CriteriaWeightsSource {
        CriteriaWeightsSource::Manual {
            criteria: labels(&["Cost", "Quality"]),
            weights,
        }
    }

    fn cost() -> AlternativeComparisons {
        comparisons("Cost", vec![vec![1.0, 4.0], vec![1.0, 1.0]])
    }

    fn quality() -> AlternativeComparisons {
        comparisons("Quality", vec![vec![1.0, 0.5], vec![1.0, 1.0]])
    }

    fn command(source: CriteriaWeightsSource) -> RankAlternativesCommand {
        RankAlternativesCommand {
            alternatives: labels(&["Alt 1", "Alt 2"]),
            criteria_weights: source,
            comparisons: vec![quality(), cost()],
        }
    }

    #[test]
    fn ranks_with_manual_weights() {
        let result = RankAlternativesHandler::new()
            .handle(command(manual(vec![3.0, 1.0])))
            .unwrap();

        // Alt 1: 0.75 * 0.8 + 0.25 * (1/3)
        let expected = 0.75 * 0.8 + 0.25 * (1.0 / 3.0);
        assert_eq!(result.ranking.best().unwrap().alternative.as_str(), "Alt 1");
        assert!((result.ranking.score_of("Alt 1").unwrap() - expected).abs() < 1e-3);
        assert!((result.ranking.total_score() - 1.0).abs() < 1e-9);
        assert_eq!(result.criteria_weights.provenance, WeightProvenance::Manual);
    }

    #[test]
    fn judgments_follow_criteria_order() {
        let result = RankAlternativesHandler::new()
            .handle(command(manual(vec![1.0, 1.0])))
            .unwrap();

        let order: Vec<_> = result.judgments.iter().map(|j| j.criterion.as_str()).collect();
        assert_eq!(order, vec!["Cost", "Quality"]);
        assert_eq!(result.consistency_summary().len(), 2);
        assert!(result.inconsistent_criteria().is_empty());
    }

    #[test]
    fn ranks_with_previous_weights() {
        let previous = CriteriaWeights::derived(
            PriorityVector::new(labels(&["Cost", "Quality"]), vec![0.1, 0.9]).unwrap(),
            0.0,
        );
        let result = RankAlternativesHandler::new()
            .handle(command(CriteriaWeightsSource::Previous(previous.clone())))
            .unwrap();

        assert_eq!(result.criteria_weights, previous);
        assert_eq!(result.ranking.best().unwrap().alternative.as_str(), "Alt 2");
    }

    #[test]
    fn manual_weight_count_mismatch_is_input_error() {
        let err = RankAlternativesHandler::new()
            .handle(command(manual(vec![0.3, 0.5, 0.2])))
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InputError);
        assert_eq!(err.scope(), &Scope::CriteriaWeights);
    }

    #[test]
    fn missing_criterion_comparisons_name_the_criterion() {
        let mut cmd = command(manual(vec![1.0, 1.0]));
        cmd.comparisons = vec![cost()];

        let err = RankAlternativesHandler::new().handle(cmd).unwrap_err();
        assert_eq!(
            err,
            AhpError::input(InputProblem::MissingComparisons("Quality".to_string())).within(
                Scope::AlternativesMatrix {
                    criterion: Label::new("Quality").unwrap()
                }
            )
        );
    }

    #[test]
    fn unknown_criterion_comparisons_are_rejected() {
        let mut cmd = command(manual(vec![1.0, 1.0]));
        cmd.comparisons.push(comparisons("Speed", vec![vec![1.0, 2.0], vec![1.0, 1.0]]));

        let err = RankAlternativesHandler::new().handle(cmd).unwrap_err();
        assert!(matches!(
            err,
            AhpError::Input {
                problem: InputProblem::UnexpectedComparisons(_),
                ..
            }
        ));
    }

    #[test]
    fn bad_alternative_matrix_names_the_criterion() {
        let mut cmd = command(manual(vec![1.0, 1.0]));
        cmd.comparisons = vec![cost(), comparisons("Quality", vec![vec![1.0, 2.0]])];

        let err = RankAlternativesHandler::new().handle(cmd).unwrap_err();
        assert_eq!(
            err.scope(),
            &Scope::AlternativesMatrix {
                criterion: Label::new("Quality").unwrap()
            }
        );
    }

    #[test]
    fn too_few_alternatives_is_rejected() {
        let mut cmd = command(manual(vec![1.0, 1.0]));
        cmd.alternatives = labels(&["Alt 1", "Alt 2"])[..1].to_vec();

        let err = RankAlternativesHandler::new().handle(cmd).unwrap_err();
        assert_eq!(err.scope(), &Scope::AlternativeLabels);
    }
}
