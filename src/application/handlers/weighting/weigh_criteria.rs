//! WeighCriteriaHandler - Command handler for a criteria weighting pass.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::analysis::{
    ConsistencyEvaluator, ConsistencyReport, CriteriaWeights, NormalizedMatrix,
    PairwiseComparisonMatrix, PriorityVector, WeightDeriver,
};
use crate::domain::foundation::{validate_label_set, AhpError, Label, Scope};

/// Command to weigh criteria from pairwise judgments.
#[derive(Debug, Clone)]
pub struct WeighCriteriaCommand {
    pub criteria: Vec<Label>,
    /// Raw n×n judgment grid in criteria order.
    pub comparisons: Vec<Vec<f64>>,
}

/// Result of a weighting pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeighCriteriaResult {
    pub matrix: PairwiseComparisonMatrix,
    pub normalized: NormalizedMatrix,
    pub weights: PriorityVector,
    pub consistency: ConsistencyReport,
}

impl WeighCriteriaResult {
    /// Packages the derived weights for a later ranking pass.
    pub fn handoff(&self) -> CriteriaWeights {
        CriteriaWeights::derived(self.weights.clone(), self.consistency.consistency_ratio)
    }
}

/// Handler for criteria weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeighCriteriaHandler;

impl WeighCriteriaHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: WeighCriteriaCommand) -> Result<WeighCriteriaResult, AhpError> {
        // 1. Validate labels
        validate_label_set(&cmd.criteria).map_err(|e| e.within(Scope::CriteriaLabels))?;

        // 2. Build the enforced matrix and derive weights
        let scoped = |e: AhpError| e.within(Scope::CriteriaMatrix);
        let matrix = PairwiseComparisonMatrix::new(cmd.criteria, cmd.comparisons).map_err(scoped)?;
        let normalized = WeightDeriver::normalize(&matrix).map_err(scoped)?;
        let weights = WeightDeriver::weights(&normalized).map_err(scoped)?;

        // 3. Check consistency (advisory)
        let consistency = ConsistencyEvaluator::evaluate(&matrix, &weights).map_err(scoped)?;

        if !consistency.is_consistent {
            warn!(
                consistency_ratio = consistency.consistency_ratio,
                "Criteria judgments are inconsistent"
            );
        }

        debug!(
            lambda_max = consistency.lambda_max,
            consistency_index = consistency.consistency_index,
            "Evaluated criteria consistency"
        );
        info!(
            criteria = matrix.size(),
            consistency_ratio = consistency.consistency_ratio,
            "Weighted criteria"
        );

        Ok(WeighCriteriaResult {
            matrix,
            normalized,
            weights,
            consistency,
        })
    }
}
