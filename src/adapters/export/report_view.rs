//! Report views - Display-ready snapshots of pass results.
//!
//! Values are rounded to the configured precision here and nowhere else;
//! the results handed in are never modified.

use serde::Serialize;

use crate::application::{RankAlternativesResult, WeighCriteriaResult};
use crate::domain::analysis::{
    round_to, ConsistencyReport, CriteriaWeights, CriterionJudgment, NormalizedMatrix,
    PairwiseComparisonMatrix, PriorityVector, WeightProvenance,
};
use crate::domain::foundation::Label;

/// Decimal places shown when nothing else is configured.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest precision worth showing for an `f64`.
pub const MAX_PRECISION: u32 = 15;

/// Rounds every number in a view to a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounding {
    decimals: i32,
}

impl Rounding {
    /// Precision above [`MAX_PRECISION`] is clamped.
    pub fn new(precision: u32) -> Self {
        Self {
            decimals: precision.min(MAX_PRECISION) as i32,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        round_to(value, self.decimals)
    }

    fn row(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }

    fn grid(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter().map(|r| self.row(r)).collect()
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

fn names(labels: &[Label]) -> Vec<String> {
    labels.iter().map(Label::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixView {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl MatrixView {
    fn of(matrix: &PairwiseComparisonMatrix, rounding: Rounding) -> Self {
        Self {
            labels: names(matrix.labels()),
            rows: rounding.grid(matrix.entries()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedView {
    pub column_sums: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

impl NormalizedView {
    fn of(normalized: &NormalizedMatrix, rounding: Rounding) -> Self {
        Self {
            column_sums: rounding.row(normalized.column_sums()),
            rows: rounding.grid(normalized.entries()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightView {
    pub label: String,
    pub weight: f64,
}

fn weight_views(priorities: &PriorityVector, rounding: Rounding) -> Vec<WeightView> {
    priorities
        .iter()
        .map(|(label, weight)| WeightView {
            label: label.to_string(),
            weight: rounding.apply(weight),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyView {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
    pub verdict: &'static str,
}

impl ConsistencyView {
    fn of(report: &ConsistencyReport, rounding: Rounding) -> Self {
        Self {
            lambda_max: rounding.apply(report.lambda_max),
            consistency_index: rounding.apply(report.consistency_index),
            random_index: report.random_index,
            consistency_ratio: rounding.apply(report.consistency_ratio),
            is_consistent: report.is_consistent,
            verdict: report.verdict().label(),
        }
    }
}

/// Report for a criteria weighting pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightingReport {
    pub criteria: Vec<String>,
    pub matrix: MatrixView,
    pub normalized: NormalizedView,
    pub weights: Vec<WeightView>,
    pub consistency: ConsistencyView,
}

impl WeightingReport {
    pub fn build(result: &WeighCriteriaResult, rounding: Rounding) -> Self {
        Self {
            criteria: names(result.weights.labels()),
            matrix: MatrixView::of(&result.matrix, rounding),
            normalized: NormalizedView::of(&result.normalized, rounding),
            weights: weight_views(&result.weights, rounding),
            consistency: ConsistencyView::of(&result.consistency, rounding),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaWeightsView {
    pub provenance: WeightProvenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_ratio: Option<f64>,
    pub weights: Vec<WeightView>,
}

impl CriteriaWeightsView {
    fn of(weights: &CriteriaWeights, rounding: Rounding) -> Self {
        Self {
            provenance: weights.provenance,
            consistency_ratio: weights.consistency_ratio.map(|cr| rounding.apply(cr)),
            weights: weight_views(weights.priorities(), rounding),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionView {
    pub criterion: String,
    pub matrix: MatrixView,
    pub weights: Vec<WeightView>,
    pub consistency: ConsistencyView,
}

impl CriterionView {
    fn of(judgment: &CriterionJudgment, rounding: Rounding) -> Self {
        Self {
            criterion: judgment.criterion.to_string(),
            matrix: MatrixView::of(&judgment.matrix, rounding),
            weights: weight_views(&judgment.priorities, rounding),
            consistency: ConsistencyView::of(&judgment.consistency, rounding),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub alternative: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyRow {
    pub criterion: String,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
}

/// Report for an alternative ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub criteria_weights: CriteriaWeightsView,
    pub criteria: Vec<CriterionView>,
    pub ranking: Vec<RankingRow>,
    pub consistency_summary: Vec<ConsistencyRow>,
}

impl RankingReport {
    pub fn build(result: &RankAlternativesResult, rounding: Rounding) -> Self {
        Self {
            criteria_weights: CriteriaWeightsView::of(&result.criteria_weights, rounding),
            criteria: result
                .judgments
                .iter()
                .map(|j| CriterionView::of(j, rounding))
                .collect(),
            ranking: result
                .ranking
                .entries()
                .iter()
                .map(|entry| RankingRow {
                    rank: entry.rank,
                    alternative: entry.alternative.to_string(),
                    score: rounding.apply(entry.score),
                })
                .collect(),
            consistency_summary: result
                .consistency_summary()
                .into_iter()
                .map(|c| ConsistencyRow {
                    criterion: c.criterion.to_string(),
                    consistency_ratio: rounding.apply(c.consistency_ratio),
                    is_consistent: c.is_consistent,
                })
                .collect(),
        }
    }
}
