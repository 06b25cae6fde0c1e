//! Analysis Module - Pure domain services for the Analytic Hierarchy Process.
//!
//! This module contains stateless functions that turn pairwise judgments
//! into priorities and rankings.
//!
//! # Components
//!
//! - `PairwiseComparisonMatrix` - Validated, reciprocity-enforced judgment matrix
//! - `WeightDeriver` - Priority vector via mean of normalized columns
//! - `ConsistencyEvaluator` - λ_max, CI and CR (CR < 0.1 is consistent)
//! - `HierarchyAggregator` - Criteria weights × per-criterion priorities → ranking
//! - `CriteriaWeights` - Value handed from a weighting pass to a ranking pass
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod consistency;
mod handoff;
mod hierarchy_aggregator;
mod pairwise_matrix;
mod priority_vector;
mod weight_deriver;

pub use consistency::{
    random_index, ConsistencyEvaluator, ConsistencyReport, ConsistencyVerdict,
    CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use handoff::{CriteriaWeights, WeightProvenance};
pub use hierarchy_aggregator::{
    AggregationResult, CriterionJudgment, HierarchyAggregator, RankedAlternative,
};
pub use pairwise_matrix::{
    round_to, PairwiseComparisonMatrix, PairwiseMatrixBuilder, RECIPROCAL_DECIMALS,
};
pub use priority_vector::{PriorityVector, WEIGHT_SUM_TOLERANCE};
pub use weight_deriver::{NormalizedMatrix, WeightDeriver};
