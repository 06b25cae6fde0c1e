//! Application handlers.
//!
//! Command handlers that orchestrate one AHP computation pass each.

pub mod ranking;
pub mod weighting;

pub use ranking::{
    AlternativeComparisons, CriteriaWeightsSource, CriterionConsistency,
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
pub use weighting::{WeighCriteriaCommand, WeighCriteriaHandler, WeighCriteriaResult};
