//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations for the two passes of an AHP
//! decision: weighting criteria, then ranking alternatives against them.

pub mod handlers;

pub use handlers::{
    // Weighting
    WeighCriteriaCommand, WeighCriteriaHandler, WeighCriteriaResult,
    // Ranking
    AlternativeComparisons, CriteriaWeightsSource, CriterionConsistency,
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
