//! Alternative ranking handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    AlternativeComparisons, CriteriaWeightsSource, CriterionConsistency,
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
