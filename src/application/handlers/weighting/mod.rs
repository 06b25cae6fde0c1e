//! Criteria weighting handlers.

mod weigh_criteria;

pub use weigh_criteria::{WeighCriteriaCommand, WeighCriteriaHandler, WeighCriteriaResult};
