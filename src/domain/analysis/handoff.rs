//! Criteria weights handed from a weighting pass to a ranking pass.

use serde::{Deserialize, Serialize};

use super::PriorityVector;
use crate::domain::foundation::{AhpError, Label};

/// Where a set of criteria weights came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightProvenance {
    /// Derived from a criteria comparison matrix.
    Derived,
    /// Entered directly by the caller.
    Manual,
}

/// Criteria weights passed explicitly between computation passes.
///
/// This is the only state allowed to outlive a single pass. It is always
/// handed over as a value; the ranking pass never reads it from anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeights {
    pub provenance: WeightProvenance,
    /// CR of the weighting pass, when derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_ratio: Option<f64>,
    pub weights: PriorityVector,
}

impl CriteriaWeights {
    /// Wraps weights derived from a criteria matrix.
    pub fn derived(weights: PriorityVector, consistency_ratio: f64) -> Self {
        Self {
            provenance: WeightProvenance::Derived,
            consistency_ratio: Some(consistency_ratio),
            weights,
        }
    }

    /// Builds weights from directly entered values, re-normalizing them.
    pub fn manual(criteria: Vec<Label>, weights: Vec<f64>) -> Result<Self, AhpError> {
        Ok(Self {
            provenance: WeightProvenance::Manual,
            consistency_ratio: None,
            weights: PriorityVector::normalized(criteria, weights)?,
        })
    }

    pub fn criteria(&self) -> &[Label] {
        self.weights.labels()
    }

    pub fn priorities(&self) -> &PriorityVector {
        &self.weights
    }
}
