//! Domain layer containing the AHP computation engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (labels, errors)
//! - `analysis` - Pure domain services (matrices, weights, consistency, aggregation)

pub mod analysis;
pub mod foundation;
