//! AHP Priority - Multi-criteria decision support with the Analytic Hierarchy Process
//!
//! A decision is made in two passes. Criteria are weighed against each other
//! from a pairwise comparison matrix; alternatives are then compared under
//! each criterion and their priorities are aggregated with the criteria
//! weights into a final ranking. Every matrix is checked for consistency.
//!
//! The crate follows a hexagonal layout:
//! - `domain` - Pure AHP computations and value types
//! - `application` - Weighting and ranking handlers
//! - `ports` - Report rendering contract
//! - `adapters` - Text parsing, problem files, JSON/YAML reports
//! - `config` - File and environment configuration, logging setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
