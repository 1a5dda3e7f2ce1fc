//! Flocksort Engine
//!
//! This crate provides the grouping and constraint-resolution pipeline:
//! - Attendance/age normalization
//! - Age banding with capacity-aware band merging
//! - Balanced ("snake") distribution inside each band
//! - Constraint application and repair (include/exclude/leader)
//! - Per-group statistics and residual-violation reporting
//!
//! One run is a pure function of `(records, constraints, configuration)`;
//! the engine keeps no state between runs.

pub mod assignment;
pub mod band;
pub mod distribute;
pub mod engine;
pub mod normalize;
pub mod resolve;
pub mod statistics;
pub mod violation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use assignment::{Assignment, AssignmentRow};
pub use band::AgeBand;
pub use engine::{Engine, EngineError};
pub use normalize::normalize;
pub use statistics::{group_statistics, GroupStatistics};
pub use violation::{check_violations, Violation};
