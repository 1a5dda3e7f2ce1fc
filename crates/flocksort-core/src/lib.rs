//! Flocksort Core - Domain types for the grouping engine
//!
//! This crate provides the fundamental types shared across Flocksort:
//! - Roster member model (`RawMember`, `Person`, `Role`)
//! - Attendance grading (`AttendanceGrade`)
//! - Operator constraints (`Constraint`, `ConstraintSet`)
//! - Group identity (`GroupId`)

pub mod attendance;
pub mod constraint;
pub mod error;
pub mod person;

#[cfg(test)]
mod constraint_tests;

pub use attendance::AttendanceGrade;
pub use constraint::{Constraint, ConstraintRecord, ConstraintSet};
pub use error::ConstraintError;
pub use person::{GroupId, Person, RawMember, Role};
