//! Flocksort - Small-group partitioning with operator constraints
//!
//! Partitions a roster into groups of roughly-equal size, keeping members
//! age-similar and spreading engagement evenly, with an operator constraint
//! layer on top: force pairs together (include), keep pairs apart
//! (exclude), and pre-designate group leaders.
//!
//! # Example
//!
//! ```rust
//! use flocksort::prelude::*;
//!
//! let roster: Vec<RawMember> = (1..=20)
//!     .map(|i| RawMember::new(format!("Member{i}"), (25 + i % 10).to_string(), "A"))
//!     .collect();
//!
//! let mut constraints = ConstraintSet::new();
//! constraints.push(Constraint::include("Member1", "Member2", "carpool").unwrap());
//!
//! let engine = Engine::new(EngineConfig::new().with_group_size(5))
//!     .with_constraints(constraints.clone());
//! let assignment = engine.run(&roster).unwrap();
//!
//! assert_eq!(assignment.len(), 20);
//! assert_eq!(assignment.group_of("Member1"), assignment.group_of("Member2"));
//! assert!(check_violations(&assignment, &constraints).is_empty());
//! ```

// Domain types
pub use flocksort_core::{
    AttendanceGrade, Constraint, ConstraintError, ConstraintRecord, ConstraintSet, GroupId,
    Person, RawMember, Role,
};

// Configuration
pub use flocksort_config::{ConfigError, EngineConfig};

// Engine pipeline and reports
pub use flocksort_engine::{
    check_violations, group_statistics, normalize, Assignment, AssignmentRow, Engine,
    EngineError, GroupStatistics, Violation,
};

pub mod prelude {
    pub use super::{
        check_violations, group_statistics, Assignment, AttendanceGrade, Constraint,
        ConstraintSet, Engine, EngineConfig, GroupId, RawMember, Role, Violation,
    };
}
