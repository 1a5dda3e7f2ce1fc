//! Residual constraint violations.

use std::fmt;

use serde::Serialize;

use flocksort_core::{ConstraintSet, GroupId};

use crate::assignment::Assignment;

/// One residual violation, re-derived from the final assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    /// An exclude pair ended up sharing a group.
    ExcludedTogether {
        first: String,
        second: String,
        group: GroupId,
    },
    /// An include pair ended up in different groups.
    IncludeSplit {
        first: String,
        second: String,
        first_group: GroupId,
        second_group: GroupId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ExcludedTogether {
                first,
                second,
                group,
            } => write!(f, "exclude violated: {first} and {second} are both in {group}"),
            Violation::IncludeSplit {
                first,
                second,
                first_group,
                second_group,
            } => write!(
                f,
                "include violated: {first} and {second} are in different groups ({first_group} vs {second_group})"
            ),
        }
    }
}

/// Re-scans the final assignment for residual violations.
///
/// Pure read, no mutation; returns an empty list when every constraint
/// holds. Exclude violations precede include violations. Pairs referencing
/// absent members are ignored.
pub fn check_violations(assignment: &Assignment, constraints: &ConstraintSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (first, second) in constraints.exclude_pairs() {
        if let (Some(first_group), Some(second_group)) =
            (assignment.group_of(first), assignment.group_of(second))
        {
            if first_group == second_group {
                violations.push(Violation::ExcludedTogether {
                    first: first.to_string(),
                    second: second.to_string(),
                    group: first_group,
                });
            }
        }
    }

    for (first, second) in constraints.include_pairs() {
        if let (Some(first_group), Some(second_group)) =
            (assignment.group_of(first), assignment.group_of(second))
        {
            if first_group != second_group {
                violations.push(Violation::IncludeSplit {
                    first: first.to_string(),
                    second: second.to_string(),
                    first_group,
                    second_group,
                });
            }
        }
    }

    violations
}
