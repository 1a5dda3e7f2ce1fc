//! Per-group statistics.

use serde::{Deserialize, Serialize};

use flocksort_core::{GroupId, Role};

use crate::assignment::Assignment;

/// Aggregates for one group.
///
/// Ages are the members' true (cleaned) ages, never the banding key, so
/// include pre-alignment can never leak into reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    pub group: GroupId,
    pub member_count: usize,
    /// Mean age, rounded to one decimal.
    pub mean_age: f64,
    pub min_age: u32,
    pub max_age: u32,
    pub leader_count: usize,
    pub at_risk_count: usize,
}

/// Computes statistics for every group, ordered by numeric id ascending.
pub fn group_statistics(assignment: &Assignment) -> Vec<GroupStatistics> {
    assignment
        .group_ids()
        .into_iter()
        .map(|group| {
            let members = assignment.members_of(group);
            let count = members.len();
            let age_sum: u64 = members.iter().map(|p| u64::from(p.clean_age)).sum();
            let mean_age = (age_sum as f64 / count as f64 * 10.0).round() / 10.0;
            GroupStatistics {
                group,
                member_count: count,
                mean_age,
                min_age: members.iter().map(|p| p.clean_age).min().unwrap_or(0),
                max_age: members.iter().map(|p| p.clean_age).max().unwrap_or(0),
                leader_count: members.iter().filter(|p| p.role == Role::Leader).count(),
                at_risk_count: members.iter().filter(|p| p.role == Role::AtRisk).count(),
            }
        })
        .collect()
}
