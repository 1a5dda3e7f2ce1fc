//! Final assignment table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use flocksort_core::{AttendanceGrade, GroupId, Person, Role};

/// The final assignment: an ordered member list with a group id on every
/// member.
///
/// Storage is arena-style — the member list plus each member's `group`
/// field is the single source of truth, and groups are materialized on
/// demand rather than kept as separate collections that could drift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    people: Vec<Person>,
}

/// One flat output row, naturally sorted by `group_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub group_id: GroupId,
    pub name: String,
    /// Display age, verbatim from the input.
    pub age: String,
    pub attendance_raw: String,
    pub attendance_grade: AttendanceGrade,
    pub role: Role,
}

impl Assignment {
    pub(crate) fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// All members, in assignment order.
    pub fn members(&self) -> &[Person] {
        &self.people
    }

    /// Number of assigned members.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true when the assignment holds no members.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Group ids in ascending numeric order.
    pub fn group_ids(&self) -> Vec<GroupId> {
        let ids: BTreeSet<GroupId> = self.people.iter().filter_map(|p| p.group).collect();
        ids.into_iter().collect()
    }

    /// Members of one group, in assignment order.
    pub fn members_of(&self, group: GroupId) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|p| p.group == Some(group))
            .collect()
    }

    /// Group of the named member, if present.
    pub fn group_of(&self, name: &str) -> Option<GroupId> {
        self.people
            .iter()
            .find(|p| p.is_named(name))
            .and_then(|p| p.group)
    }

    /// Flat output rows, sorted by numeric group id (stable within a
    /// group).
    pub fn rows(&self) -> Vec<AssignmentRow> {
        let mut rows: Vec<AssignmentRow> = self
            .people
            .iter()
            .filter_map(|person| {
                let group_id = person.group?;
                Some(AssignmentRow {
                    group_id,
                    name: person.name.clone(),
                    age: person.raw_age.clone(),
                    attendance_raw: person.attendance_raw.clone(),
                    attendance_grade: person.grade,
                    role: person.role,
                })
            })
            .collect();
        rows.sort_by_key(|row| row.group_id);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flocksort_core::AttendanceGrade;

    use crate::test_utils::grouped;

    fn sample() -> Assignment {
        Assignment::new(vec![
            grouped("Ann", 30, AttendanceGrade::A, 10),
            grouped("Bob", 31, AttendanceGrade::B, 2),
            grouped("Cho", 32, AttendanceGrade::C, 2),
        ])
    }

    #[test]
    fn test_group_ids_ascending() {
        assert_eq!(sample().group_ids(), vec![GroupId(2), GroupId(10)]);
    }

    #[test]
    fn test_members_of() {
        let assignment = sample();
        let names: Vec<&str> = assignment
            .members_of(GroupId(2))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Cho"]);
    }

    #[test]
    fn test_rows_natural_sort() {
        // Numeric ordering: group 2 precedes group 10.
        let rows = sample().rows();
        assert_eq!(rows[0].name, "Bob");
        assert_eq!(rows[2].name, "Ann");
        assert_eq!(rows[2].group_id, GroupId(10));
    }

    #[test]
    fn test_group_of_trims_query() {
        assert_eq!(sample().group_of(" Ann "), Some(GroupId(10)));
        assert_eq!(sample().group_of("Zed"), None);
    }

    #[test]
    fn test_row_serialization_shape() {
        let rows = sample().rows();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["group_id"], 2);
        assert_eq!(json["attendance_grade"], "B");
        assert_eq!(json["role"], "GENERAL");
    }
}
