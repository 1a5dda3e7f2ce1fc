//! Shared fixtures for engine tests.

use flocksort_core::{AttendanceGrade, GroupId, Person, RawMember, Role};

/// Builds a normalized member with the given name, age, and grade.
pub fn person(name: &str, age: u32, grade: AttendanceGrade) -> Person {
    Person {
        name: name.to_string(),
        raw_age: age.to_string(),
        clean_age: age,
        band_age: age,
        attendance_raw: grade.to_string(),
        grade,
        score: grade.score(),
        role: if grade == AttendanceGrade::AtRisk {
            Role::AtRisk
        } else {
            Role::General
        },
        group: None,
    }
}

/// Builds a member already assigned to a group.
pub fn grouped(name: &str, age: u32, grade: AttendanceGrade, group: u32) -> Person {
    let mut person = person(name, age, grade);
    person.group = Some(GroupId(group));
    person
}

/// The 20-member roster used by the end-to-end scenarios: names `User1`
/// through `User20`, ages cycling 30..=34, attendance alternating A and C.
pub fn scenario_roster() -> Vec<RawMember> {
    (1..=20)
        .map(|i| {
            RawMember::new(
                format!("User{i}"),
                (30 + i % 5).to_string(),
                if i % 2 == 0 { "A" } else { "C" },
            )
        })
        .collect()
}
