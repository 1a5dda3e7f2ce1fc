//! Attendance and age normalization.
//!
//! Converts raw roster records into [`Person`] entries carrying a cleaned
//! age, an attendance grade/score, and an initial role. Soft data errors
//! (unparseable age or attendance) never fail the run; they resolve to
//! documented defaults.

use flocksort_core::{AttendanceGrade, Person, RawMember, Role};

/// Fallback age when no record carries a valid age.
const DEFAULT_CLEAN_AGE: u32 = 30;

/// Ages at or above this value are treated as invalid.
const MAX_VALID_AGE: f64 = 150.0;

/// Normalizes raw records into roster members.
///
/// Invalid ages (parse failure, non-positive, or `>= 150`) are replaced
/// with the floored mean of the valid ages, or 30 when none are valid.
/// Attendance converts through [`AttendanceGrade::parse`]. Members with an
/// at-risk grade start with [`Role::AtRisk`], everyone else with
/// [`Role::General`]; leadership is assigned later by resolution.
///
/// Deterministic and idempotent: normalizing already-clean values changes
/// nothing.
pub fn normalize(records: &[RawMember]) -> Vec<Person> {
    let parsed: Vec<Option<f64>> = records.iter().map(|r| parse_age(&r.age)).collect();

    let valid: Vec<f64> = parsed.iter().copied().flatten().collect();
    let fallback_age = if valid.is_empty() {
        DEFAULT_CLEAN_AGE
    } else {
        (valid.iter().sum::<f64>() / valid.len() as f64).floor() as u32
    };

    records
        .iter()
        .zip(parsed)
        .map(|(record, age)| {
            let clean_age = age.map_or(fallback_age, |a| a.floor() as u32);
            let grade = AttendanceGrade::parse(&record.attendance);
            let role = if grade == AttendanceGrade::AtRisk {
                Role::AtRisk
            } else {
                Role::General
            };
            Person {
                name: record.name.trim().to_string(),
                raw_age: record.age.clone(),
                clean_age,
                band_age: clean_age,
                attendance_raw: record.attendance.clone(),
                grade,
                score: grade.score(),
                role,
                group: None,
            }
        })
        .collect()
}

fn parse_age(raw: &str) -> Option<f64> {
    let age: f64 = raw.trim().parse().ok()?;
    (age.is_finite() && age > 0.0 && age < MAX_VALID_AGE).then_some(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ages_pass_through() {
        let records = [
            RawMember::new("Ann", "30", "A"),
            RawMember::new("Bob", "25", "B"),
        ];
        let people = normalize(&records);
        assert_eq!(people[0].clean_age, 30);
        assert_eq!(people[1].clean_age, 25);
        assert_eq!(people[0].band_age, 30);
    }

    #[test]
    fn test_invalid_ages_replaced_with_floored_mean() {
        let records = [
            RawMember::new("Ann", "30", "A"),
            RawMember::new("Bob", "unknown", "B"),
            RawMember::new("Cho", "-5", "C"),
            RawMember::new("Dan", "150", "C"),
            RawMember::new("Eve", "33", "C"),
        ];
        let people = normalize(&records);
        // Mean of the valid ages 30 and 33, floored.
        assert_eq!(people[1].clean_age, 31);
        assert_eq!(people[2].clean_age, 31);
        assert_eq!(people[3].clean_age, 31);
        // Display ages are kept verbatim.
        assert_eq!(people[1].raw_age, "unknown");
        assert_eq!(people[3].raw_age, "150");
    }

    #[test]
    fn test_no_valid_ages_defaults_to_thirty() {
        let records = [
            RawMember::new("Ann", "", "A"),
            RawMember::new("Bob", "abc", "B"),
        ];
        let people = normalize(&records);
        assert_eq!(people[0].clean_age, 30);
        assert_eq!(people[1].clean_age, 30);
    }

    #[test]
    fn test_fractional_ages_are_floored() {
        let records = [RawMember::new("Ann", "30.9", "A")];
        assert_eq!(normalize(&records)[0].clean_age, 30);
    }

    #[test]
    fn test_attendance_conversion_and_roles() {
        let records = [
            RawMember::new("Ann", "30", "A"),
            RawMember::new("Bob", "30", "35"),
            RawMember::new("Cho", "30", "4"),
            RawMember::new("Dan", "30", "??"),
        ];
        let people = normalize(&records);
        assert_eq!(people[0].grade, AttendanceGrade::A);
        assert_eq!(people[0].score, 5);
        assert_eq!(people[1].grade, AttendanceGrade::B);
        assert_eq!(people[2].grade, AttendanceGrade::AtRisk);
        assert_eq!(people[2].role, Role::AtRisk);
        assert_eq!(people[3].grade, AttendanceGrade::C);
        assert_eq!(people[3].role, Role::General);
    }

    #[test]
    fn test_names_are_trimmed() {
        let records = [RawMember::new("  Ann ", "30", "A")];
        assert_eq!(normalize(&records)[0].name, "Ann");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let records = [
            RawMember::new("Ann", "bad", "44"),
            RawMember::new("Bob", "41", "d"),
            RawMember::new("Cho", "23", "7"),
        ];
        let first = normalize(&records);

        let again: Vec<RawMember> = first
            .iter()
            .map(|p| RawMember::new(p.name.clone(), p.clean_age.to_string(), p.attendance_raw.clone()))
            .collect();
        let second = normalize(&again);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.clean_age, b.clean_age);
            assert_eq!(a.score, b.score);
            assert_eq!(a.grade, b.grade);
            assert_eq!(a.role, b.role);
        }
    }
}
