//! Attendance grading.
//!
//! Raw attendance input is either a letter grade or a count of attendances
//! out of 52 weeks; both normalize to an [`AttendanceGrade`] carrying an
//! ordinal score used for balancing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum counts for each grade, out of 52 weeks. Below the `D` threshold a
/// member is at risk.
const GRADE_A_MIN: i64 = 40;
const GRADE_B_MIN: i64 = 30;
const GRADE_C_MIN: i64 = 20;
const GRADE_D_MIN: i64 = 10;

/// Discrete attendance bucket.
///
/// # Example
///
/// ```
/// use flocksort_core::AttendanceGrade;
///
/// assert_eq!(AttendanceGrade::from_count(41), AttendanceGrade::A);
/// assert_eq!(AttendanceGrade::from_count(9), AttendanceGrade::AtRisk);
/// assert_eq!(AttendanceGrade::parse(" b "), AttendanceGrade::B);
/// assert_eq!(AttendanceGrade::parse("not a grade"), AttendanceGrade::C);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceGrade {
    /// 40 or more attendances.
    A,
    /// 30 or more attendances.
    B,
    /// 20 or more attendances.
    C,
    /// 10 or more attendances.
    D,
    /// Fewer than 10 attendances; flagged for follow-up.
    AtRisk,
}

impl AttendanceGrade {
    /// Ordinal score used for balancing; higher means more engaged.
    pub fn score(self) -> u8 {
        match self {
            AttendanceGrade::A => 5,
            AttendanceGrade::B => 4,
            AttendanceGrade::C => 3,
            AttendanceGrade::D => 2,
            AttendanceGrade::AtRisk => 1,
        }
    }

    /// Buckets a raw attendance count by the grade thresholds.
    pub fn from_count(count: i64) -> Self {
        if count >= GRADE_A_MIN {
            AttendanceGrade::A
        } else if count >= GRADE_B_MIN {
            AttendanceGrade::B
        } else if count >= GRADE_C_MIN {
            AttendanceGrade::C
        } else if count >= GRADE_D_MIN {
            AttendanceGrade::D
        } else {
            AttendanceGrade::AtRisk
        }
    }

    /// Parses a raw attendance cell.
    ///
    /// Letter tokens map directly through the score table; anything else is
    /// parsed as an integer count and bucketed. Unparseable input falls back
    /// to `C` rather than failing.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_ascii_uppercase();
        match token.as_str() {
            "A" => AttendanceGrade::A,
            "B" => AttendanceGrade::B,
            "C" => AttendanceGrade::C,
            "D" => AttendanceGrade::D,
            "AT_RISK" | "AT-RISK" => AttendanceGrade::AtRisk,
            _ => token
                .parse::<i64>()
                .map(Self::from_count)
                .unwrap_or(AttendanceGrade::C),
        }
    }
}

impl fmt::Display for AttendanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttendanceGrade::A => "A",
            AttendanceGrade::B => "B",
            AttendanceGrade::C => "C",
            AttendanceGrade::D => "D",
            AttendanceGrade::AtRisk => "AT_RISK",
        };
        f.write_str(label)
    }
}
