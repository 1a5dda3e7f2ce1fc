//! Roster member types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceGrade;

/// Classification of a member within the final assignment.
///
/// `Leader` is only ever assigned by the engine (via constraint or
/// auto-promotion); it is never read from input. `AtRisk` is fixed by the
/// attendance grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Group leader, designated by constraint or promoted by the engine.
    Leader,
    /// Regular member.
    General,
    /// Member below the lowest attendance threshold, flagged for follow-up.
    AtRisk,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Leader => "leader",
            Role::General => "general",
            Role::AtRisk => "at-risk",
        };
        f.write_str(label)
    }
}

/// Identifier of a small group.
///
/// Groups have no identity beyond their members; the id is a sequential
/// number assigned during distribution, and its numeric ordering is the
/// natural sort of the output.
///
/// # Example
///
/// ```
/// use flocksort_core::GroupId;
///
/// assert_eq!(GroupId(7).to_string(), "group 7");
/// assert!(GroupId(2) < GroupId(10));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl GroupId {
    /// Returns the numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group {}", self.0)
    }
}

/// One raw roster record, as supplied by the I/O collaborator.
///
/// All three fields are required on the source table; `age` and `attendance`
/// may still hold arbitrary scalars and are cleaned during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMember {
    pub name: String,
    pub age: String,
    pub attendance: String,
}

impl RawMember {
    /// Creates a raw record.
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        attendance: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            attendance: attendance.into(),
        }
    }
}

/// One normalized roster member.
///
/// `raw_age` is the display age and is never altered after construction.
/// `band_age` is the banding key: it starts equal to `clean_age` and is the
/// only age field the include pre-alignment pass may overwrite, so a later
/// pass can never read a clobbered display value.
///
/// Group membership is arena-style: the member list plus this `group` field
/// is the single source of truth, and groups are materialized on demand by
/// scanning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name within a run, whitespace-trimmed.
    pub name: String,
    /// Verbatim age input.
    pub raw_age: String,
    /// Cleaned age; invalid input replaced with the population mean.
    pub clean_age: u32,
    /// Banding key, initially equal to `clean_age`.
    pub band_age: u32,
    /// Verbatim attendance input.
    pub attendance_raw: String,
    /// Derived attendance bucket.
    pub grade: AttendanceGrade,
    /// Ordinal engagement score derived from the grade.
    pub score: u8,
    /// Current classification.
    pub role: Role,
    /// Assigned group, if distribution has run.
    pub group: Option<GroupId>,
}

impl Person {
    /// Returns true when this member matches a constraint target name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name.trim()
    }
}
