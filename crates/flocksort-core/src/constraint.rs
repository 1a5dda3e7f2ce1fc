//! Operator constraints.
//!
//! Constraints are a closed sum type so every resolution pass handles the
//! three kinds with an exhaustive match; adding a fourth kind is a
//! compile-time-checked change. Validation happens at construction time:
//! a pair constraint can never name the same person twice, and targets can
//! never be empty. Targets that are simply absent from the roster are not an
//! error; such a constraint is silently inert during resolution.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintError;

/// One operator-declared rule.
///
/// # Example
///
/// ```
/// use flocksort_core::Constraint;
///
/// let c = Constraint::include("Ann", "Bob", "siblings").unwrap();
/// assert!(c.involves("Bob"));
///
/// assert!(Constraint::exclude("Ann", "Ann", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Constraint {
    /// Pre-designates a member as a group leader.
    Leader {
        name: String,
        #[serde(default)]
        note: String,
    },
    /// Forces a pair to share a group.
    Include {
        first: String,
        second: String,
        #[serde(default)]
        note: String,
    },
    /// Forbids a pair from sharing a group.
    Exclude {
        first: String,
        second: String,
        #[serde(default)]
        note: String,
    },
}

impl Constraint {
    /// Creates a leader designation.
    pub fn leader(
        name: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, ConstraintError> {
        let name = checked_name(name)?;
        Ok(Constraint::Leader {
            name,
            note: note.into(),
        })
    }

    /// Creates an include (same-group) pair.
    pub fn include(
        first: impl Into<String>,
        second: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, ConstraintError> {
        let (first, second) = checked_pair(first, second)?;
        Ok(Constraint::Include {
            first,
            second,
            note: note.into(),
        })
    }

    /// Creates an exclude (different-group) pair.
    pub fn exclude(
        first: impl Into<String>,
        second: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, ConstraintError> {
        let (first, second) = checked_pair(first, second)?;
        Ok(Constraint::Exclude {
            first,
            second,
            note: note.into(),
        })
    }

    /// Returns true when the given name is one of this constraint's targets.
    pub fn involves(&self, name: &str) -> bool {
        let name = name.trim();
        match self {
            Constraint::Leader { name: n, .. } => n == name,
            Constraint::Include { first, second, .. }
            | Constraint::Exclude { first, second, .. } => first == name || second == name,
        }
    }

    /// Returns the operator note.
    pub fn note(&self) -> &str {
        match self {
            Constraint::Leader { note, .. }
            | Constraint::Include { note, .. }
            | Constraint::Exclude { note, .. } => note,
        }
    }

    /// Canonical label of the constraint kind.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Constraint::Leader { .. } => "LEADER",
            Constraint::Include { .. } => "INCLUDE",
            Constraint::Exclude { .. } => "EXCLUDE",
        }
    }
}

fn checked_name(name: impl Into<String>) -> Result<String, ConstraintError> {
    let name = name.into().trim().to_string();
    if name.is_empty() {
        return Err(ConstraintError::MissingTarget);
    }
    Ok(name)
}

fn checked_pair(
    first: impl Into<String>,
    second: impl Into<String>,
) -> Result<(String, String), ConstraintError> {
    let first = checked_name(first)?;
    let second = checked_name(second)?;
    if first == second {
        return Err(ConstraintError::SelfPair(first));
    }
    Ok((first, second))
}

/// Flat record form of a constraint, for sheet-shaped I/O.
///
/// This is the shape the I/O collaborator reads from and writes back to the
/// constraint sheet; `ConstraintSet::from_records` parses it leniently and
/// `ConstraintSet::records` re-emits it for persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintRecord {
    /// Kind label: `LEADER`/`INCLUDE`/`EXCLUDE` or a localized form.
    #[serde(rename = "type")]
    pub kind: String,
    pub target1: String,
    #[serde(default)]
    pub target2: String,
    #[serde(default)]
    pub note: String,
}

impl ConstraintRecord {
    /// Creates a record.
    pub fn new(
        kind: impl Into<String>,
        target1: impl Into<String>,
        target2: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            target1: target1.into(),
            target2: target2.into(),
            note: note.into(),
        }
    }
}

/// An ordered collection of constraints.
///
/// Declaration order is preserved; resolution passes iterate in this order,
/// so chained include pairs propagate through the most recent value. The set
/// is treated as immutable once resolution begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a constraint.
    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true when the set holds no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterates the constraints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Names designated as leaders, in declaration order, de-duplicated.
    pub fn leaders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut leaders = Vec::new();
        for constraint in &self.constraints {
            if let Constraint::Leader { name, .. } = constraint {
                if seen.insert(name.as_str()) {
                    leaders.push(name.as_str());
                }
            }
        }
        leaders
    }

    /// Include pairs in declaration order.
    pub fn include_pairs(&self) -> Vec<(&str, &str)> {
        self.constraints
            .iter()
            .filter_map(|c| match c {
                Constraint::Include { first, second, .. } => {
                    Some((first.as_str(), second.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Exclude pairs in declaration order.
    pub fn exclude_pairs(&self) -> Vec<(&str, &str)> {
        self.constraints
            .iter()
            .filter_map(|c| match c {
                Constraint::Exclude { first, second, .. } => {
                    Some((first.as_str(), second.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns constraint targets that do not appear in the roster.
    ///
    /// Diagnostic only; unmatched targets leave their constraint inert
    /// rather than failing the run.
    pub fn unknown_names<'a>(&self, roster: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let known: HashSet<&str> = roster.into_iter().map(str::trim).collect();
        let mut seen = HashSet::new();
        let mut unknown = Vec::new();
        for constraint in &self.constraints {
            let targets: [&str; 2] = match constraint {
                Constraint::Leader { name, .. } => [name, ""],
                Constraint::Include { first, second, .. }
                | Constraint::Exclude { first, second, .. } => [first, second],
            };
            for target in targets {
                if !target.is_empty() && !known.contains(target) && seen.insert(target) {
                    unknown.push(target.to_string());
                }
            }
        }
        unknown
    }

    /// Parses sheet records leniently.
    ///
    /// Rows with an unrecognized kind label, a missing `target1`, a missing
    /// pair partner, or a self-pair are dropped individually; a bad row
    /// never fails the whole set. Localized kind labels from the legacy
    /// sheets are accepted alongside the canonical ones.
    pub fn from_records(records: &[ConstraintRecord]) -> Self {
        let mut set = ConstraintSet::new();
        for record in records {
            let kind = record.kind.trim();
            let constraint = if kind.eq_ignore_ascii_case("LEADER") || kind == "리더" {
                Constraint::leader(record.target1.as_str(), record.note.as_str())
            } else if kind.eq_ignore_ascii_case("INCLUDE") || kind == "포함" {
                Constraint::include(
                    record.target1.as_str(),
                    record.target2.as_str(),
                    record.note.as_str(),
                )
            } else if kind.eq_ignore_ascii_case("EXCLUDE") || kind == "분리" {
                Constraint::exclude(
                    record.target1.as_str(),
                    record.target2.as_str(),
                    record.note.as_str(),
                )
            } else {
                continue;
            };
            if let Ok(constraint) = constraint {
                set.push(constraint);
            }
        }
        set
    }

    /// Re-emits the set as flat records for persistence.
    pub fn records(&self) -> Vec<ConstraintRecord> {
        self.constraints
            .iter()
            .map(|c| match c {
                Constraint::Leader { name, note } => {
                    ConstraintRecord::new(c.kind_label(), name, "", note)
                }
                Constraint::Include {
                    first,
                    second,
                    note,
                }
                | Constraint::Exclude {
                    first,
                    second,
                    note,
                } => ConstraintRecord::new(c.kind_label(), first, second, note),
            })
            .collect()
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_rejects_self() {
        let err = Constraint::include("Ann", " Ann ", "").unwrap_err();
        assert_eq!(err, ConstraintError::SelfPair("Ann".to_string()));
    }

    #[test]
    fn test_pair_rejects_empty_target() {
        assert_eq!(
            Constraint::exclude("Ann", "  ", "").unwrap_err(),
            ConstraintError::MissingTarget
        );
        assert_eq!(
            Constraint::leader("", "").unwrap_err(),
            ConstraintError::MissingTarget
        );
    }

    #[test]
    fn test_targets_are_trimmed() {
        let c = Constraint::include(" Ann ", " Bob ", "").unwrap();
        assert!(c.involves("Ann"));
        assert!(c.involves("  Bob"));
        assert!(!c.involves("Cho"));
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(Constraint::leader("Ann", "").unwrap().kind_label(), "LEADER");
        assert_eq!(
            Constraint::exclude("Ann", "Bob", "").unwrap().kind_label(),
            "EXCLUDE"
        );
    }
}
