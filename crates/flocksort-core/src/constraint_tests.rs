//! Tests for constraint set queries and lenient record parsing.

use crate::constraint::{Constraint, ConstraintRecord, ConstraintSet};

fn sample_set() -> ConstraintSet {
    [
        Constraint::leader("Ann", "").unwrap(),
        Constraint::include("Bob", "Cho", "carpool").unwrap(),
        Constraint::exclude("Dan", "Eve", "").unwrap(),
        Constraint::leader("Ann", "duplicate row").unwrap(),
        Constraint::leader("Fay", "").unwrap(),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_leaders_deduplicated_in_order() {
    assert_eq!(sample_set().leaders(), vec!["Ann", "Fay"]);
}

#[test]
fn test_pair_queries() {
    let set = sample_set();
    assert_eq!(set.include_pairs(), vec![("Bob", "Cho")]);
    assert_eq!(set.exclude_pairs(), vec![("Dan", "Eve")]);
}

#[test]
fn test_unknown_names() {
    let set = sample_set();
    let roster = ["Ann", "Bob", "Cho", "Dan"];
    assert_eq!(
        set.unknown_names(roster),
        vec!["Eve".to_string(), "Fay".to_string()]
    );
}

#[test]
fn test_from_records_parses_canonical_labels() {
    let records = [
        ConstraintRecord::new("LEADER", "Ann", "", ""),
        ConstraintRecord::new("include", "Bob", "Cho", "carpool"),
        ConstraintRecord::new("Exclude", "Dan", "Eve", ""),
    ];
    let set = ConstraintSet::from_records(&records);
    assert_eq!(set.len(), 3);
    assert_eq!(set.leaders(), vec!["Ann"]);
    assert_eq!(set.include_pairs(), vec![("Bob", "Cho")]);
    assert_eq!(set.exclude_pairs(), vec![("Dan", "Eve")]);
}

#[test]
fn test_from_records_parses_localized_labels() {
    let records = [
        ConstraintRecord::new("리더", "Ann", "", ""),
        ConstraintRecord::new("포함", "Bob", "Cho", ""),
        ConstraintRecord::new("분리", "Dan", "Eve", ""),
    ];
    let set = ConstraintSet::from_records(&records);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_from_records_drops_bad_rows_individually() {
    let records = [
        ConstraintRecord::new("FRIEND", "Ann", "Bob", ""),
        ConstraintRecord::new("INCLUDE", "", "Bob", ""),
        ConstraintRecord::new("INCLUDE", "Bob", "", ""),
        ConstraintRecord::new("EXCLUDE", "Eve", "Eve", ""),
        ConstraintRecord::new("LEADER", "Fay", "", ""),
    ];
    let set = ConstraintSet::from_records(&records);
    assert_eq!(set.len(), 1);
    assert_eq!(set.leaders(), vec!["Fay"]);
}

#[test]
fn test_records_round_trip() {
    let set = sample_set();
    let round = ConstraintSet::from_records(&set.records());
    assert_eq!(round, set);
}

#[test]
fn test_record_serde_uses_type_key() {
    let record = ConstraintRecord::new("INCLUDE", "Ann", "Bob", "note");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "INCLUDE");
    assert_eq!(json["target1"], "Ann");
}
