//! Engine entry point.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::debug;

use flocksort_config::{ConfigError, EngineConfig};
use flocksort_core::{ConstraintSet, GroupId, Person, RawMember};

use crate::assignment::Assignment;
use crate::band::{build_bands, merge_small_bands};
use crate::distribute::{group_count, snake_distribute};
use crate::normalize::normalize;
use crate::resolve::{
    enforce_includes, extract_leaders, prealign_include_ages, promote_leaders, reinsert_leaders,
    repair_excludes,
};

/// Engine error.
///
/// Data-shape problems never surface here; the only caller-visible failure
/// from a run is a configuration that fails validation before any
/// partitioning begins.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// The grouping engine.
///
/// One run is a pure function of `(records, constraints, configuration)`:
/// nothing persists between runs, and the pipeline is a fixed sequence of
/// by-value passes.
///
/// # Example
///
/// ```
/// use flocksort_config::EngineConfig;
/// use flocksort_core::RawMember;
/// use flocksort_engine::Engine;
///
/// let roster: Vec<RawMember> = (1..=10)
///     .map(|i| RawMember::new(format!("Member{i}"), "30", "A"))
///     .collect();
///
/// let engine = Engine::new(EngineConfig::new().with_group_size(5));
/// let assignment = engine.run(&roster).unwrap();
/// assert_eq!(assignment.len(), 10);
/// assert_eq!(assignment.group_ids().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    constraints: ConstraintSet,
}

impl Engine {
    /// Creates an engine with the given configuration and no constraints.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            constraints: ConstraintSet::new(),
        }
    }

    /// Sets the constraint set.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the constraint set.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Runs the full grouping pipeline.
    ///
    /// An empty roster yields an empty assignment, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when the configuration fails
    /// validation; no partitioning happens in that case.
    pub fn run(&self, records: &[RawMember]) -> Result<Assignment, EngineError> {
        self.config.validate()?;

        let people = normalize(records);
        debug!(count = people.len(), "normalized roster");

        let (working, leaders) = extract_leaders(people, &self.constraints);
        if working.is_empty() && leaders.is_empty() {
            return Ok(Assignment::default());
        }

        let working = prealign_include_ages(working, &self.constraints);
        let bands = build_bands(working, self.config.age_tolerance);
        let threshold = self.config.group_size * 4 / 5;
        let bands = merge_small_bands(bands, threshold);
        debug!(bands = bands.len(), "built age bands");

        let mut assigned: Vec<Person> = Vec::new();
        let mut next_group = 1u32;
        for band in bands {
            let num_groups = group_count(band.members.len(), self.config.group_size);
            let members = snake_distribute(band.members, num_groups);
            let members = enforce_includes(members, &self.constraints);
            let (members, next) = renumber(members, next_group);
            next_group = next;
            assigned.extend(members);
        }
        debug!(groups = next_group - 1, "distributed into groups");

        let assigned = enforce_includes(assigned, &self.constraints);
        let assigned = repair_excludes(assigned, &self.constraints);
        let assigned = reinsert_leaders(assigned, leaders);
        let assigned = promote_leaders(assigned);

        Ok(Assignment::new(assigned))
    }
}

/// Maps band-local group indices to sequential global ids.
///
/// Only the local indices still populated after the band-local include pass
/// receive a global id, so an include relocation never leaves an empty
/// global group behind.
fn renumber(mut members: Vec<Person>, start: u32) -> (Vec<Person>, u32) {
    let locals: BTreeSet<GroupId> = members.iter().filter_map(|p| p.group).collect();
    let mapping: BTreeMap<GroupId, GroupId> = locals
        .into_iter()
        .enumerate()
        .map(|(offset, local)| (local, GroupId(start + offset as u32)))
        .collect();

    for person in members.iter_mut() {
        if let Some(local) = person.group {
            person.group = mapping.get(&local).copied();
        }
    }
    (members, start + mapping.len() as u32)
}
