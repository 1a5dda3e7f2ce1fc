//! Constraint resolution passes.
//!
//! Each pass consumes the previous pass's output and returns a new version,
//! so the pipeline is a pure sequence of transformations that can be tested
//! in isolation. The engine wires the passes in their fixed order: leader
//! extraction and include pre-alignment before distribution, include
//! enforcement and exclude repair after it, leader reinsertion and
//! auto-promotion last.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{trace, warn};

use flocksort_core::{ConstraintSet, GroupId, Person, Role};

/// Hard ceiling on exclude-repair rounds.
///
/// The repair loop is a greedy heuristic, not a solver; pathological
/// constraint topologies can starve it, so it stops after this many rounds
/// and leaves the residual conflicts to the violation checker.
pub const MAX_EXCLUDE_ROUNDS: usize = 50;

/// Splits out every person named by a LEADER constraint.
///
/// The remaining population goes through banding and distribution; the
/// extracted leaders are reinserted by [`reinsert_leaders`] once groups
/// exist.
pub fn extract_leaders(
    people: Vec<Person>,
    constraints: &ConstraintSet,
) -> (Vec<Person>, Vec<Person>) {
    let leader_names = constraints.leaders();
    if leader_names.is_empty() {
        return (people, Vec::new());
    }

    let mut working = Vec::new();
    let mut leaders = Vec::new();
    for person in people {
        if leader_names.iter().any(|name| person.is_named(name)) {
            leaders.push(person);
        } else {
            working.push(person);
        }
    }
    (working, leaders)
}

/// Aligns include pairs' banding keys so both land in the same age band.
///
/// The second member takes the first member's *current* banding key, in
/// declaration order, so chained pairs propagate. Display age is never
/// touched; only the banding key moves.
pub fn prealign_include_ages(
    mut people: Vec<Person>,
    constraints: &ConstraintSet,
) -> Vec<Person> {
    for (first, second) in constraints.include_pairs() {
        let Some(band_age) = people
            .iter()
            .find(|p| p.is_named(first))
            .map(|p| p.band_age)
        else {
            continue;
        };
        for person in people.iter_mut().filter(|p| p.is_named(second)) {
            person.band_age = band_age;
        }
    }
    people
}

/// Forces include pairs into the first member's group.
///
/// Applied twice by the engine: on band-local indices right after the snake
/// pass, and on global ids after renumbering. Pairs with an absent member
/// are skipped.
pub fn enforce_includes(mut people: Vec<Person>, constraints: &ConstraintSet) -> Vec<Person> {
    for (first, second) in constraints.include_pairs() {
        let Some(group) = people
            .iter()
            .find(|p| p.is_named(first))
            .and_then(|p| p.group)
        else {
            continue;
        };
        for person in people.iter_mut().filter(|p| p.is_named(second)) {
            person.group = Some(group);
        }
    }
    people
}

/// Iteratively separates exclude pairs.
///
/// Runs up to [`MAX_EXCLUDE_ROUNDS`] rounds. A same-group pair relocates
/// its second member to the least-populated *other* group (lowest id on
/// ties), with group sizes recomputed after every relocation; a round with
/// no relocations stops the loop early. The destination choice does not
/// check whether it introduces a new conflict with a different excluded
/// partner; later rounds pick those up, or the ceiling is reached and the
/// conflicts stay visible to the violation checker.
pub fn repair_excludes(mut people: Vec<Person>, constraints: &ConstraintSet) -> Vec<Person> {
    let pairs = constraints.exclude_pairs();
    if pairs.is_empty() {
        return people;
    }

    for _ in 0..MAX_EXCLUDE_ROUNDS {
        let mut relocated = false;
        for &(first, second) in &pairs {
            let Some(first_group) = people
                .iter()
                .find(|p| p.is_named(first))
                .and_then(|p| p.group)
            else {
                continue;
            };
            let Some(second_group) = people
                .iter()
                .find(|p| p.is_named(second))
                .and_then(|p| p.group)
            else {
                continue;
            };
            if first_group != second_group {
                continue;
            }

            let Some(target) = least_populated_other(&people, first_group) else {
                continue;
            };
            trace!(first, second, from = %first_group, to = %target, "relocating excluded member");
            for person in people.iter_mut().filter(|p| p.is_named(second)) {
                person.group = Some(target);
            }
            relocated = true;
        }
        if !relocated {
            return people;
        }
    }

    warn!(
        rounds = MAX_EXCLUDE_ROUNDS,
        "exclude repair ceiling reached with conflicts outstanding"
    );
    people
}

fn least_populated_other(people: &[Person], exclude: GroupId) -> Option<GroupId> {
    let mut sizes: BTreeMap<GroupId, usize> = BTreeMap::new();
    for person in people {
        if let Some(group) = person.group {
            *sizes.entry(group).or_insert(0) += 1;
        }
    }
    sizes.remove(&exclude);
    sizes
        .into_iter()
        .min_by_key(|&(group, count)| (count, group))
        .map(|(group, _)| group)
}

/// Reinserts designated leaders into age-compatible groups.
///
/// Group mean ages are computed once, up front. Each leader then joins the
/// still-leaderless group whose mean age is closest to their own (lowest id
/// on ties); once every group has a leader, the remaining leaders go to the
/// closest group regardless. Reinserted members get [`Role::Leader`].
///
/// When no groups exist at all (everyone was extracted as a leader), each
/// leader founds a group of their own so nobody is lost.
pub fn reinsert_leaders(mut people: Vec<Person>, leaders: Vec<Person>) -> Vec<Person> {
    if leaders.is_empty() {
        return people;
    }

    let mut sums: BTreeMap<GroupId, (u64, usize)> = BTreeMap::new();
    for person in &people {
        if let Some(group) = person.group {
            let entry = sums.entry(group).or_insert((0, 0));
            entry.0 += u64::from(person.clean_age);
            entry.1 += 1;
        }
    }
    let means: BTreeMap<GroupId, f64> = sums
        .into_iter()
        .map(|(group, (sum, count))| (group, sum as f64 / count as f64))
        .collect();

    if means.is_empty() {
        for (idx, mut leader) in leaders.into_iter().enumerate() {
            leader.role = Role::Leader;
            leader.group = Some(GroupId(idx as u32 + 1));
            people.push(leader);
        }
        return people;
    }

    let mut groups_with_leader: HashSet<GroupId> = people
        .iter()
        .filter(|p| p.role == Role::Leader)
        .filter_map(|p| p.group)
        .collect();

    for mut leader in leaders {
        let available: Vec<GroupId> = means
            .keys()
            .copied()
            .filter(|group| !groups_with_leader.contains(group))
            .collect();
        let candidates = if available.is_empty() {
            means.keys().copied().collect()
        } else {
            available
        };

        let target = closest_by_mean_age(&candidates, &means, leader.clean_age);
        trace!(name = %leader.name, group = %target, "reinserting designated leader");
        leader.role = Role::Leader;
        leader.group = Some(target);
        groups_with_leader.insert(target);
        people.push(leader);
    }
    people
}

fn closest_by_mean_age(
    candidates: &[GroupId],
    means: &BTreeMap<GroupId, f64>,
    age: u32,
) -> GroupId {
    let mut best = candidates[0];
    let mut best_diff = f64::INFINITY;
    for &group in candidates {
        let diff = (means[&group] - f64::from(age)).abs();
        if diff < best_diff {
            best = group;
            best_diff = diff;
        }
    }
    best
}

/// Promotes one member to leader in every group that lacks one.
///
/// Non-at-risk members are preferred, ordered by score descending then age
/// descending (stable); a group consisting only of at-risk members promotes
/// its best by the same ordering. Exactly one member per group is promoted.
pub fn promote_leaders(mut people: Vec<Person>) -> Vec<Person> {
    let groups: BTreeSet<GroupId> = people.iter().filter_map(|p| p.group).collect();

    for group in groups {
        let has_leader = people
            .iter()
            .any(|p| p.group == Some(group) && p.role == Role::Leader);
        if has_leader {
            continue;
        }

        let members: Vec<usize> = people
            .iter()
            .enumerate()
            .filter(|(_, p)| p.group == Some(group))
            .map(|(idx, _)| idx)
            .collect();
        let preferred: Vec<usize> = members
            .iter()
            .copied()
            .filter(|&idx| people[idx].role != Role::AtRisk)
            .collect();
        let candidates = if preferred.is_empty() { members } else { preferred };

        let mut best: Option<usize> = None;
        for idx in candidates {
            let better = match best {
                None => true,
                Some(current) => {
                    (people[idx].score, people[idx].clean_age)
                        > (people[current].score, people[current].clean_age)
                }
            };
            if better {
                best = Some(idx);
            }
        }
        if let Some(idx) = best {
            people[idx].role = Role::Leader;
        }
    }
    people
}
