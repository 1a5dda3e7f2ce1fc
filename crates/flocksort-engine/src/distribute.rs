//! Balanced distribution inside one age band.
//!
//! Members are sorted by engagement score and dealt into groups in a
//! zig-zag ("snake") pattern, so every group receives a near-identical mix
//! of high- and low-attendance members regardless of the band size.

use flocksort_core::{GroupId, Person};

/// Computes the number of groups for a band of `n` members.
///
/// Actual group sizes are kept within 80%..120% of the target: the ideal
/// count (`n / group_size`, half-to-even rounding) is clamped between the
/// fewest groups that respect the 120% cap and the most groups that respect
/// the 80% floor. The floor wins when the two bounds cross.
pub fn group_count(n: usize, group_size: usize) -> usize {
    let min_per_group = (group_size * 4 / 5).max(1);
    let max_per_group = group_size * 6 / 5;

    let min_groups = n.div_ceil(max_per_group).max(1);
    let max_groups = (n / min_per_group).max(1);
    let ideal_groups = (n as f64 / group_size as f64).round_ties_even() as usize;

    min_groups.max(ideal_groups.min(max_groups))
}

/// Deals a band's members into `num_groups` band-local groups.
///
/// Stable-sorts by score descending (ties keep their original order), then
/// walks the sequence in rows of `num_groups`: even rows assign group
/// indices left-to-right, odd rows right-to-left. The local index is
/// written to each member's `group` field; the engine remaps it to a global
/// id afterwards.
pub fn snake_distribute(mut members: Vec<Person>, num_groups: usize) -> Vec<Person> {
    members.sort_by(|a, b| b.score.cmp(&a.score));

    for (idx, person) in members.iter_mut().enumerate() {
        let row = idx / num_groups;
        let pos = idx % num_groups;
        let local = if row % 2 == 0 {
            pos
        } else {
            num_groups - 1 - pos
        };
        person.group = Some(GroupId(local as u32));
    }

    members
}
