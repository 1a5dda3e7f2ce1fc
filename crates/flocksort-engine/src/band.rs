//! Age banding.
//!
//! Partitions the working population into contiguous age bands of width
//! `2 × age_tolerance`, keyed by each member's banding age, then merges
//! undersized bands into neighbors in a single pass.

use flocksort_core::Person;

/// A half-open age interval `[start, end)` and the members inside it.
///
/// Purely a computation device: bands exist between banding and
/// distribution and are consumed by the distributor.
#[derive(Debug, Clone)]
pub struct AgeBand {
    pub start: u32,
    pub end: u32,
    pub members: Vec<Person>,
}

impl AgeBand {
    /// Number of members in the band.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when the band holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Interval membership test.
    pub fn contains(&self, age: u32) -> bool {
        self.start <= age && age < self.end
    }
}

/// Splits the population into contiguous bands keyed by `band_age`.
///
/// Bands start at the minimum banding age and cover through the maximum:
/// the final band's end is `max + 1`, so the oldest member is included.
/// Bands that receive no members are discarded.
pub fn build_bands(people: Vec<Person>, age_tolerance: u32) -> Vec<AgeBand> {
    let ages = people.iter().map(|p| p.band_age);
    let (Some(min_age), Some(max_age)) = (ages.clone().min(), ages.max()) else {
        return Vec::new();
    };

    let width = age_tolerance * 2;
    let mut bands = Vec::new();
    let mut current = min_age;
    while current <= max_age {
        let end = (current + width).min(max_age + 1);
        bands.push(AgeBand {
            start: current,
            end,
            members: Vec::new(),
        });
        current = end;
    }

    for person in people {
        if let Some(band) = bands.iter_mut().find(|b| b.contains(person.band_age)) {
            band.members.push(person);
        }
    }

    bands.retain(|band| !band.is_empty());
    bands
}

/// Merges undersized bands in a single pass.
///
/// A band below `threshold` members merges with the next band (both are
/// consumed), or with the previously emitted band when it is the last one.
/// Merged counts are not re-checked; the pass is deliberately not
/// recursive.
pub fn merge_small_bands(bands: Vec<AgeBand>, threshold: usize) -> Vec<AgeBand> {
    if bands.len() <= 1 {
        return bands;
    }

    let mut queue: std::collections::VecDeque<AgeBand> = bands.into();
    let mut merged: Vec<AgeBand> = Vec::new();

    while let Some(current) = queue.pop_front() {
        if current.len() < threshold {
            if let Some(next) = queue.pop_front() {
                merged.push(join(current, next));
                continue;
            }
            if let Some(previous) = merged.pop() {
                merged.push(join(previous, current));
                continue;
            }
        }
        merged.push(current);
    }

    merged
}

fn join(lower: AgeBand, upper: AgeBand) -> AgeBand {
    let mut members = lower.members;
    members.extend(upper.members);
    AgeBand {
        start: lower.start,
        end: upper.end,
        members,
    }
}
