//! Objection ranking.

use crate::snapshot::Snapshot;

/// A named objection counter and the metric key it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectionCounter {
    pub label: &'static str,
    pub key: &'static str,
}

/// The fixed set of tracked objections, in declaration order.
pub const OBJECTION_COUNTERS: [ObjectionCounter; 6] = [
    ObjectionCounter {
        label: "Timing",
        key: "objection_timing",
    },
    ObjectionCounter {
        label: "Budget",
        key: "objection_budget",
    },
    ObjectionCounter {
        label: "Price",
        key: "objection_price",
    },
    ObjectionCounter {
        label: "Trust",
        key: "objection_trust",
    },
    ObjectionCounter {
        label: "Competitor",
        key: "objection_competitor",
    },
    ObjectionCounter {
        label: "Complexity",
        key: "objection_complexity",
    },
];

/// One row of the ranked objection chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedObjection {
    pub label: &'static str,
    pub count: f64,
    /// Bar width relative to the largest count, `0..=100`.
    pub width_percent: f64,
    /// Set on the first row only, and only when its count is positive.
    pub highlighted: bool,
}

/// Rank `(label, count)` pairs by descending count.
///
/// Ties keep their input order. Negative counts are treated as zero.
#[must_use]
pub fn rank(counts: &[(&'static str, f64)]) -> Vec<RankedObjection> {
    let mut sorted: Vec<(&'static str, f64)> = counts
        .iter()
        .map(|&(label, count)| (label, count.max(0.0)))
        .collect();
    sorted.sort_by(|left, right| right.1.total_cmp(&left.1));

    let max = sorted
        .iter()
        .map(|&(_, count)| count)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, (label, count))| RankedObjection {
            label,
            count,
            width_percent: count / max * 100.0,
            highlighted: index == 0 && count > 0.0,
        })
        .collect()
}

/// Rank the given counters as read (leniently) from a snapshot.
#[must_use]
pub fn rank_snapshot(counters: &[ObjectionCounter], snapshot: &Snapshot) -> Vec<RankedObjection> {
    let counts: Vec<(&'static str, f64)> = counters
        .iter()
        .map(|counter| (counter.label, snapshot.number(counter.key)))
        .collect();
    rank(&counts)
}
