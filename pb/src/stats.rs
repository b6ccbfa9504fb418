//! Statistics aggregator
//!
//! Pure, stateless functions of a document snapshot. Recomputed on every
//! read; nothing here caches or mutates.
//!
//! Percentages round independently at each site (standard rounding), so a
//! domain breakdown may sum to 99 or 101. That drift is accepted and left
//! uncorrected.

use serde::Serialize;

use crate::domain::{Group, PlannerDocument, Sprint};

/// Label used for committed items with no domain tag
pub const UNASSIGNED: &str = "Unassigned";

/// Point totals for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GroupStats {
    pub required: i64,
    pub optional: i64,
}

/// One domain's share of the committed required points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainShare {
    pub name: String,
    pub points: i64,
    /// Percent of the breakdown's own point total, not of capacity
    pub percent: i64,
}

/// Sum required/optional points over one group (absence counts as 0)
pub fn group_stats(doc: &PlannerDocument, group: Group) -> GroupStats {
    let mut stats = GroupStats::default();
    for item in doc.group(group) {
        stats.required += item.required_points.unwrap_or(0);
        stats.optional += item.optional_points.unwrap_or(0);
    }
    stats
}

/// Total capacity over the sprint schedule: sum of velocity scaled by each
/// sprint's multiplier percentage
pub fn total_capacity(sprints: &[Sprint], velocity: i64) -> f64 {
    sprints
        .iter()
        .map(|s| velocity as f64 * s.multiplier as f64 / 100.0)
        .sum()
}

/// Committed required points as a percentage of total capacity; 0 when
/// there is no capacity
pub fn committed_percent(doc: &PlannerDocument) -> i64 {
    let capacity = total_capacity(&doc.sprints, doc.velocity);
    if capacity <= 0.0 {
        return 0;
    }
    let required = group_stats(doc, Group::Committed).required;
    (required as f64 / capacity * 100.0).round() as i64
}

/// Capacity left after committed required points. Negative means
/// overcommitted - a display state, not an error.
pub fn committed_remaining(doc: &PlannerDocument) -> i64 {
    let capacity = total_capacity(&doc.sprints, doc.velocity);
    let required = group_stats(doc, Group::Committed).required;
    (capacity - required as f64).round() as i64
}

/// Break committed required points down by domain.
///
/// Items without a domain fall under [`UNASSIGNED`]. Domains whose summed
/// points are zero are excluded. Sorted descending by points; ties break
/// by name so output order is deterministic. Percentages are of the
/// breakdown's own total, not of sprint capacity.
pub fn domain_breakdown(doc: &PlannerDocument) -> Vec<DomainShare> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    for item in doc.group(Group::Committed) {
        let points = item.required_points.unwrap_or(0);
        if points == 0 {
            continue;
        }
        let name = item
            .domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(UNASSIGNED);
        match totals.iter_mut().find(|(n, _)| n == name) {
            Some((_, sum)) => *sum += points,
            None => totals.push((name.to_string(), points)),
        }
    }

    let grand_total: i64 = totals.iter().map(|(_, p)| p).sum();
    let mut shares: Vec<DomainShare> = totals
        .into_iter()
        .filter(|(_, points)| *points != 0)
        .map(|(name, points)| DomainShare {
            name,
            points,
            percent: if grand_total > 0 {
                (points as f64 / grand_total as f64 * 100.0).round() as i64
            } else {
                0
            },
        })
        .collect();

    shares.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    shares
}
