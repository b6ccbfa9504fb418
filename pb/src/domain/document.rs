//! PlannerDocument - the root aggregate

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::group::Group;
use super::item::Item;
use super::sprint::Sprint;

/// Sprints in the built-in starter schedule
const STARTER_SPRINT_COUNT: usize = 6;

/// The canonical planner state: sprint schedule, velocity, and the seven
/// ordered item groups.
///
/// Invariant: every one of the seven group keys is always present
/// (possibly empty). Partial documents from stale persisted data or
/// partial import are repaired on deserialization, never left with a
/// group absent. Deserialization merges over defaults field by field, so
/// any JSON object is accepted; unrecognized fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct PlannerDocument {
    /// Ordered sprint schedule; order is display order
    pub sprints: Vec<Sprint>,
    /// Nominal story-point throughput per full-capacity sprint
    pub velocity: i64,
    /// The seven ordered item groups, always all present
    pub items: BTreeMap<Group, Vec<Item>>,
}

impl Default for PlannerDocument {
    /// The built-in default document: starter sprint schedule at full
    /// capacity, zeroed velocity baseline, all groups empty.
    ///
    /// Starter sprint ids are fixed strings so repeated defaulting (e.g.
    /// two loads with nothing persisted) yields equal documents.
    fn default() -> Self {
        let sprints = (1..=STARTER_SPRINT_COUNT)
            .map(|n| Sprint::new(format!("sprint-{}", n), format!("Sprint {}", n), 100))
            .collect();
        Self {
            sprints,
            velocity: 0,
            items: empty_groups(),
        }
    }
}

impl PlannerDocument {
    /// Items of one group, in order
    pub fn group(&self, group: Group) -> &[Item] {
        // Every group key is present by construction
        self.items.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Locate an item anywhere in the document: (group, index)
    pub fn find_item(&self, item_id: &str) -> Option<(Group, usize)> {
        for group in Group::ALL {
            if let Some(idx) = self.group(group).iter().position(|i| i.id == item_id) {
                return Some((group, idx));
            }
        }
        None
    }

    /// Iterate all items across all groups, in group display order
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        Group::ALL.into_iter().flat_map(|g| self.group(g).iter())
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        Group::ALL.iter().map(|g| self.group(*g).len()).sum()
    }
}

fn empty_groups() -> BTreeMap<Group, Vec<Item>> {
    Group::ALL.into_iter().map(|g| (g, Vec::new())).collect()
}

/// Tolerant wire shape: every field optional, unknown group keys dropped
#[derive(Deserialize)]
#[serde(default)]
struct RawDocument {
    sprints: Vec<Sprint>,
    velocity: i64,
    items: BTreeMap<String, Vec<Item>>,
}

impl Default for RawDocument {
    fn default() -> Self {
        let defaults = PlannerDocument::default();
        Self {
            sprints: defaults.sprints,
            velocity: defaults.velocity,
            items: BTreeMap::new(),
        }
    }
}

impl From<RawDocument> for PlannerDocument {
    fn from(mut raw: RawDocument) -> Self {
        let mut items = empty_groups();
        for group in Group::ALL {
            if let Some(seq) = raw.items.remove(group.key()) {
                items.insert(group, seq);
            }
        }
        Self {
            sprints: raw.sprints,
            velocity: raw.velocity,
            items,
        }
    }
}
