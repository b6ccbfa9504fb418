//! Item mutation engine
//!
//! Pure copy-on-write operations on a [`PlannerDocument`] snapshot: every
//! function takes the current document and returns a new one, leaving the
//! input untouched. Missing ids are silent no-ops (the returned document
//! equals the input), per the single-actor model: a stale id can only come
//! from a stale UI reference, which is not a core error.
//!
//! None of these touch storage or color state; callers persist the
//! resulting snapshot (see [`crate::board`]).

use tracing::debug;

use crate::domain::{Group, Item, PlannerDocument, SubItem};

/// Direction for [`reorder_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Partial update for [`update_item`].
///
/// Outer `None` leaves the field alone; for optional item fields,
/// `Some(None)` clears and `Some(Some(v))` sets, mirroring the partial
/// object merge the UI sends.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub text: Option<String>,
    pub epic: Option<Option<String>>,
    pub domain: Option<Option<String>>,
    pub required_points: Option<Option<i64>>,
    pub optional_points: Option<Option<i64>>,
}

/// Append a new empty item to `group`; returns the new document and the
/// fresh item id
pub fn add_item(doc: &PlannerDocument, group: Group) -> (PlannerDocument, String) {
    debug!(%group, "add_item: called");
    let item = Item::new();
    let id = item.id.clone();
    let mut next = doc.clone();
    next.items.entry(group).or_default().push(item);
    (next, id)
}

/// Merge `patch` into the item matching `item_id` in `group`
pub fn update_item(doc: &PlannerDocument, group: Group, item_id: &str, patch: ItemPatch) -> PlannerDocument {
    debug!(%group, %item_id, "update_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group)
        && let Some(item) = items.iter_mut().find(|i| i.id == item_id)
    {
        if let Some(text) = patch.text {
            item.text = text;
        }
        if let Some(epic) = patch.epic {
            item.epic = epic;
        }
        if let Some(domain) = patch.domain {
            item.domain = domain;
        }
        if let Some(required) = patch.required_points {
            item.required_points = required;
        }
        if let Some(optional) = patch.optional_points {
            item.optional_points = optional;
        }
    }
    next
}

/// Remove the item matching `item_id` from `group`
pub fn delete_item(doc: &PlannerDocument, group: Group, item_id: &str) -> PlannerDocument {
    debug!(%group, %item_id, "delete_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group) {
        items.retain(|i| i.id != item_id);
    }
    next
}

/// Append a clone of the item matching `item_id` to the same group, under
/// fresh ids for the item and every sub-item
pub fn duplicate_item(doc: &PlannerDocument, group: Group, item_id: &str) -> PlannerDocument {
    debug!(%group, %item_id, "duplicate_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group) {
        let copy = items.iter().find(|i| i.id == item_id).map(Item::duplicated);
        if let Some(copy) = copy {
            items.push(copy);
        }
    }
    next
}

/// Swap the item with its immediate neighbor in `direction`.
///
/// No-op at sequence boundaries (first item up, last item down) or when
/// the id is not found.
pub fn reorder_item(doc: &PlannerDocument, group: Group, item_id: &str, direction: Direction) -> PlannerDocument {
    debug!(%group, %item_id, ?direction, "reorder_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group)
        && let Some(idx) = items.iter().position(|i| i.id == item_id)
    {
        match direction {
            Direction::Up if idx > 0 => items.swap(idx, idx - 1),
            Direction::Down if idx + 1 < items.len() => items.swap(idx, idx + 1),
            _ => {}
        }
    }
    next
}

/// Relocate the item to the end of `target` group.
///
/// A relocation, never a copy: the item leaves `source` entirely. No-op if
/// the id is not found in `source` or the groups are equal.
pub fn move_item_to_group(doc: &PlannerDocument, source: Group, item_id: &str, target: Group) -> PlannerDocument {
    debug!(%source, %item_id, %target, "move_item_to_group: called");
    if source == target {
        return doc.clone();
    }
    let mut next = doc.clone();
    let taken = take_item(&mut next, source, item_id);
    if let Some(item) = taken {
        next.items.entry(target).or_default().push(item);
    }
    next
}

/// Relocate the item from `source` into `target` at `index`, shifting
/// subsequent items right. An out-of-range index appends.
pub fn insert_item_at(
    doc: &PlannerDocument,
    source: Group,
    item_id: &str,
    target: Group,
    index: usize,
) -> PlannerDocument {
    debug!(%source, %item_id, %target, index, "insert_item_at: called");
    let mut next = doc.clone();
    let taken = take_item(&mut next, source, item_id);
    if let Some(item) = taken {
        let items = next.items.entry(target).or_default();
        let at = index.min(items.len());
        items.insert(at, item);
    }
    next
}

/// Move the item to `index` within its own group, shifting the items in
/// between by one
pub fn move_item_within(doc: &PlannerDocument, group: Group, item_id: &str, index: usize) -> PlannerDocument {
    debug!(%group, %item_id, index, "move_item_within: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group)
        && let Some(from) = items.iter().position(|i| i.id == item_id)
    {
        let item = items.remove(from);
        let at = index.min(items.len());
        items.insert(at, item);
    }
    next
}

/// Append a new sub-item to the item matching `item_id`
pub fn add_sub_item(doc: &PlannerDocument, group: Group, item_id: &str, text: &str) -> PlannerDocument {
    debug!(%group, %item_id, "add_sub_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group)
        && let Some(item) = items.iter_mut().find(|i| i.id == item_id)
    {
        item.sub_items.push(SubItem::new(text));
    }
    next
}

/// Replace the text of one sub-item of the item matching `item_id`
pub fn update_sub_item(
    doc: &PlannerDocument,
    group: Group,
    item_id: &str,
    sub_id: &str,
    text: &str,
) -> PlannerDocument {
    debug!(%group, %item_id, %sub_id, "update_sub_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group)
        && let Some(item) = items.iter_mut().find(|i| i.id == item_id)
        && let Some(sub) = item.sub_items.iter_mut().find(|s| s.id == sub_id)
    {
        sub.text = text.to_string();
    }
    next
}

/// Remove one sub-item of the item matching `item_id`
pub fn remove_sub_item(doc: &PlannerDocument, group: Group, item_id: &str, sub_id: &str) -> PlannerDocument {
    debug!(%group, %item_id, %sub_id, "remove_sub_item: called");
    let mut next = doc.clone();
    if let Some(items) = next.items.get_mut(&group)
        && let Some(item) = items.iter_mut().find(|i| i.id == item_id)
    {
        item.sub_items.retain(|s| s.id != sub_id);
    }
    next
}

/// Set the nominal velocity
pub fn set_velocity(doc: &PlannerDocument, velocity: i64) -> PlannerDocument {
    debug!(velocity, "set_velocity: called");
    let mut next = doc.clone();
    next.velocity = velocity;
    next
}

/// Set one sprint's velocity multiplier percentage
pub fn set_sprint_multiplier(doc: &PlannerDocument, sprint_id: &str, multiplier: i64) -> PlannerDocument {
    debug!(%sprint_id, multiplier, "set_sprint_multiplier: called");
    let mut next = doc.clone();
    if let Some(sprint) = next.sprints.iter_mut().find(|s| s.id == sprint_id) {
        sprint.multiplier = multiplier;
    }
    next
}

/// Rename one sprint
pub fn rename_sprint(doc: &PlannerDocument, sprint_id: &str, name: &str) -> PlannerDocument {
    debug!(%sprint_id, %name, "rename_sprint: called");
    let mut next = doc.clone();
    if let Some(sprint) = next.sprints.iter_mut().find(|s| s.id == sprint_id) {
        sprint.name = name.to_string();
    }
    next
}

/// Remove and return the item matching `item_id` from `group`
fn take_item(doc: &mut PlannerDocument, group: Group, item_id: &str) -> Option<Item> {
    let items = doc.items.get_mut(&group)?;
    let idx = items.iter().position(|i| i.id == item_id)?;
    Some(items.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(group: Group, texts: &[&str]) -> (PlannerDocument, Vec<String>) {
        doc_with_base(PlannerDocument::default(), group, texts)
    }

    #[test]
    fn test_add_item_appends_empty_item() {
        let doc = PlannerDocument::default();
        let (next, id) = add_item(&doc, Group::Staging);

        assert_eq!(next.group(Group::Staging).len(), 1);
        let item = &next.group(Group::Staging)[0];
        assert_eq!(item.id, id);
        assert_eq!(item.text, "");
        assert!(item.sub_items.is_empty());
        assert_eq!(item.required_points, None);
        // input snapshot untouched
        assert!(doc.group(Group::Staging).is_empty());
    }

    #[test]
    fn test_update_item_patch_semantics() {
        let (doc, ids) = doc_with(Group::Committed, &["task"]);
        let patch = ItemPatch {
            domain: Some(Some("Backend".to_string())),
            required_points: Some(Some(5)),
            ..Default::default()
        };
        let next = update_item(&doc, Group::Committed, &ids[0], patch);
        let item = &next.group(Group::Committed)[0];
        assert_eq!(item.text, "task"); // untouched
        assert_eq!(item.domain.as_deref(), Some("Backend"));
        assert_eq!(item.required_points, Some(5));

        // explicit clear
        let cleared = update_item(
            &next,
            Group::Committed,
            &ids[0],
            ItemPatch {
                required_points: Some(None),
                ..Default::default()
            },
        );
        assert_eq!(cleared.group(Group::Committed)[0].required_points, None);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (doc, _) = doc_with(Group::Committed, &["task"]);
        let next = update_item(
            &doc,
            Group::Committed,
            "nope",
            ItemPatch {
                text: Some("changed".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(next, doc);
    }

    #[test]
    fn test_delete_item() {
        let (doc, ids) = doc_with(Group::Risks, &["a", "b"]);
        let next = delete_item(&doc, Group::Risks, &ids[0]);
        assert_eq!(next.group(Group::Risks).len(), 1);
        assert_eq!(next.group(Group::Risks)[0].id, ids[1]);

        // missing id: no-op
        assert_eq!(delete_item(&next, Group::Risks, &ids[0]), next);
    }

    #[test]
    fn test_duplicate_appends_fresh_clone() {
        let (doc, ids) = doc_with(Group::Staging, &["original"]);
        let doc = add_sub_item(&doc, Group::Staging, &ids[0], "child");

        let next = duplicate_item(&doc, Group::Staging, &ids[0]);
        let items = next.group(Group::Staging);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text, "original (copy)");
        assert_ne!(items[1].id, items[0].id);
        assert_ne!(items[1].sub_items[0].id, items[0].sub_items[0].id);
    }

    #[test]
    fn test_reorder_at_bounds_is_noop() {
        let (doc, ids) = doc_with(Group::Uncommitted, &["a", "b", "c"]);

        assert_eq!(reorder_item(&doc, Group::Uncommitted, &ids[0], Direction::Up), doc);
        assert_eq!(reorder_item(&doc, Group::Uncommitted, &ids[2], Direction::Down), doc);

        let next = reorder_item(&doc, Group::Uncommitted, &ids[1], Direction::Up);
        let order: Vec<&str> = next.group(Group::Uncommitted).iter().map(|i| i.text.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_to_group_relocates_not_copies() {
        let (doc, ids) = doc_with(Group::Staging, &["a"]);
        let before = doc.item_count();

        let next = move_item_to_group(&doc, Group::Staging, &ids[0], Group::Committed);
        assert!(next.group(Group::Staging).is_empty());
        assert_eq!(next.group(Group::Committed).len(), 1);
        assert_eq!(next.item_count(), before);
    }

    #[test]
    fn test_insert_item_at_shifts_right() {
        let (doc, staged) = doc_with(Group::Staging, &["A"]);
        let (doc, committed) = doc_with_base(doc, Group::Committed, &["w", "x", "y", "z"]);

        let next = insert_item_at(&doc, Group::Staging, &staged[0], Group::Committed, 2);
        let order: Vec<&str> = next.group(Group::Committed).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            order,
            vec![
                committed[0].as_str(),
                committed[1].as_str(),
                staged[0].as_str(),
                committed[2].as_str(),
                committed[3].as_str()
            ]
        );
        assert!(next.group(Group::Staging).is_empty());
    }

    #[test]
    fn test_insert_item_at_out_of_range_appends() {
        let (doc, staged) = doc_with(Group::Staging, &["A"]);
        let next = insert_item_at(&doc, Group::Staging, &staged[0], Group::Risks, 99);
        assert_eq!(next.group(Group::Risks).len(), 1);
    }

    #[test]
    fn test_sub_item_ops() {
        let (doc, ids) = doc_with(Group::Milestones, &["m"]);
        let doc = add_sub_item(&doc, Group::Milestones, &ids[0], "first");
        let sub_id = doc.group(Group::Milestones)[0].sub_items[0].id.clone();

        let doc = update_sub_item(&doc, Group::Milestones, &ids[0], &sub_id, "renamed");
        assert_eq!(doc.group(Group::Milestones)[0].sub_items[0].text, "renamed");

        // wrong sub id: no-op
        let same = update_sub_item(&doc, Group::Milestones, &ids[0], "nope", "x");
        assert_eq!(same, doc);

        let doc = remove_sub_item(&doc, Group::Milestones, &ids[0], &sub_id);
        assert!(doc.group(Group::Milestones)[0].sub_items.is_empty());
    }

    #[test]
    fn test_sprint_ops() {
        let doc = PlannerDocument::default();
        let sprint_id = doc.sprints[0].id.clone();

        let doc = set_velocity(&doc, 20);
        assert_eq!(doc.velocity, 20);

        let doc = set_sprint_multiplier(&doc, &sprint_id, 50);
        assert_eq!(doc.sprints[0].multiplier, 50);

        // out-of-range multiplier accepted, clamping is a UI concern
        let doc = set_sprint_multiplier(&doc, &sprint_id, 250);
        assert_eq!(doc.sprints[0].multiplier, 250);

        let doc = rename_sprint(&doc, &sprint_id, "Hardening");
        assert_eq!(doc.sprints[0].name, "Hardening");

        // missing sprint id: no-op
        assert_eq!(set_sprint_multiplier(&doc, "nope", 10), doc);
    }

    fn doc_with_base(mut doc: PlannerDocument, group: Group, texts: &[&str]) -> (PlannerDocument, Vec<String>) {
        let mut ids = Vec::new();
        for text in texts {
            let (next, id) = add_item(&doc, group);
            doc = update_item(
                &next,
                group,
                &id,
                ItemPatch {
                    text: Some(text.to_string()),
                    ..Default::default()
                },
            );
            ids.push(id);
        }
        (doc, ids)
    }
}
