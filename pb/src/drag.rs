//! Drag transition resolver
//!
//! The UI layer pre-digests drag gestures into two discrete events:
//! `drag_start(item_id)` and `drag_end(target)`. This module holds the
//! explicit two-state machine between them and resolves the pair into one
//! of: no-op, intra-group reorder, cross-group append, or cross-group
//! positional insert.
//!
//! Nothing is mutated at drag start; the document only changes at drag
//! end, so an abandoned drag (process exit, drop outside every zone)
//! leaves the pre-drag snapshot untouched.

use tracing::debug;

use crate::domain::{Group, PlannerDocument};
use crate::engine;

/// Where a drag was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped outside any zone (or the gesture was cancelled)
    Outside,
    /// Dropped on a group's empty-zone marker
    Group(Group),
    /// Dropped on another item
    Item(String),
}

/// Resolver state between the two gesture events
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging { item_id: String, source_group: Group },
}

/// Two-state machine interpreting drag gestures into document mutations
#[derive(Debug, Clone, Default)]
pub struct DragResolver {
    state: DragState,
}

impl DragResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag payload is held
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Capture the drag payload. Ignored when the id is not in the
    /// document (stale reference) or a drag is already active.
    pub fn drag_start(&mut self, doc: &PlannerDocument, item_id: &str) {
        debug!(%item_id, "drag_start: called");
        if self.is_dragging() {
            return;
        }
        if let Some((source_group, _)) = doc.find_item(item_id) {
            self.state = DragState::Dragging {
                item_id: item_id.to_string(),
                source_group,
            };
        }
    }

    /// Abandon any active drag without touching the document
    pub fn cancel(&mut self) {
        debug!("cancel: called");
        self.state = DragState::Idle;
    }

    /// Resolve the drop. Returns the new document snapshot, or `None`
    /// when the gesture is a no-op (idle resolver, cancelled drop,
    /// self-drop, or same-group zone drop). The resolver returns to idle
    /// either way.
    pub fn drag_end(&mut self, doc: &PlannerDocument, target: DropTarget) -> Option<PlannerDocument> {
        debug!(?target, "drag_end: called");
        let DragState::Dragging { item_id, source_group } = std::mem::take(&mut self.state) else {
            return None;
        };

        match target {
            DropTarget::Outside => None,
            DropTarget::Group(group) if group == source_group => None,
            DropTarget::Group(group) => Some(engine::move_item_to_group(doc, source_group, &item_id, group)),
            DropTarget::Item(target_id) if target_id == item_id => None,
            DropTarget::Item(target_id) => {
                let Some((target_group, target_idx)) = doc.find_item(&target_id) else {
                    // Target vanished between the two events; without it the
                    // target group is unknown, so the drop cannot resolve.
                    return None;
                };
                if target_group == source_group {
                    Some(engine::move_item_within(doc, source_group, &item_id, target_idx))
                } else {
                    Some(engine::insert_item_at(doc, source_group, &item_id, target_group, target_idx))
                }
            }
        }
    }
}
