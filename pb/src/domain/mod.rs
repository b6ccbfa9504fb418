//! Domain types for the planning board
//!
//! Core domain types: Group, Item, SubItem, Sprint, PlannerDocument.
//! All serialize to the camelCase wire shape the persisted document and
//! import/export format use.
//!
//! The document is an immutable value: mutations (see [`crate::engine`])
//! always produce a new snapshot rather than editing in place.

mod document;
mod group;
mod id;
mod item;
mod sprint;

pub use document::PlannerDocument;
pub use group::Group;
pub use id::generate_id;
pub use item::{Item, SubItem};
pub use sprint::Sprint;
