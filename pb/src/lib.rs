//! PlanBoard - sprint planning board core
//!
//! Organizes work items into seven fixed groups (staging, committed,
//! milestones, risks, dependencies, willNotDo, uncommitted), tracks
//! per-item metadata (epic, domain, required/optional story points), and
//! derives live capacity statistics against a configurable sprint
//! velocity schedule.
//!
//! # Core Concepts
//!
//! - **Copy-on-write snapshots**: every mutation produces a new
//!   [`domain::PlannerDocument`]; no reader ever sees a half-applied change
//! - **Single actor**: one gesture at a time, no locking, persistence is
//!   fire-and-forget durability behind the in-memory document
//! - **Pre-digested gestures**: the UI reduces drags to two discrete
//!   events, resolved by an explicit two-state machine
//!
//! # Modules
//!
//! - [`domain`] - Group, Item, SubItem, Sprint, PlannerDocument
//! - [`engine`] - pure create/update/delete/duplicate/reorder/move ops
//! - [`drag`] - drag-start/drag-end transition resolver
//! - [`stats`] - capacity and domain-breakdown aggregation
//! - [`codec`] - JSON import/export
//! - [`colors`] - persistent domain-to-color assignment
//! - [`store`] - document persistence and UI preference flags
//! - [`board`] - session façade wiring the data flow together
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod board;
pub mod cli;
pub mod codec;
pub mod colors;
pub mod config;
pub mod domain;
pub mod drag;
pub mod engine;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use board::Board;
pub use codec::{ImportError, export_document, import_document};
pub use colors::{DOMAIN_COLORS_KEY, DomainColors};
pub use config::Config;
pub use domain::{Group, Item, PlannerDocument, Sprint, SubItem, generate_id};
pub use drag::{DragResolver, DropTarget};
pub use engine::{Direction, ItemPatch};
pub use stats::{
    DomainShare, GroupStats, UNASSIGNED, committed_percent, committed_remaining, domain_breakdown, group_stats,
    total_capacity,
};
pub use store::{DOCUMENT_KEY, Flag, PlannerStore};
