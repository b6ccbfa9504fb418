//! PlanStore - string-keyed persistence backends
//!
//! The planning board persists everything (the planner document, the
//! domain color map, UI flags) as string values under string keys.
//! This crate provides that seam as a trait plus two implementations:
//!
//! # Architecture
//!
//! ```text
//! .planstore/
//! ├── planner-document      # PlannerDocument JSON
//! ├── domain-colors         # color map JSON
//! └── dark-mode             # "true" / "false"
//! ```
//!
//! # Example
//!
//! ```ignore
//! use planstore::{FileStore, KvBackend};
//!
//! let store = FileStore::open(".planstore")?;
//! store.save("dark-mode", "true")?;
//! assert_eq!(store.load("dark-mode")?, Some("true".to_string()));
//! ```

mod store;

pub use store::{FileStore, KvBackend, MemoryStore};
