//! Planner document store
//!
//! Load/save of the canonical document plus the small UI preference flags,
//! all through an injected [`KvBackend`]. Persistence is a durability
//! mechanism, not a synchronization point: saves are best-effort (failures
//! are logged and the session continues in memory), and loads fall back to
//! the built-in default document on absent or corrupt data.

use tracing::{debug, info, warn};

use planstore::KvBackend;

use crate::domain::PlannerDocument;

/// Store key for the planner document
pub const DOCUMENT_KEY: &str = "planner-document";

/// Boolean UI preference flags, persisted as "true"/"false" strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Velocity panel collapsed
    VelocityCollapsed,
    /// Keyboard shortcuts panel collapsed
    ShortcutsCollapsed,
    /// Dark mode enabled
    DarkMode,
}

impl Flag {
    /// Store key for the flag
    pub fn key(self) -> &'static str {
        match self {
            Self::VelocityCollapsed => "velocity-collapsed",
            Self::ShortcutsCollapsed => "shortcuts-collapsed",
            Self::DarkMode => "dark-mode",
        }
    }
}

/// Document and preference persistence over a [`KvBackend`]
pub struct PlannerStore<'a> {
    backend: &'a dyn KvBackend,
}

impl<'a> PlannerStore<'a> {
    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self { backend }
    }

    /// Read the persisted document.
    ///
    /// Absent data, storage failure, and corrupt JSON all fall back to the
    /// default document; none of them surface to the caller. Partial
    /// documents come back repaired (every group key present) via the
    /// document's merge-with-defaults deserialization.
    pub fn load(&self) -> PlannerDocument {
        match self.backend.load(DOCUMENT_KEY) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(doc) => {
                    debug!(bytes = text.len(), "Loaded planner document");
                    doc
                }
                Err(e) => {
                    warn!(error = %e, "Corrupt planner document, using defaults");
                    PlannerDocument::default()
                }
            },
            Ok(None) => {
                info!("No persisted planner document, using defaults");
                PlannerDocument::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read planner document, using defaults");
                PlannerDocument::default()
            }
        }
    }

    /// Persist the document, best effort: failures are logged, never
    /// returned, and the in-memory snapshot stays the source of truth
    pub fn save(&self, doc: &PlannerDocument) {
        let text = match serde_json::to_string(doc) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Failed to serialize planner document");
                return;
            }
        };
        if let Err(e) = self.backend.save(DOCUMENT_KEY, &text) {
            warn!(error = %e, "Failed to persist planner document, continuing in memory");
        }
    }

    /// Read a UI flag; anything but the literal "true" is false
    pub fn load_flag(&self, flag: Flag) -> bool {
        match self.backend.load(flag.key()) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!(error = %e, key = flag.key(), "Failed to read flag");
                false
            }
        }
    }

    /// Persist a UI flag, best effort
    pub fn save_flag(&self, flag: Flag, value: bool) {
        let text = if value { "true" } else { "false" };
        if let Err(e) = self.backend.save(flag.key(), text) {
            warn!(error = %e, key = flag.key(), "Failed to persist flag");
        }
    }
}
