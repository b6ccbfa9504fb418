//! Domain color assigner
//!
//! Maps free-text domain labels to display color tokens. Assignment is
//! first-unused-palette-color-wins at the moment a domain is first seen,
//! so discovery order decides the color; once the palette is exhausted
//! colors repeat (`palette[len % N]`). Repeats are an accepted
//! degradation, not an error.
//!
//! A session-long service object with an injected persistence backend: no
//! global state, but the map is append-only for the session.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use planstore::KvBackend;

use crate::domain::PlannerDocument;
use crate::stats::UNASSIGNED;

/// Store key for the persisted color map
pub const DOMAIN_COLORS_KEY: &str = "domain-colors";

/// Neutral color for the "Unassigned" bucket
const NEUTRAL: &str = "#9ca3af";

/// Fixed ordered palette of reference colors
const PALETTE: [&str; 12] = [
    "#3b82f6", // blue
    "#10b981", // emerald
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#ef4444", // red
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#84cc16", // lime
    "#f97316", // orange
    "#6366f1", // indigo
    "#14b8a6", // teal
    "#a855f7", // purple
];

/// Session-wide domain-to-color mapping with persistence
pub struct DomainColors<'a> {
    backend: &'a dyn KvBackend,
    map: BTreeMap<String, String>,
}

impl<'a> DomainColors<'a> {
    /// Load the persisted map (corrupt or absent data starts fresh) and
    /// seed the "Unassigned" entry
    pub fn open(backend: &'a dyn KvBackend) -> Self {
        let mut map: BTreeMap<String, String> = match backend.load(DOMAIN_COLORS_KEY) {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(error = %e, "Corrupt domain color map, starting fresh");
                BTreeMap::new()
            }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!(error = %e, "Could not load domain color map, starting fresh");
                BTreeMap::new()
            }
        };
        map.entry(UNASSIGNED.to_string()).or_insert_with(|| NEUTRAL.to_string());
        Self { backend, map }
    }

    /// Color token for a domain label, assigning one on first sight.
    ///
    /// An empty label maps to the "Unassigned" entry. New assignments are
    /// persisted immediately (best effort).
    pub fn color_of(&mut self, domain: &str) -> String {
        let name = if domain.is_empty() { UNASSIGNED } else { domain };
        if let Some(color) = self.map.get(name) {
            return color.clone();
        }
        let color = self.assign(name.to_string());
        self.persist();
        color
    }

    /// Assign colors for every domain in the document not yet mapped;
    /// persists once if anything was added
    pub fn sync_from_document(&mut self, doc: &PlannerDocument) {
        let mut changed = false;
        for item in doc.all_items() {
            if let Some(domain) = item.domain.as_deref()
                && !domain.is_empty()
                && !self.map.contains_key(domain)
            {
                self.assign(domain.to_string());
                changed = true;
            }
        }
        if changed {
            self.persist();
        }
    }

    /// Current map, for display
    pub fn map(&self) -> &BTreeMap<String, String> {
        &self.map
    }

    fn assign(&mut self, name: String) -> String {
        // First palette color no existing entry uses; once all are taken,
        // cycle by map size (repeats are the accepted degradation).
        let color = PALETTE
            .iter()
            .find(|c| !self.map.values().any(|used| used == **c))
            .copied()
            .unwrap_or(PALETTE[self.map.len() % PALETTE.len()])
            .to_string();
        debug!(%name, %color, "Assigned domain color");
        self.map.insert(name, color.clone());
        color
    }

    fn persist(&self) {
        // Best effort: a failed save degrades to in-memory for the session
        match serde_json::to_string(&self.map) {
            Ok(text) => {
                if let Err(e) = self.backend.save(DOMAIN_COLORS_KEY, &text) {
                    warn!(error = %e, "Failed to persist domain color map");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize domain color map"),
        }
    }
}
