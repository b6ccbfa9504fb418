//! Import/export codec
//!
//! Backup format: the full document as pretty-printed JSON. Import accepts
//! arbitrary untrusted text; anything that parses as JSON is merged over
//! defaults exactly like a stored document, anything that does not parse
//! is the one typed error the core surfaces.

use thiserror::Error;
use tracing::debug;

use crate::domain::PlannerDocument;

/// Import failure; the caller's existing document must be left untouched
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Serialize the document to canonical pretty-printed JSON
pub fn export_document(doc: &PlannerDocument) -> String {
    // A valid document always serializes; map failure is unreachable here
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string())
}

/// Restore a document from untrusted JSON text, defaulting missing fields
/// per the merge-with-defaults rules of the store
pub fn import_document(text: &str) -> Result<PlannerDocument, ImportError> {
    debug!(bytes = text.len(), "import_document: called");
    let doc: PlannerDocument = serde_json::from_str(text)?;
    Ok(doc)
}
