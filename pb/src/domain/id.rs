//! Id generation
//!
//! Item, sub-item, and sprint ids are UUIDv7 strings: collision-resistant
//! across the session and never reused after deletion.

use uuid::Uuid;

/// Generate a fresh unique id
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
