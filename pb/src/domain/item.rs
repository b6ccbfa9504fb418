//! Work items and their sub-items

use serde::{Deserialize, Serialize};

use super::id::generate_id;

/// A child line of an [`Item`]; owned exclusively by its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    /// Unique within the parent item
    pub id: String,
    pub text: String,
}

impl SubItem {
    /// Create a new sub-item with a generated id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
        }
    }
}

/// A single work item.
///
/// Lives inside exactly one group's ordered sequence at a time. Optional
/// fields are genuinely absent when `None`: absence is distinct from zero
/// or empty string and round-trips through the wire format unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique within the whole document
    pub id: String,
    #[serde(default)]
    pub text: String,
    /// Ordered child lines
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
    /// External epic reference code (opaque to the core)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic: Option<String>,
    /// Free-text categorization tag, drives the color-coded breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Required story points; counts toward commitment capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_points: Option<i64>,
    /// Optional story points; tracked but not committed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_points: Option<i64>,
}

impl Item {
    /// Create a new empty item with a generated id
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            text: String::new(),
            sub_items: Vec::new(),
            epic: None,
            domain: None,
            required_points: None,
            optional_points: None,
        }
    }

    /// Clone this item under fresh ids (item and every sub-item).
    ///
    /// Text gets a " (copy)" suffix only when the original is non-empty.
    pub fn duplicated(&self) -> Self {
        let mut clone = self.clone();
        clone.id = generate_id();
        for sub in &mut clone.sub_items {
            sub.id = generate_id();
        }
        if !clone.text.is_empty() {
            clone.text = format!("{} (copy)", clone.text);
        }
        clone
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}
