//! Sprint schedule entries

use serde::{Deserialize, Serialize};

/// A named unit of time-boxed capacity.
///
/// `multiplier` is a percentage of nominal velocity. The UI clamps it to
/// 0-100 but the core accepts any value and computes proportional capacity
/// without complaint (a 120% crunch sprint is a display concern, not ours).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: String,
    pub name: String,
    /// Percentage of nominal velocity available in this sprint
    #[serde(default)]
    pub multiplier: i64,
}

impl Sprint {
    pub fn new(id: impl Into<String>, name: impl Into<String>, multiplier: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            multiplier,
        }
    }
}
