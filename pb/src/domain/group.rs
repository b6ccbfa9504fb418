//! The seven fixed item groups

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the seven fixed buckets items are organized into.
///
/// Declaration order is display order; the derived `Ord` keeps
/// `BTreeMap<Group, _>` iteration in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Group {
    /// Scratch area for items not yet triaged
    Staging,
    /// Items committed for the sprint schedule; drives capacity stats
    Committed,
    /// Milestone markers
    Milestones,
    /// Known risks
    Risks,
    /// External dependencies
    Dependencies,
    /// Explicitly descoped items
    WillNotDo,
    /// Candidate items not (yet) committed
    Uncommitted,
}

impl Group {
    /// All groups in display order
    pub const ALL: [Group; 7] = [
        Group::Staging,
        Group::Committed,
        Group::Milestones,
        Group::Risks,
        Group::Dependencies,
        Group::WillNotDo,
        Group::Uncommitted,
    ];

    /// Wire name of the group (camelCase, matches the persisted JSON)
    pub fn key(self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Committed => "committed",
            Self::Milestones => "milestones",
            Self::Risks => "risks",
            Self::Dependencies => "dependencies",
            Self::WillNotDo => "willNotDo",
            Self::Uncommitted => "uncommitted",
        }
    }

    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Self::Staging => "Staging",
            Self::Committed => "Committed",
            Self::Milestones => "Milestones",
            Self::Risks => "Risks",
            Self::Dependencies => "Dependencies",
            Self::WillNotDo => "Will Not Do",
            Self::Uncommitted => "Uncommitted",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Group {
    type Err = String;

    /// Parse a group from its wire name (case-insensitive, dashes tolerated)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "");
        match normalized.as_str() {
            "staging" => Ok(Self::Staging),
            "committed" => Ok(Self::Committed),
            "milestones" => Ok(Self::Milestones),
            "risks" => Ok(Self::Risks),
            "dependencies" => Ok(Self::Dependencies),
            "willnotdo" => Ok(Self::WillNotDo),
            "uncommitted" => Ok(Self::Uncommitted),
            _ => Err(format!("Unknown group: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for group in Group::ALL {
            let json = serde_json::to_string(&group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.key()));
            let back: Group = serde_json::from_str(&json).unwrap();
            assert_eq!(back, group);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("willNotDo".parse::<Group>().unwrap(), Group::WillNotDo);
        assert_eq!("will-not-do".parse::<Group>().unwrap(), Group::WillNotDo);
        assert_eq!("STAGING".parse::<Group>().unwrap(), Group::Staging);
        assert!("backlog".parse::<Group>().is_err());
    }
}
