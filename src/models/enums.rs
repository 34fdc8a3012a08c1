//! Enumeration types for the Auto Scaling API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a scaling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupStatus {
    /// The group is enabled and scaling normally
    #[serde(rename = "INSERVICE")]
    InService,
    /// Scaling actions are suspended
    Paused,
    /// The group is in an error state
    Error,
    /// The group is being deleted
    Deleting,
    /// Status not known to this version of the crate
    #[serde(other)]
    #[default]
    Unknown,
}

impl GroupStatus {
    /// The value the API uses for this status, e.g. in list filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::InService => "INSERVICE",
            GroupStatus::Paused => "PAUSED",
            GroupStatus::Error => "ERROR",
            GroupStatus::Deleting => "DELETING",
            GroupStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator accepted by the group action endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAction {
    /// Enable the group
    Resume,
    /// Suspend the group
    Pause,
}

impl GroupAction {
    /// Wire value of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupAction::Resume => "resume",
            GroupAction::Pause => "pause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_status_wire_names() {
        let status: GroupStatus = serde_json::from_str("\"INSERVICE\"").unwrap();
        assert_eq!(status, GroupStatus::InService);
        let status: GroupStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(status, GroupStatus::Paused);
        assert_eq!(
            serde_json::to_string(&GroupStatus::InService).unwrap(),
            "\"INSERVICE\""
        );
    }

    #[test]
    fn test_group_status_unknown() {
        let status: GroupStatus = serde_json::from_str("\"FROZEN\"").unwrap();
        assert_eq!(status, GroupStatus::Unknown);
    }

    #[test]
    fn test_group_action_wire_names() {
        assert_eq!(serde_json::to_string(&GroupAction::Resume).unwrap(), "\"resume\"");
        assert_eq!(GroupAction::Pause.as_str(), "pause");
    }
}
