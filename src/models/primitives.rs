//! Primitive types and newtypes for type-safe API interactions.
//!
//! Identifiers are opaque strings: the API assigns them and this crate
//! never validates their format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed scaling group ID.
///
/// # Example
///
/// ```
/// use autoscaling_rs::GroupId;
///
/// let id = GroupId::new("a8327883-6b07-4497-9c61-68d03ee193a");
/// println!("Group: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Create a new group ID from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the group ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A project (tenant) ID. Every resource URL is scoped to one project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a new project ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the project ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A service region such as `eu-west-0`.
///
/// # Example
///
/// ```
/// use autoscaling_rs::Region;
///
/// let region = Region::new("eu-west-0");
/// assert_eq!(
///     region.endpoint(),
///     "https://as.eu-west-0.myhuaweicloud.com/autoscaling-api/v1/"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Create a new region.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the region name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public Auto Scaling endpoint for this region.
    ///
    /// The returned URL ends with a slash so that project-relative paths
    /// can be joined onto it.
    pub fn endpoint(&self) -> String {
        format!("https://as.{}.myhuaweicloud.com/autoscaling-api/v1/", self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Region {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_is_transparent() {
        let id = GroupId::new("grp-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"grp-123\"");
        let back: GroupId = serde_json::from_str("\"grp-123\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_region_endpoint() {
        assert_eq!(
            Region::from("cn-north-1").endpoint(),
            "https://as.cn-north-1.myhuaweicloud.com/autoscaling-api/v1/"
        );
    }
}
