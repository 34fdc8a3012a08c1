//! Scaling group models as returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::GroupStatus;

/// A scaling group record.
///
/// Missing fields fall back to their defaults so that sparse responses
/// (and newer API revisions) still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Group name
    #[serde(rename = "scaling_group_name")]
    pub name: String,
    /// Group ID
    #[serde(rename = "scaling_group_id")]
    pub id: String,
    /// Current lifecycle status
    #[serde(rename = "scaling_group_status")]
    pub status: GroupStatus,
    /// ID of the scaling configuration used to launch instances
    #[serde(rename = "scaling_configuration_id")]
    pub configuration_id: Option<String>,
    /// Name of the scaling configuration
    #[serde(rename = "scaling_configuration_name")]
    pub configuration_name: Option<String>,
    /// Number of instances currently in the group
    pub current_instance_number: u32,
    /// Expected number of instances
    pub desire_instance_number: u32,
    /// Minimum number of instances
    pub min_instance_number: u32,
    /// Maximum number of instances
    pub max_instance_number: u32,
    /// Cooldown period between scaling actions, in seconds
    pub cool_down_time: u32,
    /// Load balancer listener IDs, comma separated
    pub lb_listener_id: Option<String>,
    /// Availability zones the group spans
    pub available_zones: Vec<String>,
    /// Networks instances attach to
    pub networks: Vec<Network>,
    /// Security groups applied to instances
    pub security_groups: Vec<SecurityGroup>,
    /// When the group was created
    pub create_time: Option<DateTime<Utc>>,
    /// VPC the group lives in
    pub vpc_id: String,
    /// Free-form status detail
    pub detail: Option<String>,
    /// Whether a scaling action is in progress
    pub is_scaling: bool,
    /// Health check method (`ELB_AUDIT` or `NOVA_AUDIT`)
    pub health_periodic_audit_method: Option<String>,
    /// Health check interval, in minutes
    pub health_periodic_audit_time: Option<u32>,
    /// Instance removal policy
    pub instance_terminate_policy: Option<String>,
    /// Notification channels
    pub notifications: Vec<String>,
    /// Whether elastic IPs are released with their instances
    pub delete_publicip: bool,
    /// Cloud location (edge deployments)
    pub cloud_location_id: Option<String>,
}

impl Group {
    /// Returns `true` if the group is enabled.
    pub fn is_in_service(&self) -> bool {
        self.status == GroupStatus::InService
    }
}

/// A network attached to a scaling group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    /// Subnet ID
    pub id: String,
}

/// A security group applied to a scaling group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroup {
    /// Security group ID
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_deserialize() {
        let json = serde_json::json!({
            "scaling_group_name": "as-group-web",
            "scaling_group_id": "77a7a397-7d2f-4e79-9da9-6a5e4eabd2bb",
            "scaling_group_status": "INSERVICE",
            "scaling_configuration_id": "1d281494-6085-4579-b817-c1f813be835f",
            "scaling_configuration_name": "healthCheck",
            "current_instance_number": 0,
            "desire_instance_number": 1,
            "min_instance_number": 0,
            "max_instance_number": 500,
            "cool_down_time": 300,
            "lb_listener_id": "f06c0112570743b51c0e8fbe1f235bab",
            "available_zones": ["eu-west-0a"],
            "networks": [{"id": "2daf6ba6-fc6b-4dd8-9e5e-20ef7d5d0f68"}],
            "security_groups": [{"id": "8a4b1d5b-0054-419f-84b1-5c8a59ebc829"}],
            "create_time": "2015-07-23T02:46:29Z",
            "vpc_id": "863ccae2-ee85-4d27-bc5b-3ba2a198a9e2",
            "detail": "",
            "is_scaling": false,
            "health_periodic_audit_method": "NOVA_AUDIT",
            "health_periodic_audit_time": 5,
            "instance_terminate_policy": "OLD_CONFIG_OLD_INSTANCE",
            "notifications": ["EMAIL"],
            "delete_publicip": false,
            "cloud_location_id": null
        });

        let group: Group = serde_json::from_value(json).unwrap();
        assert_eq!(group.name, "as-group-web");
        assert!(group.is_in_service());
        assert_eq!(group.max_instance_number, 500);
        assert_eq!(group.networks[0].id, "2daf6ba6-fc6b-4dd8-9e5e-20ef7d5d0f68");
        assert_eq!(group.health_periodic_audit_time, Some(5));
        assert!(group.create_time.is_some());
        assert_eq!(group.cloud_location_id, None);
    }

    #[test]
    fn test_sparse_group_deserialize() {
        let group: Group = serde_json::from_str(r#"{"scaling_group_id": "g-1"}"#).unwrap();
        assert_eq!(group.id, "g-1");
        assert_eq!(group.status, GroupStatus::Unknown);
        assert!(group.networks.is_empty());
    }
}
