//! Request options for scaling group operations.
//!
//! Each options type implements exactly one builder trait, which produces
//! the JSON object sent as the request body. Required fields are checked
//! there; optional fields left unset (`None`, empty string, empty list) are
//! left out of the body entirely.
//!
//! # Example
//!
//! ```
//! use autoscaling_rs::models::{CreateOpts, CreateOptsBuilder};
//!
//! let opts = CreateOpts::new("as-group-web", "vpc-1")
//!     .network("subnet-1")
//!     .security_group("sg-1");
//!
//! let body = opts.to_group_create_map().unwrap();
//! assert_eq!(body["scaling_group_name"], "as-group-web");
//! assert!(!body.contains_key("cool_down_time"));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use super::enums::GroupAction;
use crate::{Error, Result};

/// A JSON object ready to be sent as a request body.
pub type RequestBody = Map<String, Value>;

/// Anything that can produce the body of a create request.
pub trait CreateOptsBuilder {
    /// Validate and serialize into a create request body.
    fn to_group_create_map(&self) -> Result<RequestBody>;
}

/// Anything that can produce the body of an update request.
pub trait UpdateOptsBuilder {
    /// Validate and serialize into an update request body.
    fn to_group_update_map(&self) -> Result<RequestBody>;
}

/// Anything that can produce the body of an action request.
pub trait ActionOptsBuilder {
    /// Serialize into an action request body.
    fn to_action_map(&self) -> Result<RequestBody>;
}

/// Parameters for creating a scaling group.
///
/// `name`, `networks`, `security_groups` and `vpc_id` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// Group name
    #[serde(rename = "scaling_group_name")]
    pub name: String,
    /// Scaling configuration used to launch instances
    #[serde(rename = "scaling_configuration_id", skip_serializing_if = "is_blank")]
    pub configuration_id: Option<String>,
    /// Expected number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desire_instance_number: Option<u32>,
    /// Minimum number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instance_number: Option<u32>,
    /// Maximum number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance_number: Option<u32>,
    /// Cooldown period between scaling actions, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_down_time: Option<u32>,
    /// Load balancer listener IDs, comma separated
    #[serde(skip_serializing_if = "is_blank")]
    pub lb_listener_id: Option<String>,
    /// Availability zones
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub available_zones: Vec<String>,
    /// Networks instances attach to
    pub networks: Vec<NetworkOpts>,
    /// Security groups applied to instances
    pub security_groups: Vec<SecurityGroupOpts>,
    /// VPC the group lives in
    pub vpc_id: String,
    /// Health check method (`ELB_AUDIT` or `NOVA_AUDIT`)
    #[serde(skip_serializing_if = "is_blank")]
    pub health_periodic_audit_method: Option<String>,
    /// Health check interval, in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_periodic_audit_time: Option<u32>,
    /// Instance removal policy
    #[serde(skip_serializing_if = "is_blank")]
    pub instance_terminate_policy: Option<String>,
    /// Notification channels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
    /// Release elastic IPs together with their instances
    #[serde(rename = "delete_publicip", skip_serializing_if = "Option::is_none")]
    pub delete_publicip: Option<bool>,
}

impl CreateOpts {
    /// Start a create request with the two required scalar fields.
    pub fn new(name: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            ..Default::default()
        }
    }

    /// Attach a network by subnet ID.
    pub fn network(mut self, id: impl Into<String>) -> Self {
        self.networks.push(NetworkOpts::new(id));
        self
    }

    /// Attach a security group by ID.
    pub fn security_group(mut self, id: impl Into<String>) -> Self {
        self.security_groups.push(SecurityGroupOpts::new(id));
        self
    }

    /// Use the given scaling configuration.
    pub fn configuration_id(mut self, id: impl Into<String>) -> Self {
        self.configuration_id = Some(id.into());
        self
    }

    /// Set the minimum, desired and maximum instance counts.
    pub fn instances(mut self, min: u32, desire: u32, max: u32) -> Self {
        self.min_instance_number = Some(min);
        self.desire_instance_number = Some(desire);
        self.max_instance_number = Some(max);
        self
    }
}

impl CreateOptsBuilder for CreateOpts {
    fn to_group_create_map(&self) -> Result<RequestBody> {
        if self.name.is_empty() {
            return Err(Error::Validation {
                field: "scaling_group_name",
            });
        }
        if self.networks.is_empty() {
            return Err(Error::Validation { field: "networks" });
        }
        if self.security_groups.is_empty() {
            return Err(Error::Validation {
                field: "security_groups",
            });
        }
        if self.vpc_id.is_empty() {
            return Err(Error::Validation { field: "vpc_id" });
        }
        to_request_body(self)
    }
}

/// Parameters for updating a scaling group.
///
/// Every field is optional; only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOpts {
    /// Group name
    #[serde(rename = "scaling_group_name", skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// Expected number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desire_instance_number: Option<u32>,
    /// Minimum number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instance_number: Option<u32>,
    /// Maximum number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance_number: Option<u32>,
    /// Cooldown period between scaling actions, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_down_time: Option<u32>,
    /// Load balancer listener IDs, comma separated
    #[serde(skip_serializing_if = "is_blank")]
    pub lb_listener_id: Option<String>,
    /// Availability zones
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub available_zones: Vec<String>,
    /// Networks instances attach to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkOpts>,
    /// Security groups applied to instances
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupOpts>,
    /// Health check method
    #[serde(skip_serializing_if = "is_blank")]
    pub health_periodic_audit_method: Option<String>,
    /// Health check interval, in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_periodic_audit_time: Option<u32>,
    /// Instance removal policy
    #[serde(skip_serializing_if = "is_blank")]
    pub instance_terminate_policy: Option<String>,
    /// Notification channels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
    /// Release elastic IPs together with their instances
    #[serde(rename = "delete_publicip", skip_serializing_if = "Option::is_none")]
    pub delete_publicip: Option<bool>,
    /// Switch to another scaling configuration
    #[serde(rename = "scaling_configuration_id", skip_serializing_if = "is_blank")]
    pub configuration_id: Option<String>,
}

impl UpdateOptsBuilder for UpdateOpts {
    fn to_group_update_map(&self) -> Result<RequestBody> {
        to_request_body(self)
    }
}

/// Reference to a network (subnet) by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkOpts {
    /// Subnet ID
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl NetworkOpts {
    /// Reference the given subnet.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Reference to a security group by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityGroupOpts {
    /// Security group ID
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl SecurityGroupOpts {
    /// Reference the given security group.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Body of the group action endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionOpts {
    /// What to do with the group
    pub action: GroupAction,
}

impl ActionOptsBuilder for ActionOpts {
    fn to_action_map(&self) -> Result<RequestBody> {
        to_request_body(self)
    }
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn to_request_body<T: Serialize>(value: &T) -> Result<RequestBody> {
    match serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Serialization(format!(
            "request body must be a JSON object, got {other}"
        ))),
    }
}
