//! Scaling groups service.

use std::sync::Arc;

use serde::Serialize;

use super::results::{
    ActionResult, CreateResult, DeleteResult, GetResult, GroupPage, ResultBase, UpdateResult,
};
use crate::client::{ClientInner, Pager};
use crate::models::options::is_blank;
use crate::models::{
    ActionOpts, ActionOptsBuilder, CreateOptsBuilder, GroupAction, GroupId, GroupStatus,
    UpdateOptsBuilder,
};
use crate::{Error, Result};

const RESOURCE_PATH: &str = "scaling_group";
const ACTION_PATH: &str = "action";

/// Anything that can produce the query string of a list request.
pub trait ListOptsBuilder {
    /// Serialize into `?key=value&...`, or an empty string when no filter
    /// is set.
    fn to_group_list_query(&self) -> Result<String>;
}

/// Filters for listing scaling groups. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOpts {
    /// Match on group name
    #[serde(rename = "scaling_group_name", skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// Match on scaling configuration
    #[serde(rename = "scaling_configuration_id", skip_serializing_if = "is_blank")]
    pub configuration_id: Option<String>,
    /// Match on group status. [`GroupStatus::Unknown`] matches nothing on
    /// the server and is not sent.
    #[serde(rename = "scaling_group_status", skip_serializing_if = "is_unknown_status")]
    pub status: Option<GroupStatus>,
}

fn is_unknown_status(status: &Option<GroupStatus>) -> bool {
    matches!(status, None | Some(GroupStatus::Unknown))
}

impl ListOptsBuilder for ListOpts {
    fn to_group_list_query(&self) -> Result<String> {
        let query = serde_urlencoded::to_string(self)?;
        if query.is_empty() {
            Ok(query)
        } else {
            Ok(format!("?{query}"))
        }
    }
}

/// Service for scaling group operations.
///
/// Each method issues at most one HTTP request. Failures are captured in
/// the returned result rather than returned as `Err`.
///
/// # Example
///
/// ```no_run
/// use autoscaling_rs::models::{CreateOpts, UpdateOpts};
/// use autoscaling_rs::GroupId;
///
/// # async fn example(client: autoscaling_rs::ServiceClient) -> autoscaling_rs::Result<()> {
/// let opts = CreateOpts::new("as-group-web", "vpc-1")
///     .network("subnet-1")
///     .security_group("sg-1")
///     .instances(0, 2, 10);
///
/// let id = GroupId::new(client.groups().create(&opts).await.extract()?);
///
/// let update = UpdateOpts {
///     max_instance_number: Some(20),
///     ..Default::default()
/// };
/// client.groups().update(&id, &update).await.extract()?;
/// client.groups().enable(&id).await.extract_err()?;
/// # Ok(())
/// # }
/// ```
pub struct GroupsService {
    inner: Arc<ClientInner>,
}

impl GroupsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a scaling group.
    ///
    /// Expects `200 OK`; the body carries the new group's ID.
    pub async fn create(&self, opts: &impl CreateOptsBuilder) -> CreateResult {
        let body = match opts.to_group_create_map() {
            Ok(body) => body,
            Err(err) => return CreateResult(ResultBase::from_err(err)),
        };

        let outcome = match self.collection_url() {
            Ok(url) => self.inner.post(&url, &body, Some(&[200])).await,
            Err(err) => Err(err),
        };
        CreateResult(ResultBase::from_outcome(outcome))
    }

    /// Delete a scaling group.
    pub async fn delete(&self, id: &GroupId) -> DeleteResult {
        let outcome = match self.item_url(id) {
            Ok(url) => self.inner.delete(&url, None).await,
            Err(err) => Err(err),
        };
        DeleteResult(ResultBase::from_outcome(outcome))
    }

    /// Get the details of a scaling group.
    pub async fn get(&self, id: &GroupId) -> GetResult {
        let outcome = match self.item_url(id) {
            Ok(url) => self.inner.get(&url, None).await,
            Err(err) => Err(err),
        };
        GetResult(ResultBase::from_outcome(outcome))
    }

    /// List scaling groups, optionally filtered.
    ///
    /// The request is issued when the returned pager is driven. The whole
    /// response is treated as a single page.
    pub fn list(&self, opts: Option<&dyn ListOptsBuilder>) -> Pager<GroupPage> {
        let mut url = match self.collection_url() {
            Ok(url) => url,
            Err(err) => return Pager::failed(self.inner.clone(), err),
        };
        if let Some(opts) = opts {
            match opts.to_group_list_query() {
                Ok(query) => url.push_str(&query),
                Err(err) => return Pager::failed(self.inner.clone(), err),
            }
        }
        Pager::new(self.inner.clone(), url)
    }

    /// Update a scaling group. Only the fields set in `opts` change.
    ///
    /// Expects `200 OK`; the body carries the group's ID.
    pub async fn update(&self, id: &GroupId, opts: &impl UpdateOptsBuilder) -> UpdateResult {
        let body = match opts.to_group_update_map() {
            Ok(body) => body,
            Err(err) => return UpdateResult(ResultBase::from_err(err)),
        };

        let outcome = match self.item_url(id) {
            Ok(url) => self.inner.put(&url, &body, Some(&[200])).await,
            Err(err) => Err(err),
        };
        UpdateResult(ResultBase::from_outcome(outcome))
    }

    /// Enable (resume) a scaling group.
    pub async fn enable(&self, id: &GroupId) -> ActionResult {
        self.do_action(id, &ActionOpts { action: GroupAction::Resume })
            .await
    }

    /// Disable (pause) a scaling group.
    pub async fn disable(&self, id: &GroupId) -> ActionResult {
        self.do_action(id, &ActionOpts { action: GroupAction::Pause })
            .await
    }

    /// POST to the action endpoint, expecting `204 No Content`.
    async fn do_action(&self, id: &GroupId, opts: &impl ActionOptsBuilder) -> ActionResult {
        let body = match opts.to_action_map() {
            Ok(body) => body,
            Err(err) => return ActionResult(ResultBase::from_err(err)),
        };

        let outcome = match self.action_url(id) {
            Ok(url) => self.inner.post(&url, &body, Some(&[204])).await,
            Err(err) => Err(err),
        };
        ActionResult(ResultBase::from_outcome(outcome))
    }

    fn collection_url(&self) -> Result<String> {
        self.inner.service_url(&[RESOURCE_PATH])
    }

    fn item_url(&self, id: &GroupId) -> Result<String> {
        self.inner.service_url(&[RESOURCE_PATH, id_segment(id)?])
    }

    fn action_url(&self, id: &GroupId) -> Result<String> {
        self.inner
            .service_url(&[RESOURCE_PATH, id_segment(id)?, ACTION_PATH])
    }
}

/// The ID as a single path segment. IDs are opaque, but an empty ID or a
/// dot segment cannot name an item.
fn id_segment(id: &GroupId) -> Result<&str> {
    match id.as_str() {
        "" | "." | ".." => Err(Error::Validation {
            field: "scaling_group_id",
        }),
        segment => Ok(segment),
    }
}
