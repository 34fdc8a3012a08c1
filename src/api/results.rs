//! Typed results of scaling group operations.
//!
//! An operation never fails outright: whatever went wrong, from a missing
//! required field to an unexpected status code, is captured in the result.
//! Check [`ResultBase::err`] or call the `extract*` method to get at the
//! outcome.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::client::Page;
use crate::models::Group;
use crate::{Error, Result};

/// State shared by every operation result: a decoded body or an error.
///
/// At most one of the two is set. A body is `None` when the call failed or
/// when the server answered without content.
#[derive(Debug, Default)]
pub struct ResultBase {
    body: Option<Value>,
    err: Option<Error>,
}

impl ResultBase {
    pub(crate) fn from_outcome(outcome: Result<Option<Value>>) -> Self {
        match outcome {
            Ok(body) => Self { body, err: None },
            Err(err) => Self::from_err(err),
        }
    }

    pub(crate) fn from_err(err: Error) -> Self {
        Self {
            body: None,
            err: Some(err),
        }
    }

    /// The captured error, if the operation failed.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Returns `true` if no error was captured.
    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }

    /// The decoded response body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the result, returning the body or the captured error.
    pub fn into_body(self) -> Result<Option<Value>> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.body),
        }
    }

    /// Deserialize the whole body into `T`.
    pub fn extract_into<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.into_body()?.unwrap_or(Value::Null);
        serde_json::from_value(body).map_err(Error::Decode)
    }

    /// Return the captured error, discarding any body.
    pub fn extract_err(self) -> Result<()> {
        self.into_body().map(|_| ())
    }
}

#[derive(Deserialize)]
struct GroupIdEnvelope {
    scaling_group_id: String,
}

/// Result of a create request.
#[derive(Debug)]
#[must_use]
pub struct CreateResult(pub(crate) ResultBase);

impl CreateResult {
    /// ID of the newly created group.
    pub fn extract(self) -> Result<String> {
        self.0
            .extract_into::<GroupIdEnvelope>()
            .map(|e| e.scaling_group_id)
    }
}

/// Result of a get request.
#[derive(Debug)]
#[must_use]
pub struct GetResult(pub(crate) ResultBase);

impl GetResult {
    /// The group record.
    pub fn extract(self) -> Result<Group> {
        #[derive(Deserialize)]
        struct Envelope {
            scaling_group: Group,
        }

        self.0.extract_into::<Envelope>().map(|e| e.scaling_group)
    }
}

/// Result of an update request.
#[derive(Debug)]
#[must_use]
pub struct UpdateResult(pub(crate) ResultBase);

impl UpdateResult {
    /// ID of the updated group.
    pub fn extract(self) -> Result<String> {
        self.0
            .extract_into::<GroupIdEnvelope>()
            .map(|e| e.scaling_group_id)
    }
}

/// Result of a delete request. Carries no body.
#[derive(Debug)]
#[must_use]
pub struct DeleteResult(pub(crate) ResultBase);

impl DeleteResult {
    /// `Ok(())` if the group was deleted.
    pub fn extract_err(self) -> Result<()> {
        self.0.extract_err()
    }
}

/// Result of an enable or disable request. Carries no body.
#[derive(Debug)]
#[must_use]
pub struct ActionResult(pub(crate) ResultBase);

impl ActionResult {
    /// `Ok(())` if the action was accepted.
    pub fn extract_err(self) -> Result<()> {
        self.0.extract_err()
    }
}

macro_rules! deref_base {
    ($($ty:ty),+) => {
        $(
            impl Deref for $ty {
                type Target = ResultBase;

                fn deref(&self) -> &ResultBase {
                    &self.0
                }
            }
        )+
    };
}

deref_base!(CreateResult, GetResult, UpdateResult, DeleteResult, ActionResult);

/// The single page returned by a group list request.
#[derive(Debug, Clone)]
pub struct GroupPage {
    body: Value,
}

impl GroupPage {
    /// Decode the groups on this page.
    pub fn extract_groups(&self) -> Result<Vec<Group>> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default)]
            scaling_groups: Vec<Group>,
        }

        if self.body.is_null() {
            return Ok(Vec::new());
        }
        Envelope::deserialize(&self.body)
            .map(|e| e.scaling_groups)
            .map_err(Error::Decode)
    }

    /// Total number of matching groups reported by the server, if present.
    pub fn total_number(&self) -> Option<u64> {
        self.body.get("total_number").and_then(Value::as_u64)
    }

    /// The raw decoded body.
    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl Page for GroupPage {
    fn from_body(body: Value) -> Self {
        Self { body }
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.extract_groups()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_extract() {
        let result = CreateResult(ResultBase::from_outcome(Ok(Some(
            json!({"scaling_group_id": "a8327883"}),
        ))));
        assert!(result.is_ok());
        assert_eq!(result.extract().unwrap(), "a8327883");
    }

    #[test]
    fn test_error_leaves_body_unset() {
        let result = GetResult(ResultBase::from_err(Error::Validation { field: "vpc_id" }));
        assert!(result.body().is_none());
        assert!(matches!(result.err(), Some(Error::Validation { .. })));
        assert!(matches!(result.extract(), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_get_extract_wrong_shape() {
        let result = GetResult(ResultBase::from_outcome(Ok(Some(json!({"groups": []})))));
        assert!(matches!(result.extract(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_delete_without_body() {
        let result = DeleteResult(ResultBase::from_outcome(Ok(None)));
        assert!(result.extract_err().is_ok());
    }

    #[test]
    fn test_group_page() {
        let page = GroupPage::from_body(json!({
            "total_number": 2,
            "start_number": 0,
            "limit": 20,
            "scaling_groups": [
                {"scaling_group_id": "g-1", "scaling_group_name": "web"},
                {"scaling_group_id": "g-2", "scaling_group_name": "batch"}
            ]
        }));
        let groups = page.extract_groups().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "batch");
        assert_eq!(page.total_number(), Some(2));
        assert!(!page.is_empty().unwrap());
    }

    #[test]
    fn test_empty_group_page() {
        assert!(GroupPage::from_body(Value::Null).is_empty().unwrap());
        assert!(GroupPage::from_body(json!({"scaling_groups": []})).is_empty().unwrap());
    }
}
