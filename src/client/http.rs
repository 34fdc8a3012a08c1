//! Service client and request dispatcher for the Auto Scaling API.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::config::ClientConfig;
use super::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::api::GroupsService;
use crate::auth::AuthToken;
use crate::models::{ProjectId, Region};
use crate::{Error, Result};

/// The main client for interacting with the Auto Scaling API.
///
/// A client is bound to one service endpoint and one project. It is cheap
/// to clone; clones share the underlying transport.
///
/// # Example
///
/// ```no_run
/// use autoscaling_rs::{GroupId, ServiceClient};
///
/// # async fn example() -> autoscaling_rs::Result<()> {
/// let client = ServiceClient::builder()
///     .region("eu-west-0")
///     .project_id("0549b4a43100d4f32f51c01c2fe4acdb")
///     .token(std::env::var("OS_AUTH_TOKEN").unwrap_or_default())
///     .build()?;
///
/// let group = client.groups().get(&GroupId::new("grp-123")).await.extract()?;
/// println!("{} is {}", group.name, group.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ServiceClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) endpoint: Url,
    pub(crate) project_id: ProjectId,
}

impl ServiceClient {
    /// Start building a client.
    pub fn builder() -> ServiceClientBuilder {
        ServiceClientBuilder::default()
    }

    /// Create a client on top of a custom transport.
    ///
    /// `endpoint` is the versioned service root, e.g.
    /// `https://as.eu-west-0.myhuaweicloud.com/autoscaling-api/v1/`.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        endpoint: &str,
        project_id: impl Into<ProjectId>,
    ) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                endpoint: normalize_endpoint(endpoint)?,
                project_id: project_id.into(),
            }),
        })
    }

    /// Get the scaling groups service.
    pub fn groups(&self) -> GroupsService {
        GroupsService::new(self.inner.clone())
    }

    /// The service endpoint this client talks to.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// The project every request is scoped to.
    pub fn project_id(&self) -> &ProjectId {
        &self.inner.project_id
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("project_id", &self.inner.project_id)
            .finish()
    }
}

/// Builder for [`ServiceClient`] using the default `reqwest` transport.
#[derive(Debug, Default)]
pub struct ServiceClientBuilder {
    endpoint: Option<String>,
    project_id: Option<ProjectId>,
    token: Option<AuthToken>,
    config: ClientConfig,
}

impl ServiceClientBuilder {
    /// Use an explicit service endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Use the public endpoint of a region.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.endpoint = Some(region.into().endpoint());
        self
    }

    /// Scope requests to this project.
    pub fn project_id(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Authenticate with this token.
    pub fn token(mut self, token: impl Into<AuthToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use a custom transport configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ServiceClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::Config("endpoint or region is required".to_string()))?;
        let project_id = self
            .project_id
            .ok_or_else(|| Error::Config("project_id is required".to_string()))?;
        let token = self
            .token
            .ok_or_else(|| Error::Config("token is required".to_string()))?;

        let transport = ReqwestTransport::new(token, &self.config)?;
        ServiceClient::with_transport(Arc::new(transport), &endpoint, project_id)
    }
}

impl ClientInner {
    /// URL of a project-scoped resource, one path segment per element.
    ///
    /// Each segment is percent-encoded on its own, so `/`, `?`, `#` and `%`
    /// inside a segment never change the shape of the URL.
    pub(crate) fn service_url(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::Config(format!("endpoint {} cannot be a base URL", self.endpoint))
            })?
            .pop_if_empty()
            .push(self.project_id.as_str())
            .extend(segments);
        Ok(url.into())
    }

    /// Make a GET request.
    pub(crate) async fn get(&self, url: &str, ok_codes: Option<&[u16]>) -> Result<Option<Value>> {
        self.request::<()>(Method::GET, url, None, ok_codes).await
    }

    /// Make a POST request.
    pub(crate) async fn post<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        ok_codes: Option<&[u16]>,
    ) -> Result<Option<Value>> {
        self.request(Method::POST, url, Some(body), ok_codes).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        ok_codes: Option<&[u16]>,
    ) -> Result<Option<Value>> {
        self.request(Method::PUT, url, Some(body), ok_codes).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, url: &str, ok_codes: Option<&[u16]>) -> Result<Option<Value>> {
        self.request::<()>(Method::DELETE, url, None, ok_codes).await
    }

    /// Perform one HTTP exchange and classify its outcome.
    ///
    /// Returns the decoded body, or `None` when the response had no body.
    async fn request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        ok_codes: Option<&[u16]>,
    ) -> Result<Option<Value>> {
        let ok_codes = ok_codes.unwrap_or_else(|| default_ok_codes(&method));
        let body = body
            .map(|b| serde_json::to_vec(b).map(Bytes::from))
            .transpose()
            .map_err(|e| Error::Serialization(e.to_string()))?;

        tracing::debug!(%method, url, "dispatching request");
        let response = self
            .transport
            .send(HttpRequest {
                method: method.clone(),
                url: Url::parse(url)?,
                body,
            })
            .await?;
        tracing::debug!(%method, url, status = response.status, "received response");

        if !ok_codes.contains(&response.status) {
            tracing::warn!(
                %method,
                url,
                status = response.status,
                expected = ?ok_codes,
                "unexpected response status"
            );
            return Err(Error::unexpected_status(response.status, ok_codes, &response.body));
        }

        decode_body(&response.body)
    }
}

/// Status codes accepted when an operation does not name its own.
pub(crate) fn default_ok_codes(method: &Method) -> &'static [u16] {
    match *method {
        Method::POST | Method::PUT => &[201, 202],
        Method::DELETE => &[202, 204],
        _ => &[200],
    }
}

fn decode_body(body: &[u8]) -> Result<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(Error::Decode)
}

fn normalize_endpoint(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("endpoint {endpoint} cannot be a base URL")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MockTransport;

    #[test]
    fn test_default_ok_codes() {
        assert_eq!(default_ok_codes(&Method::GET), &[200]);
        assert_eq!(default_ok_codes(&Method::POST), &[201, 202]);
        assert_eq!(default_ok_codes(&Method::PUT), &[201, 202]);
        assert_eq!(default_ok_codes(&Method::DELETE), &[202, 204]);
    }

    #[test]
    fn test_service_url_appends_slash() {
        let client = ServiceClient::with_transport(
            Arc::new(MockTransport::new()),
            "https://as.example.com/autoscaling-api/v1",
            "proj",
        )
        .unwrap();
        assert_eq!(
            client.inner.service_url(&["scaling_group"]).unwrap(),
            "https://as.example.com/autoscaling-api/v1/proj/scaling_group"
        );
    }

    #[test]
    fn test_service_url_encodes_segments() {
        let client = ServiceClient::with_transport(
            Arc::new(MockTransport::new()),
            "https://as.example.com/autoscaling-api/v1/",
            "proj",
        )
        .unwrap();
        assert_eq!(
            client.inner.service_url(&["scaling_group", "a/b?c#d%2F"]).unwrap(),
            "https://as.example.com/autoscaling-api/v1/proj/scaling_group/a%2Fb%3Fc%23d%252F"
        );
    }

    #[test]
    fn test_endpoint_must_be_base() {
        let result = ServiceClient::with_transport(
            Arc::new(MockTransport::new()),
            "mailto:ops@example.com",
            "p",
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_requires_project() {
        let result = ServiceClient::builder()
            .region("eu-west-0")
            .token("tok")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_with_region() {
        let client = ServiceClient::builder()
            .region("eu-west-0")
            .project_id("proj")
            .token("tok")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://as.eu-west-0.myhuaweicloud.com/autoscaling-api/v1/"
        );
        assert_eq!(client.project_id().as_str(), "proj");
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(decode_body(b"").unwrap().is_none());
        assert!(decode_body(b" \n").unwrap().is_none());
        assert!(matches!(decode_body(b"{not json"), Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn test_status_outside_allowlist() {
        let transport = Arc::new(MockTransport::new().respond(500, r#"{"error":"boom"}"#));
        let client =
            ServiceClient::with_transport(transport.clone(), "https://as.example.com/v1/", "p")
                .unwrap();

        let result = client
            .inner
            .get("https://as.example.com/v1/p/scaling_group", None)
            .await;
        match result {
            Err(Error::UnexpectedStatus { status, expected, body }) => {
                assert_eq!(status, 500);
                assert_eq!(expected, vec![200]);
                assert!(body.contains("boom"));
            }
            other => panic!("Expected UnexpectedStatus, got {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let transport = Arc::new(MockTransport::new().respond(200, "<html>"));
        let client =
            ServiceClient::with_transport(transport, "https://as.example.com/v1/", "p").unwrap();

        let result = client
            .inner
            .get("https://as.example.com/v1/p/scaling_group", None)
            .await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
