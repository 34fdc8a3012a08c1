//! The HTTP transport seam.
//!
//! The dispatcher only needs "send one request, give me the status and the
//! raw body". [`ReqwestTransport`] is the production implementation; tests
//! and embedders can plug in their own [`Transport`].

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use super::config::ClientConfig;
use crate::auth::AuthToken;
use crate::{Error, Result};

/// Header carrying the API token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// A single outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Fully-qualified URL, query string included
    pub url: Url,
    /// Serialized JSON body, if any
    pub body: Option<Bytes>,
}

/// The raw outcome of a request that reached the server.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: Bytes,
}

/// Capability to perform one HTTP exchange.
///
/// Implementations report connection-level failures as errors and return
/// every received response, whatever its status. Status checking belongs to
/// the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and wait for the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
pub struct ReqwestTransport {
    http: reqwest::Client,
    token: AuthToken,
}

impl ReqwestTransport {
    /// Build a transport that authenticates with `token`.
    pub fn new(token: AuthToken, config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent);
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, token })
    }

    fn build_headers(&self, has_body: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTH_TOKEN_HEADER,
            HeaderValue::from_str(self.token.expose())
                .map_err(|_| Error::Config("Invalid token format".to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(headers)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let headers = self.build_headers(request.body.is_some())?;

        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("token", &self.token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_with_body() {
        let transport =
            ReqwestTransport::new(AuthToken::new("tok"), &ClientConfig::default()).unwrap();
        let headers = transport.build_headers(true).unwrap();

        assert_eq!(headers.get(AUTH_TOKEN_HEADER).unwrap(), "tok");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_headers_without_body() {
        let transport =
            ReqwestTransport::new(AuthToken::new("tok"), &ClientConfig::default()).unwrap();
        let headers = transport.build_headers(false).unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let transport =
            ReqwestTransport::new(AuthToken::new("bad\ntoken"), &ClientConfig::default())
                .unwrap();
        assert!(matches!(transport.build_headers(false), Err(Error::Config(_))));
    }

    #[test]
    fn test_client_build_failure_is_config_error() {
        let config = ClientConfig::default().with_user_agent("bad\nagent");
        let result = ReqwestTransport::new(AuthToken::new("tok"), &config);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
