//! Single-page pagination for list endpoints.
//!
//! A [`Pager`] describes a list request. Driving it performs exactly one
//! GET, and the decoded response becomes the only page: list endpoints are
//! treated as returning their whole result set at once, and no follow-up
//! requests are issued.
//!
//! An error detected while building the request (for example a query string
//! that cannot be encoded) is stored in the pager and reported the first
//! time it is driven, without touching the network.

use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use serde_json::Value;

use super::ClientInner;
use crate::{Error, Result};

/// A page of results built from a decoded response body.
pub trait Page: Sized + Send + Unpin + 'static {
    /// Wrap the decoded body of a list response.
    fn from_body(body: Value) -> Self;

    /// Returns `true` if the page carries no records.
    fn is_empty(&self) -> Result<bool>;
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A not-yet-issued list request.
///
/// # Example
///
/// ```no_run
/// use autoscaling_rs::api::ListOpts;
/// use autoscaling_rs::models::GroupStatus;
///
/// # async fn example(client: autoscaling_rs::ServiceClient) -> autoscaling_rs::Result<()> {
/// let opts = ListOpts {
///     status: Some(GroupStatus::InService),
///     ..Default::default()
/// };
///
/// for page in client.groups().list(Some(&opts)).all_pages().await? {
///     for group in page.extract_groups()? {
///         println!("{} ({})", group.name, group.id);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[must_use = "a pager does nothing until it is driven"]
pub struct Pager<P> {
    inner: Arc<ClientInner>,
    url: String,
    err: Option<Error>,
    _marker: PhantomData<P>,
}

impl<P: Page> Pager<P> {
    pub(crate) fn new(inner: Arc<ClientInner>, url: String) -> Self {
        Self {
            inner,
            url,
            err: None,
            _marker: PhantomData,
        }
    }

    pub(crate) fn failed(inner: Arc<ClientInner>, err: Error) -> Self {
        Self {
            inner,
            url: String::new(),
            err: Some(err),
            _marker: PhantomData,
        }
    }

    /// The URL the list request will be sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The construction error, if any.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Turn the pager into a stream of pages.
    pub fn into_stream(self) -> PageStream<P> {
        let state = match self.err {
            Some(err) => StreamState::Failed(err),
            None => StreamState::Ready(self.url),
        };
        PageStream {
            inner: self.inner,
            state,
            pending_fetch: None,
        }
    }

    /// Fetch every page.
    pub async fn all_pages(self) -> Result<Vec<P>> {
        let mut stream = self.into_stream();
        let mut pages = Vec::new();
        while let Some(page) = stream.next().await {
            pages.push(page?);
        }
        Ok(pages)
    }

    /// Call `handler` for each non-empty page until it returns `false`.
    pub async fn each_page<F>(self, mut handler: F) -> Result<()>
    where
        F: FnMut(P) -> Result<bool>,
    {
        let mut stream = self.into_stream();
        while let Some(page) = stream.next().await {
            let page = page?;
            if page.is_empty()? {
                break;
            }
            if !handler(page)? {
                break;
            }
        }
        Ok(())
    }
}

impl<P> std::fmt::Debug for Pager<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("url", &self.url)
            .field("err", &self.err)
            .finish()
    }
}

enum StreamState {
    Failed(Error),
    Ready(String),
    Done,
}

/// A stream of pages produced by a [`Pager`].
pub struct PageStream<P> {
    inner: Arc<ClientInner>,
    state: StreamState,
    pending_fetch: Option<BoxFuture<'static, Result<P>>>,
}

impl<P: Page> Stream for PageStream<P> {
    type Item = Result<P>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(ref mut fut) = this.pending_fetch {
                let outcome = match fut.as_mut().poll(cx) {
                    Poll::Ready(outcome) => outcome,
                    Poll::Pending => return Poll::Pending,
                };
                this.pending_fetch = None;
                return Poll::Ready(Some(outcome));
            }

            match std::mem::replace(&mut this.state, StreamState::Done) {
                StreamState::Failed(err) => return Poll::Ready(Some(Err(err))),
                StreamState::Ready(url) => {
                    let inner = this.inner.clone();
                    this.pending_fetch = Some(Box::pin(async move {
                        let body = inner.get(&url, None).await?;
                        Ok(P::from_body(body.unwrap_or(Value::Null)))
                    }));
                    // loop back to poll the new future
                }
                StreamState::Done => return Poll::Ready(None),
            }
        }
    }
}

impl<P> Unpin for PageStream<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MockTransport;
    use crate::ServiceClient;

    struct RawPage(Value);

    impl Page for RawPage {
        fn from_body(body: Value) -> Self {
            RawPage(body)
        }

        fn is_empty(&self) -> Result<bool> {
            Ok(self.0.as_array().map_or(true, Vec::is_empty))
        }
    }

    fn client(transport: Arc<MockTransport>) -> ServiceClient {
        ServiceClient::with_transport(transport, "https://as.example.com/v1/", "p").unwrap()
    }

    #[tokio::test]
    async fn test_single_request_single_page() {
        let transport = Arc::new(MockTransport::new().respond(200, "[1, 2, 3]"));
        let client = client(transport.clone());
        let pager: Pager<RawPage> =
            Pager::new(client.inner.clone(), "https://as.example.com/v1/p/x".into());

        let pages = pager.all_pages().await.unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, serde_json::json!([1, 2, 3]));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_stored_error_surfaces_without_request() {
        let transport = Arc::new(MockTransport::new());
        let client = client(transport.clone());
        let pager: Pager<RawPage> = Pager::failed(
            client.inner.clone(),
            Error::Serialization("bad query".into()),
        );
        assert!(pager.err().is_some());

        let mut stream = pager.into_stream();
        assert!(matches!(stream.next().await, Some(Err(Error::Serialization(_)))));
        assert!(stream.next().await.is_none());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_each_page_skips_empty_page() {
        let transport = Arc::new(MockTransport::new().respond(200, "[]"));
        let client = client(transport);
        let pager: Pager<RawPage> =
            Pager::new(client.inner.clone(), "https://as.example.com/v1/p/x".into());

        let mut calls = 0;
        pager
            .each_page(|_| {
                calls += 1;
                Ok(true)
            })
            .await
            .unwrap();
        assert_eq!(calls, 0);
    }
}
