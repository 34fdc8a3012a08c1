//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::Result;

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
        });
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Decoded JSON body of the `n`th request.
    pub(crate) fn request_json(&self, n: usize) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let body = requests[n].body.as_ref().expect("request had no body");
        serde_json::from_slice(body).unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        // unscripted calls get a status no operation accepts
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(HttpResponse {
                status: 599,
                body: Bytes::from_static(b"no canned response"),
            }))
    }
}
