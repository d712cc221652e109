//! Mock implementations for testing.

use crate::auth::AuthManager;
use crate::errors::{AnthropicError, AnthropicResult};
use crate::transport::{HttpResponse, HttpTransport, StreamingResponse};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use http::{HeaderMap, Method};
use mockall::mock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::Poll;
use url::Url;

/// A request captured by [`MockHttpTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: Method,
    /// Target URL
    pub url: Url,
    /// Headers as sent
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Bytes>,
}

impl RecordedRequest {
    /// The request body parsed as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or_default()).unwrap()
    }
}

/// Mock HTTP transport replaying queued responses in order
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<AnthropicResult<HttpResponse>>>,
    stream_responses: Mutex<VecDeque<AnthropicResult<(u16, Vec<AnthropicResult<Bytes>>)>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    body_polls: Arc<AtomicUsize>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a complete response
    pub fn with_response(self, status: u16, body: impl Into<Bytes>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }));
        self
    }

    /// Queue a transport failure for `execute`
    pub fn with_error(self, error: AnthropicError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a streamed response delivered as the given chunks
    pub fn with_stream(self, status: u16, chunks: Vec<&str>) -> Self {
        let chunks = chunks
            .into_iter()
            .map(|c| Ok(Bytes::from(c.to_string())))
            .collect();
        self.with_stream_chunks(status, chunks)
    }

    /// Queue a streamed response with explicit chunk results
    pub fn with_stream_chunks(self, status: u16, chunks: Vec<AnthropicResult<Bytes>>) -> Self {
        self.stream_responses
            .lock()
            .unwrap()
            .push_back(Ok((status, chunks)));
        self
    }

    /// Queue a transport failure for `execute_stream`
    pub fn with_stream_error(self, error: AnthropicError) -> Self {
        self.stream_responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of times any streamed body has been polled
    pub fn body_polls(&self) -> usize {
        self.body_polls.load(Ordering::SeqCst)
    }

    fn record(&self, method: Method, url: Url, headers: HeaderMap, body: Option<Bytes>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url,
            headers,
            body,
        });
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<HttpResponse> {
        self.record(method, url, headers, body);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AnthropicError::Network {
                    message: "No mock response configured".to_string(),
                })
            })
    }

    async fn execute_stream(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<StreamingResponse> {
        self.record(method, url, headers, body);

        let (status, chunks) = self
            .stream_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok((200, Vec::new())))?;

        let polls = self.body_polls.clone();
        let mut chunks = chunks.into_iter();
        let body = stream::poll_fn(move |_| {
            polls.fetch_add(1, Ordering::SeqCst);
            Poll::Ready(chunks.next())
        });

        Ok(StreamingResponse {
            status,
            headers: HeaderMap::new(),
            body: Box::pin(body),
        })
    }
}

mock! {
    pub AuthManager {}

    impl AuthManager for AuthManager {
        fn get_headers(&self) -> HeaderMap;
        fn validate_api_key(&self) -> AnthropicResult<()>;
    }
}

/// An auth manager mock returning the usual header set on every call
pub fn mock_auth_manager() -> MockAuthManager {
    let mut auth = MockAuthManager::new();
    auth.expect_get_headers().returning(|| {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", "sk-ant-test".parse().unwrap());
        headers.insert("anthropic-version", "2023-06-01".parse().unwrap());
        headers.insert("anthropic-beta", "messages-2023-12-15".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        headers
    });
    auth.expect_validate_api_key().returning(|| Ok(()));
    auth
}
