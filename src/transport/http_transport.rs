//! HTTP transport implementations.

use crate::errors::{AnthropicError, AnthropicResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use http::{HeaderMap, Method};
use reqwest::Client;
use std::pin::Pin;
use std::time::Duration;
use url::Url;

/// A live response body delivered as chunks of arbitrary size.
pub type ByteStream = Pin<Box<dyn Stream<Item = AnthropicResult<Bytes>> + Send>>;

/// A response whose body has been read to the end.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Complete response body
    pub body: Bytes,
}

/// A response whose body is still open.
pub struct StreamingResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Unread response body
    pub body: ByteStream,
}

impl StreamingResponse {
    /// Returns true for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Reads the remaining body into memory, consuming the response.
    pub async fn into_bytes(mut self) -> AnthropicResult<Bytes> {
        let mut body = Vec::new();
        while let Some(chunk) = self.body.next().await {
            body.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(body))
    }
}

/// HTTP transport trait for making requests to the Anthropic API.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and read the whole response body
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<HttpResponse>;

    /// Send a request and hand back the response body unread
    async fn execute_stream(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<StreamingResponse>;
}

/// Reqwest-based HTTP transport implementation
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport
    pub fn new(timeout: Duration) -> AnthropicResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnthropicError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<reqwest::Response> {
        let mut request = self.client.request(method, url).headers(headers);

        if let Some(body_data) = body {
            request = request.body(body_data);
        }

        Ok(request.send().await?)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<HttpResponse> {
        let response = self.dispatch(method, url, headers, body).await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn execute_stream(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> AnthropicResult<StreamingResponse> {
        let response = self.dispatch(method, url, headers, body).await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes_stream().map(|chunk| {
            chunk.map_err(|e| AnthropicError::Stream {
                message: format!("Failed to read response body: {}", e),
            })
        });

        Ok(StreamingResponse {
            status,
            headers,
            body: Box::pin(body),
        })
    }
}
