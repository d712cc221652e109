//! Messages service implementation

use super::request::build_request;
use super::stream::MessageStream;
use super::types::{ChatRequest, ChatResponse, Envelope};
use crate::auth::AuthManager;
use crate::errors::{AnthropicError, AnthropicResult};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Messages service trait for testability
#[async_trait]
pub trait MessagesService: Send + Sync {
    /// Send a one-shot request and decode the single response payload
    async fn create_message(&self, request: ChatRequest) -> AnthropicResult<ChatResponse>;

    /// Send a streamed request and return the open session
    async fn create_message_stream(&self, request: ChatRequest) -> AnthropicResult<MessageStream>;
}

/// Implementation of the Messages service
pub struct MessagesServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    url: Url,
}

impl MessagesServiceImpl {
    /// Create a new Messages service posting to `url`
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        url: Url,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            url,
        }
    }
}

#[async_trait]
impl MessagesService for MessagesServiceImpl {
    async fn create_message(&self, request: ChatRequest) -> AnthropicResult<ChatResponse> {
        let message_count = request.messages.len();
        let prepared = build_request(&self.url, self.auth_manager.as_ref(), request, false)?;

        debug!(
            url = %prepared.url,
            stream = false,
            messages = message_count,
            "Sending message request"
        );

        let response = self
            .transport
            .execute(
                Method::POST,
                prepared.url,
                prepared.headers,
                Some(prepared.body),
            )
            .await?;

        decode_message_response(response.status, &response.body)
    }

    async fn create_message_stream(&self, request: ChatRequest) -> AnthropicResult<MessageStream> {
        let message_count = request.messages.len();
        let prepared = build_request(&self.url, self.auth_manager.as_ref(), request, true)?;

        debug!(
            url = %prepared.url,
            stream = true,
            messages = message_count,
            "Opening message stream"
        );

        let response = self
            .transport
            .execute_stream(
                Method::POST,
                prepared.url,
                prepared.headers,
                Some(prepared.body),
            )
            .await?;

        // An error status carries a JSON error body, not an event stream.
        if !response.is_success() {
            let status = response.status;
            let body = response.into_bytes().await?;
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(status, "Message stream rejected by server");
            return Err(AnthropicError::Api { status, body });
        }

        Ok(MessageStream::new(response.body))
    }
}

/// Top-level payload kinds of a one-shot response.
enum PayloadKind {
    Message,
    Error,
    Other(String),
}

impl From<String> for PayloadKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "message" => PayloadKind::Message,
            "error" => PayloadKind::Error,
            _ => PayloadKind::Other(kind),
        }
    }
}

/// Decodes a complete one-shot response body.
///
/// The `type` tag is read first; only a `message` payload is decoded into a
/// [`ChatResponse`]. Unrecognized tags yield an empty response so that new
/// success shapes do not break older clients.
pub(crate) fn decode_message_response(status: u16, body: &[u8]) -> AnthropicResult<ChatResponse> {
    match PayloadKind::from(Envelope::peek(body)?.kind) {
        PayloadKind::Message => serde_json::from_slice(body).map_err(AnthropicError::decode),
        PayloadKind::Error => {
            let body = String::from_utf8_lossy(body).into_owned();
            warn!(status, "Server returned an error payload");
            Err(AnthropicError::Api { status, body })
        }
        PayloadKind::Other(kind) => {
            debug!(status, kind = %kind, "Unrecognized response type, returning empty response");
            Ok(ChatResponse::default())
        }
    }
}
