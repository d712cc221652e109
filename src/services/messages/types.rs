//! Type definitions for the Messages API

use crate::errors::{AnthropicError, AnthropicResult};
use crate::types::{Role, StopReason, Usage};
use serde::{Deserialize, Deserializer, Serialize};

/// One conversation turn. Sent to the wire in the order supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Who said it
    pub role: Role,
    /// Plain text of the turn
    pub content: String,
}

impl Message {
    /// A user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// An assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A chat request for the `/messages` endpoint.
///
/// `stream` is owned by the client: the one-shot path always sends `false`
/// and the streaming path always sends `true`, whatever the caller set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// Upper bound on generated tokens; must be greater than zero
    pub max_tokens: u32,
    /// Model identifier
    pub model: String,
    /// System instruction, omitted from the body when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub system: String,
    /// Conversation so far, oldest first
    pub messages: Vec<Message>,
    /// Overwritten on every call
    #[serde(default)]
    pub stream: bool,
}

impl ChatRequest {
    /// Create an empty request for `model`
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            max_tokens,
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the system instruction
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Append one message
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Append messages, keeping their order
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }
}

/// One unit of generated or echoed text.
///
/// `block_type` is the server's tag (`"text"`, `"text_delta"`, ...). Blocks
/// that carry no text decode with an empty `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    /// Server-assigned block tag
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub block_type: String,
    /// Block text, empty for non-text blocks
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Result of a chat call.
///
/// The one-shot path fills `content` and never `delta`; each streamed
/// response carries exactly one `delta` and an empty `content`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// Message id, one-shot only
    #[serde(default)]
    pub id: Option<String>,
    /// Model that produced the message, one-shot only
    #[serde(default)]
    pub model: Option<String>,
    /// Author role, one-shot only
    #[serde(default)]
    pub role: Option<Role>,
    /// Every content block of a one-shot response, in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentBlock>,
    /// Why generation stopped, one-shot only
    #[serde(default)]
    pub stop_reason: Option<StopReason>,
    /// Token usage, one-shot only
    #[serde(default)]
    pub usage: Option<Usage>,
    /// The single fragment of a streamed response
    #[serde(skip)]
    pub delta: Option<ContentBlock>,
}

impl ChatResponse {
    /// Wraps a single streamed fragment
    pub fn from_delta(delta: ContentBlock) -> Self {
        Self {
            delta: Some(delta),
            ..Default::default()
        }
    }

    /// Text of the populated payload: the delta's text, or every block's
    /// text concatenated in order.
    pub fn text(&self) -> String {
        match &self.delta {
            Some(delta) => delta.text.clone(),
            None => self.content.iter().map(|b| b.text.as_str()).collect(),
        }
    }
}

/// The minimal shape read from a payload before deciding how to decode it.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Envelope {
    pub(crate) fn peek(bytes: &[u8]) -> AnthropicResult<Self> {
        serde_json::from_slice(bytes).map_err(AnthropicError::decode)
    }
}

/// Decodes an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
