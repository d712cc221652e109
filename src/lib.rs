//! # Anthropic Chat Client
//!
//! Client for the Anthropic Messages API covering the two request shapes the
//! endpoint accepts: a one-shot request answered by a single JSON object, and
//! a streamed request answered by server-sent events.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_anthropic_chat::{create_client_from_env, AnthropicClient, ChatRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_client_from_env()?;
//!
//!     let request = ChatRequest::new("claude-3-opus-20240229", 1024)
//!         .with_message(Message::user("Hello, Claude"));
//!
//!     let mut stream = client.messages().create_message_stream(request).await?;
//!     while let Some(response) = stream.recv().await? {
//!         print!("{}", response.text());
//!     }
//!     stream.close()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Request header management
//! - `transport` - HTTP transport layer
//! - `services` - The Messages API: request encoding, response decoding, streaming
//! - `errors` - Error types
//! - `types` - Common types (Role, Usage, StopReason)
//! - `observability` - Logging setup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use auth::{ApiKeyAuthManager, AuthManager};
pub use client::{create_client, create_client_from_env, AnthropicClient, AnthropicClientImpl};
pub use config::{AnthropicConfig, AnthropicConfigBuilder, BetaFeature};
pub use errors::{AnthropicError, AnthropicResult};
pub use observability::{LogFormat, LogLevel, LoggingConfig};
pub use services::messages::{
    ChatRequest, ChatResponse, ContentBlock, Message, MessageStream, MessagesService,
    MessagesServiceImpl,
};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{Role, StopReason, Usage};

/// The default Anthropic API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// The default API version
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// The default request timeout (10 minutes for long-running requests)
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Path of the messages endpoint relative to the base URL
pub const MESSAGES_PATH: &str = "/messages";
