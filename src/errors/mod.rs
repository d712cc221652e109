//! Error types for the Anthropic chat client.
//!
//! Every failure a call can surface is one [`AnthropicError`] variant. End of
//! stream is not among them: it is reported as `Ok(None)` by
//! [`MessageStream::recv`](crate::services::messages::MessageStream::recv).

mod error;

pub use error::{AnthropicError, AnthropicResult};
