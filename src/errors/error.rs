//! Error types for the Anthropic chat client.

use thiserror::Error;

/// Result type alias for Anthropic operations
pub type AnthropicResult<T> = Result<T, AnthropicError>;

/// Main error type for the Anthropic chat client.
///
/// Each variant is a distinct failure class. None of them is retried by the
/// client; [`AnthropicError::is_retryable`] only informs the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnthropicError {
    /// Configuration error (invalid API key, base URL, or HTTP client setup)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// The request was rejected locally before anything was sent
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the violated constraint
        message: String,
    },

    /// The request body could not be encoded
    #[error("Error marshaling JSON: {message}")]
    Serialization {
        /// Underlying serializer message
        message: String,
    },

    /// Network error (connection failed, timeout, DNS, TLS)
    #[error("Error sending request: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// A response payload or stream frame was not valid JSON for its shape
    #[error("Error decoding response: {message}")]
    Decode {
        /// Underlying deserializer message
        message: String,
    },

    /// The server answered with an application-level error.
    ///
    /// `body` is the raw response body, kept verbatim as diagnostic context.
    #[error("Error response ({status}): {body}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Reading from an open event stream failed
    #[error("Stream error: {message}")]
    Stream {
        /// Error message describing the stream issue
        message: String,
    },
}

impl AnthropicError {
    /// Returns true if the caller could reasonably repeat the call.
    ///
    /// Network failures and overloaded or failing servers (429, 5xx, 529)
    /// qualify. The client never acts on this itself.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnthropicError::Network { .. } => true,
            AnthropicError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        AnthropicError::Decode {
            message: err.to_string(),
        }
    }

    pub(crate) fn serialization(err: serde_json::Error) -> Self {
        AnthropicError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for AnthropicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnthropicError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            AnthropicError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            AnthropicError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for AnthropicError {
    fn from(err: url::ParseError) -> Self {
        AnthropicError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
