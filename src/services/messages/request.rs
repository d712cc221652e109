//! Wire encoding of chat requests

use super::types::ChatRequest;
use crate::auth::AuthManager;
use crate::errors::{AnthropicError, AnthropicResult};
use bytes::Bytes;
use http::HeaderMap;
use url::Url;

/// A request ready to hand to the transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Endpoint to POST to
    pub url: Url,
    /// Fixed header set from the auth manager
    pub headers: HeaderMap,
    /// JSON-encoded request body
    pub body: Bytes,
}

/// Encodes `request` for the given mode, overwriting its `stream` flag.
///
/// Nothing is returned unless the whole body encoded, so a failure here
/// never leads to a partial request on the wire.
pub fn build_request(
    url: &Url,
    auth_manager: &dyn AuthManager,
    mut request: ChatRequest,
    stream: bool,
) -> AnthropicResult<PreparedRequest> {
    validate_request(&request)?;

    request.stream = stream;
    let body = serde_json::to_vec(&request).map_err(AnthropicError::serialization)?;

    Ok(PreparedRequest {
        url: url.clone(),
        headers: auth_manager.get_headers(),
        body: Bytes::from(body),
    })
}

fn validate_request(request: &ChatRequest) -> AnthropicResult<()> {
    if request.model.trim().is_empty() {
        return Err(AnthropicError::Validation {
            message: "model is required".to_string(),
        });
    }

    if request.max_tokens == 0 {
        return Err(AnthropicError::Validation {
            message: "max_tokens must be greater than 0".to_string(),
        });
    }

    Ok(())
}
