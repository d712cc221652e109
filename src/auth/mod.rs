//! Request header management for the Anthropic API.

use crate::config::{AnthropicConfig, BetaFeature};
use crate::errors::{AnthropicError, AnthropicResult};
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header carrying the API version marker.
pub const VERSION_HEADER: &str = "anthropic-version";
/// Header carrying the comma-joined beta markers.
pub const BETA_HEADER: &str = "anthropic-beta";

/// Supplies the fixed header set attached to every request.
pub trait AuthManager: Send + Sync {
    /// Get the headers for a request
    fn get_headers(&self) -> HeaderMap;

    /// Validate the API key format
    fn validate_api_key(&self) -> AnthropicResult<()>;
}

/// Attaches the configured API key under `x-api-key`.
///
/// The header map is assembled once, so a key that cannot be sent is
/// rejected when the manager is built rather than on first use.
pub struct ApiKeyAuthManager {
    api_key: SecretString,
    headers: HeaderMap,
}

impl ApiKeyAuthManager {
    /// Create a new auth manager
    pub fn new(
        api_key: &SecretString,
        api_version: &str,
        beta_features: &[BetaFeature],
    ) -> AnthropicResult<Self> {
        let mut headers = HeaderMap::new();

        let mut key_value = api_key_value(api_key)?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        headers.insert(
            HeaderName::from_static(VERSION_HEADER),
            header_value(api_version, VERSION_HEADER)?,
        );

        if !beta_features.is_empty() {
            let beta = beta_features
                .iter()
                .map(BetaFeature::header_value)
                .collect::<Vec<_>>()
                .join(",");
            headers.insert(
                HeaderName::from_static(BETA_HEADER),
                header_value(&beta, BETA_HEADER)?,
            );
        }

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            api_key: api_key.clone(),
            headers,
        })
    }

    /// Create an auth manager from a client configuration
    pub fn from_config(config: &AnthropicConfig) -> AnthropicResult<Self> {
        Self::new(&config.api_key, &config.api_version, &config.beta_features)
    }
}

impl AuthManager for ApiKeyAuthManager {
    fn get_headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    fn validate_api_key(&self) -> AnthropicResult<()> {
        api_key_value(&self.api_key).map(|_| ())
    }
}

fn api_key_value(api_key: &SecretString) -> AnthropicResult<HeaderValue> {
    let key = api_key.expose_secret();
    if key.is_empty() {
        return Err(AnthropicError::Configuration {
            message: "API key cannot be empty".to_string(),
        });
    }

    HeaderValue::from_str(key).map_err(|_| AnthropicError::Configuration {
        message: "API key contains characters not allowed in a header".to_string(),
    })
}

fn header_value(value: &str, name: &str) -> AnthropicResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| AnthropicError::Configuration {
        message: format!("Invalid value for header {}", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn test_api_key_auth_manager_headers() {
        let manager =
            ApiKeyAuthManager::new(&key("sk-ant-test123"), "2023-06-01", &[BetaFeature::Messages])
                .unwrap();

        let headers = manager.get_headers();

        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "sk-ant-test123");
        assert!(headers.get(API_KEY_HEADER).unwrap().is_sensitive());
        assert_eq!(headers.get(VERSION_HEADER).unwrap(), "2023-06-01");
        assert_eq!(headers.get(BETA_HEADER).unwrap(), "messages-2023-12-15");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
    }

    #[test]
    fn test_multiple_beta_features_are_comma_joined() {
        let manager = ApiKeyAuthManager::new(
            &key("sk-ant-test123"),
            "2023-06-01",
            &[
                BetaFeature::Messages,
                BetaFeature::Custom("tools-2024-04-04".to_string()),
            ],
        )
        .unwrap();

        let headers = manager.get_headers();
        assert_eq!(
            headers.get(BETA_HEADER).unwrap(),
            "messages-2023-12-15,tools-2024-04-04"
        );
    }

    #[test]
    fn test_no_beta_header_without_features() {
        let manager = ApiKeyAuthManager::new(&key("sk-ant-test123"), "2023-06-01", &[]).unwrap();
        assert!(manager.get_headers().get(BETA_HEADER).is_none());
    }

    #[test]
    fn test_validate_api_key() {
        let manager = ApiKeyAuthManager::new(&key("sk-ant-test123"), "2023-06-01", &[]).unwrap();
        assert!(manager.validate_api_key().is_ok());
    }

    #[test]
    fn test_rejects_empty_key() {
        let result = ApiKeyAuthManager::new(&key(""), "2023-06-01", &[]);
        assert!(matches!(result, Err(AnthropicError::Configuration { .. })));
    }

    #[test]
    fn test_rejects_key_with_newline() {
        let result = ApiKeyAuthManager::new(&key("sk-ant\nbad"), "2023-06-01", &[]);
        assert!(matches!(result, Err(AnthropicError::Configuration { .. })));
    }
}
