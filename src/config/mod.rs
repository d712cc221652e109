//! Configuration types for the Anthropic chat client.

use crate::errors::{AnthropicError, AnthropicResult};
use crate::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MESSAGES_PATH};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Beta feature markers sent in the `anthropic-beta` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetaFeature {
    /// Messages API beta (2023-12-15)
    Messages,
    /// Custom beta marker, sent verbatim
    Custom(String),
}

impl BetaFeature {
    /// Returns the header value for this beta feature
    pub fn header_value(&self) -> String {
        match self {
            BetaFeature::Messages => "messages-2023-12-15".to_string(),
            BetaFeature::Custom(s) => s.clone(),
        }
    }
}

/// Configuration for the Anthropic chat client.
///
/// Held behind an `Arc` by the client and never mutated after construction.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication
    pub api_key: SecretString,
    /// Base URL the `/messages` endpoint is resolved against
    pub base_url: String,
    /// API version to use
    pub api_version: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Beta features to enable
    pub beta_features: Vec<BetaFeature>,
}

impl AnthropicConfig {
    /// Creates a new configuration builder
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }

    /// Creates a configuration from environment variables
    pub fn from_env() -> AnthropicResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            AnthropicError::Configuration {
                message: "ANTHROPIC_API_KEY environment variable not set".to_string(),
            }
        })?;

        let mut builder = Self::builder().api_key(SecretString::new(api_key));

        if let Ok(base_url) = std::env::var("ANTHROPIC_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(api_version) = std::env::var("ANTHROPIC_API_VERSION") {
            builder = builder.api_version(api_version);
        }

        if let Some(timeout_secs) = std::env::var("ANTHROPIC_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        builder.build()
    }

    /// Resolves the messages endpoint, tolerating a trailing `/` on the base URL.
    pub fn messages_url(&self) -> AnthropicResult<Url> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, MESSAGES_PATH))?)
    }
}

/// Builder for AnthropicConfig
#[derive(Default)]
pub struct AnthropicConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    beta_features: Option<Vec<BetaFeature>>,
}

impl AnthropicConfigBuilder {
    /// Sets the API key
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the API version
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a beta feature on top of the defaults
    pub fn add_beta_feature(mut self, feature: BetaFeature) -> Self {
        self.beta_features
            .get_or_insert_with(default_beta_features)
            .push(feature);
        self
    }

    /// Replaces the beta features; an empty list omits the header
    pub fn beta_features(mut self, features: Vec<BetaFeature>) -> Self {
        self.beta_features = Some(features);
        self
    }

    /// Builds the configuration
    pub fn build(self) -> AnthropicResult<AnthropicConfig> {
        let api_key = self.api_key.ok_or_else(|| AnthropicError::Configuration {
            message: "API key is required".to_string(),
        })?;

        let config = AnthropicConfig {
            api_key,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            beta_features: self.beta_features.unwrap_or_else(default_beta_features),
        };

        // Reject a base URL the endpoint cannot be resolved against.
        config.messages_url()?;

        Ok(config)
    }
}

fn default_beta_features() -> Vec<BetaFeature> {
    vec![BetaFeature::Messages]
}
