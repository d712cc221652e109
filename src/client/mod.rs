//! Client interface and implementation for the Anthropic API.

use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::config::AnthropicConfig;
use crate::errors::AnthropicResult;
use crate::services::messages::{MessagesService, MessagesServiceImpl};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Trait defining the main Anthropic client interface
pub trait AnthropicClient: Send + Sync {
    /// Access the Messages API
    fn messages(&self) -> Arc<dyn MessagesService>;
}

/// Implementation of the Anthropic client
pub struct AnthropicClientImpl {
    config: Arc<AnthropicConfig>,
    messages: Arc<MessagesServiceImpl>,
}

impl AnthropicClientImpl {
    /// Create a new client from configuration
    pub fn new(config: AnthropicConfig) -> AnthropicResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn HttpTransport>;
        let auth_manager = Arc::new(ApiKeyAuthManager::from_config(&config)?) as Arc<dyn AuthManager>;

        Self::with_dependencies(config, transport, auth_manager)
    }

    /// Create a new client with a custom transport and auth manager
    pub fn with_dependencies(
        config: AnthropicConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> AnthropicResult<Self> {
        auth_manager.validate_api_key()?;

        let url = config.messages_url()?;
        let messages = Arc::new(MessagesServiceImpl::new(transport, auth_manager, url));

        Ok(Self {
            config: Arc::new(config),
            messages,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }
}

impl AnthropicClient for AnthropicClientImpl {
    fn messages(&self) -> Arc<dyn MessagesService> {
        self.messages.clone()
    }
}

/// Create a new Anthropic client from configuration
pub fn create_client(config: AnthropicConfig) -> AnthropicResult<AnthropicClientImpl> {
    AnthropicClientImpl::new(config)
}

/// Create a new Anthropic client from environment variables
pub fn create_client_from_env() -> AnthropicResult<AnthropicClientImpl> {
    let config = AnthropicConfig::from_env()?;
    create_client(config)
}
