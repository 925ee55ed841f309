//! Completion gateway port
//!
//! Defines the interface for posing a prompt to an LLM provider.

use async_trait::async_trait;
use panel_domain::ProviderId;
use thiserror::Error;

/// Errors an adapter can surface for a single completion call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Timed out after {0}s")]
    Timeout(u64),
}

/// A single prompt for one provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Optional system prompt.
    pub system: Option<String>,
    /// The user prompt.
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Gateway for LLM completions
///
/// The application layer sees one operation: pose a prompt to a named
/// provider and get its text back. How the provider is reached (hosted API,
/// local server) is the adapter's business, in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Request a completion from the given provider.
    async fn complete(
        &self,
        provider: &ProviderId,
        request: CompletionRequest,
    ) -> Result<String, GatewayError>;

    /// Providers this gateway can actually reach.
    fn available_providers(&self) -> Vec<ProviderId>;
}
