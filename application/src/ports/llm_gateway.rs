//! LLM Gateway port
//!
//! Defines the interface for sending a chat-completion request to a provider.

use crate::config::AdviceParams;
use advisor_domain::{Message, ProviderSettings};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned no completion")]
    EmptyResponse,

    #[error("No API key configured for {0}")]
    MissingCredential(String),
}

/// A single chat-completion request.
///
/// Serializes to the body shared by OpenAI and Azure OpenAI:
/// `{model, messages, temperature, max_tokens}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name after the provider's name transform
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, params: &AdviceParams) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches a completion API.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `request` using `settings` and return the first choice's text.
    async fn complete(
        &self,
        settings: &ProviderSettings,
        request: &ChatCompletionRequest,
    ) -> Result<String, GatewayError>;
}
