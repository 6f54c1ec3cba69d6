//! Completion API adapters
//!
//! Each [`ProviderAdapter`] knows how to reach one [`ProviderKind`];
//! [`routing::RoutingGateway`] picks the adapter matching the session's
//! settings and exposes them all as a single
//! [`LlmGateway`](advisor_application::LlmGateway).

pub mod azure;
pub mod openai;
pub mod routing;
mod wire;

use advisor_application::ports::llm_gateway::{ChatCompletionRequest, GatewayError};
use advisor_domain::{ProviderKind, ProviderSettings};
use async_trait::async_trait;

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Send one chat-completion request and return the first choice's text.
    async fn complete(
        &self,
        settings: &ProviderSettings,
        request: &ChatCompletionRequest,
    ) -> Result<String, GatewayError>;
}
