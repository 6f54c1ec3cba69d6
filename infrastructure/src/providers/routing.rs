use super::azure::AzureOpenAiAdapter;
use super::openai::OpenAiAdapter;
use super::ProviderAdapter;
use advisor_application::ports::llm_gateway::{ChatCompletionRequest, GatewayError, LlmGateway};
use advisor_domain::{ProviderKind, ProviderSettings};
use async_trait::async_trait;
use std::sync::Arc;

/// Gateway that forwards each request to the adapter for the session's
/// provider kind.
pub struct RoutingGateway {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
}

impl RoutingGateway {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    /// OpenAI and Azure OpenAI adapters sharing one HTTP client
    pub fn with_default_adapters() -> Self {
        let client = reqwest::Client::new();
        Self::new(vec![
            Arc::new(OpenAiAdapter::with_client(client.clone())),
            Arc::new(AzureOpenAiAdapter::with_client(client)),
        ])
    }

    fn resolve(&self, kind: ProviderKind) -> Result<&dyn ProviderAdapter, GatewayError> {
        self.adapters
            .iter()
            .find(|a| a.kind() == kind)
            .map(|a| a.as_ref())
            .ok_or_else(|| {
                GatewayError::ModelNotAvailable(format!(
                    "no adapter configured for {}",
                    kind.display_name()
                ))
            })
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn complete(
        &self,
        settings: &ProviderSettings,
        request: &ChatCompletionRequest,
    ) -> Result<String, GatewayError> {
        self.resolve(settings.kind)?.complete(settings, request).await
    }
}
