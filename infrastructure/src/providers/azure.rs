//! Azure OpenAI chat-completions adapter
//!
//! Azure addresses a model by deployment name in the URL path and
//! authenticates with an `api-key` header.

use super::{ProviderAdapter, wire};
use advisor_application::ports::llm_gateway::{ChatCompletionRequest, GatewayError};
use advisor_domain::{ProviderKind, ProviderSettings};
use async_trait::async_trait;
use tracing::debug;

/// Used when neither the session nor `AZURE_OPENAI_ENDPOINT` names an endpoint
pub const DEFAULT_AZURE_ENDPOINT: &str = "https://api.azure.openai.com";

pub struct AzureOpenAiAdapter {
    client: reqwest::Client,
    default_endpoint: String,
}

impl AzureOpenAiAdapter {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            default_endpoint: DEFAULT_AZURE_ENDPOINT.to_string(),
        }
    }

    /// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`
    pub fn chat_url(endpoint: &str, deployment: &str, api_version: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            api_version
        )
    }

    fn endpoint<'a>(&'a self, settings: &'a ProviderSettings) -> &'a str {
        settings
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(&self.default_endpoint)
    }
}

impl Default for AzureOpenAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for AzureOpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Azure
    }

    async fn complete(
        &self,
        settings: &ProviderSettings,
        request: &ChatCompletionRequest,
    ) -> Result<String, GatewayError> {
        if !settings.has_credential() {
            return Err(GatewayError::MissingCredential(
                self.kind().display_name().to_string(),
            ));
        }

        let url = Self::chat_url(
            self.endpoint(settings),
            &request.model,
            &settings.api_version,
        );
        debug!("POST {}", url);
        let builder = self
            .client
            .post(&url)
            .header("api-key", settings.api_key.trim());
        wire::send(builder, request).await
    }
}
