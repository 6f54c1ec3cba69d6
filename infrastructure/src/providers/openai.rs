//! Standard OpenAI chat-completions adapter

use super::{ProviderAdapter, wire};
use advisor_application::ports::llm_gateway::{ChatCompletionRequest, GatewayError};
use advisor_domain::{ProviderKind, ProviderSettings};
use async_trait::async_trait;
use tracing::debug;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// `POST {base_url}/v1/chat/completions` with bearer authentication.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiAdapter {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    /// Point the adapter at an OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn chat_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for OpenAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
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

        let url = self.chat_url();
        debug!("POST {} (model {})", url, request.model);
        let builder = self.client.post(&url).bearer_auth(settings.api_key.trim());
        wire::send(builder, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_application::AdviceParams;
    use advisor_domain::Message;

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            "gpt-4",
            vec![Message::user("Automate weekly reports")],
            &AdviceParams::default(),
        )
    }

    #[test]
    fn test_chat_url() {
        assert_eq!(
            OpenAiAdapter::new().chat_url(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            OpenAiAdapter::new()
                .with_base_url("http://localhost:8080/")
                .chat_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_empty_credential_is_rejected_locally() {
        let adapter = OpenAiAdapter::new().with_base_url("http://127.0.0.1:1");
        let settings = ProviderSettings::new(ProviderKind::OpenAi);
        let err = adapter.complete(&settings, &request()).await.unwrap_err();
        assert_eq!(err, GatewayError::MissingCredential("OpenAI".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let adapter = OpenAiAdapter::with_client(client).with_base_url("http://127.0.0.1:1");
        let settings = ProviderSettings::new(ProviderKind::OpenAi).with_api_key("sk-bad");
        let err = adapter.complete(&settings, &request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_key_with_newline_is_not_a_connection_error() {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let adapter = OpenAiAdapter::with_client(client).with_base_url("http://127.0.0.1:1");
        let settings = ProviderSettings::new(ProviderKind::OpenAi).with_api_key("sk-abc\ndef");
        let err = adapter.complete(&settings, &request()).await.unwrap_err();
        match err {
            GatewayError::RequestFailed(message) => assert!(message.contains("API key")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
