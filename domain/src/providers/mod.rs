//! Provider configuration types.
//!
//! [`ProviderSettings`] is what a session uses to reach a completion API:
//! which provider, which model, the credential, and the Azure-only endpoint
//! and API version. [`ModelNameTransform`] captures the per-provider rewrite
//! applied to the model name before it goes on the wire.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API version sent to Azure OpenAI when none is configured.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-02-15-preview";

/// Completion API variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Standard OpenAI API
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    /// Azure OpenAI (managed deployments)
    #[serde(rename = "azure")]
    Azure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider `{0}` (expected `openai` or `azure`)")]
pub struct UnknownProvider(pub String);

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Azure => "azure",
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Azure => "Azure OpenAI",
        }
    }

    /// Models suggested for this provider, default first
    pub fn available_models(&self) -> Vec<Model> {
        match self {
            ProviderKind::OpenAi => Model::openai_models(),
            ProviderKind::Azure => Model::azure_models(),
        }
    }

    pub fn default_model(&self) -> Model {
        match self {
            ProviderKind::OpenAi => Model::Gpt35Turbo,
            ProviderKind::Azure => Model::AzureGpt35Turbo,
        }
    }

    /// Azure deployment names cannot contain periods.
    pub fn default_name_transform(&self) -> ModelNameTransform {
        match self {
            ProviderKind::OpenAi => ModelNameTransform::Identity,
            ProviderKind::Azure => ModelNameTransform::StripPeriods,
        }
    }

    /// Environment variable consulted for the credential when none is configured
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Azure => "AZURE_OPENAI_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "open-ai" => Ok(ProviderKind::OpenAi),
            "azure" | "azure-openai" | "azure_openai" => Ok(ProviderKind::Azure),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

/// Rewrite applied to the model name before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelNameTransform {
    /// Send the name unchanged
    #[default]
    Identity,
    /// Remove every `.` (`gpt-3.5-turbo` → `gpt-35-turbo`)
    StripPeriods,
}

impl ModelNameTransform {
    pub fn apply(&self, name: &str) -> String {
        match self {
            ModelNameTransform::Identity => name.to_string(),
            ModelNameTransform::StripPeriods => name.replace('.', ""),
        }
    }
}

/// Settings a session uses to reach its completion API.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Opaque credential; only checked for emptiness before use.
    pub api_key: String,
    pub model: Model,
    /// Endpoint override (Azure only)
    pub endpoint: Option<String>,
    /// API version query parameter (Azure only)
    pub api_version: String,
    pub name_transform: ModelNameTransform,
}

impl ProviderSettings {
    /// Settings for `kind` with its default model and name transform
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            api_key: String::new(),
            model: kind.default_model(),
            endpoint: None,
            api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            name_transform: kind.default_name_transform(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_name_transform(mut self, transform: ModelNameTransform) -> Self {
        self.name_transform = transform;
        self
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Model name as it will be sent to the provider
    pub fn wire_model_name(&self) -> String {
        self.name_transform.apply(self.model.as_str())
    }

    /// Credential with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.is_empty() {
            return "(not set)".to_string();
        }
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self::new(ProviderKind::default())
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("kind", &self.kind)
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("name_transform", &self.name_transform)
            .finish()
    }
}
