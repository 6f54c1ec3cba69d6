//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [provider]
//! kind = "azure"
//! api_key = "..."
//! model = "gpt-4"
//! endpoint = "https://contoso.openai.azure.com"
//! api_version = "2024-02-15-preview"
//! model_name_transform = "strip_periods"
//!
//! [output]
//! format = "markdown"
//! color = true
//! ```

use advisor_domain::{
    Model, ModelNameTransform, OutputFormat, ProviderKind, ProviderSettings,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable consulted for the Azure endpoint at start-up
pub const AZURE_ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.api_version cannot be empty")]
    EmptyApiVersion,

    #[error("provider.endpoint must be an http(s) URL, got `{0}`")]
    InvalidEndpoint(String),
}

/// Raw provider configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub kind: ProviderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Defaults to the provider's own transform when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name_transform: Option<ModelNameTransform>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let provider = &self.provider;

        if let Some(model) = &provider.model
            && model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if let Some(version) = &provider.api_version
            && version.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyApiVersion);
        }

        if let Some(endpoint) = &provider.endpoint {
            let endpoint = endpoint.trim();
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ConfigValidationError::InvalidEndpoint(endpoint.to_string()));
            }
        }

        Ok(())
    }

    /// Build session settings, reading credentials and the Azure endpoint
    /// from the process environment when the file leaves them out.
    pub fn provider_settings(&self) -> ProviderSettings {
        self.provider_settings_with(|key| std::env::var(key).ok())
    }

    /// Like [`provider_settings`](Self::provider_settings) with an explicit
    /// environment lookup.
    pub fn provider_settings_with(&self, env: impl Fn(&str) -> Option<String>) -> ProviderSettings {
        let provider = &self.provider;
        let kind = provider.kind;
        let non_empty = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = ProviderSettings::new(kind);

        if let Some(key) = non_empty(provider.api_key.clone()).or_else(|| non_empty(env(kind.api_key_env())))
        {
            settings = settings.with_api_key(key);
        }
        if let Some(model) = non_empty(provider.model.clone()) {
            settings = settings.with_model(Model::from(model.as_str()));
        }
        if let Some(endpoint) =
            non_empty(provider.endpoint.clone()).or_else(|| non_empty(env(AZURE_ENDPOINT_ENV)))
        {
            settings = settings.with_endpoint(endpoint);
        }
        if let Some(version) = non_empty(provider.api_version.clone()) {
            settings = settings.with_api_version(version);
        }
        if let Some(transform) = provider.model_name_transform {
            settings = settings.with_name_transform(transform);
        }

        settings
    }
}

impl From<&ProviderSettings> for FileProviderConfig {
    fn from(settings: &ProviderSettings) -> Self {
        Self {
            kind: settings.kind,
            api_key: settings
                .has_credential()
                .then(|| settings.api_key.clone()),
            model: Some(settings.model.to_string()),
            endpoint: settings.endpoint.clone(),
            api_version: Some(settings.api_version.clone()),
            model_name_transform: Some(settings.name_transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::DEFAULT_AZURE_API_VERSION;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
kind = "azure"
api_key = "azure-key"
model = "gpt-4-32k"
endpoint = "https://contoso.openai.azure.com"
api_version = "2024-06-01"
model_name_transform = "identity"

[output]
format = "markdown"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.kind, ProviderKind::Azure);
        assert_eq!(
            config.provider.model_name_transform,
            Some(ModelNameTransform::Identity)
        );
        assert_eq!(config.output.format, Some(OutputFormat::Markdown));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());

        let settings = config.provider_settings_with(no_env);
        assert_eq!(settings.api_key, "azure-key");
        assert_eq!(settings.model, Model::Gpt432k);
        assert_eq!(settings.api_version, "2024-06-01");
        assert_eq!(settings.wire_model_name(), "gpt-4-32k");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.output.color);

        let settings = config.provider_settings_with(no_env);
        assert_eq!(settings.kind, ProviderKind::OpenAi);
        assert_eq!(settings.model, Model::Gpt35Turbo);
        assert_eq!(settings.api_version, DEFAULT_AZURE_API_VERSION);
        assert!(!settings.has_credential());
    }

    #[test]
    fn test_credential_falls_back_to_provider_env() {
        let config: FileConfig = toml::from_str("[provider]\nkind = \"azure\"\n").unwrap();
        let settings = config.provider_settings_with(|key| match key {
            "AZURE_OPENAI_API_KEY" => Some("from-env".to_string()),
            "AZURE_OPENAI_ENDPOINT" => Some("https://env.openai.azure.com".to_string()),
            _ => None,
        });
        assert_eq!(settings.api_key, "from-env");
        assert_eq!(
            settings.endpoint.as_deref(),
            Some("https://env.openai.azure.com")
        );
        assert_eq!(settings.name_transform, ModelNameTransform::StripPeriods);
    }

    #[test]
    fn test_file_credential_beats_env() {
        let config: FileConfig =
            toml::from_str("[provider]\napi_key = \"from-file\"\n").unwrap();
        let settings =
            config.provider_settings_with(|_| Some("from-env".to_string()));
        assert_eq!(settings.api_key, "from-file");
    }

    #[test]
    fn test_validation_errors() {
        let mut config = FileConfig::default();
        config.provider.model = Some("  ".to_string());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let mut config = FileConfig::default();
        config.provider.api_version = Some(String::new());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyApiVersion));

        let mut config = FileConfig::default();
        config.provider.endpoint = Some("contoso.openai.azure.com".to_string());
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(
                "contoso.openai.azure.com".to_string()
            ))
        );
    }

    #[test]
    fn test_settings_roundtrip_through_file_section() {
        let settings = ProviderSettings::new(ProviderKind::Azure)
            .with_api_key("azure-key")
            .with_model(Model::Gpt4Turbo)
            .with_endpoint("https://contoso.openai.azure.com");
        let config = FileConfig {
            provider: FileProviderConfig::from(&settings),
            output: FileOutputConfig::default(),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.provider_settings_with(no_env), settings);
    }

    #[test]
    fn test_missing_credential_is_not_written() {
        let section = FileProviderConfig::from(&ProviderSettings::default());
        assert_eq!(section.api_key, None);
        let text = toml::to_string(&FileConfig {
            provider: section,
            output: FileOutputConfig::default(),
        })
        .unwrap();
        assert!(!text.contains("api_key"));
    }
}
