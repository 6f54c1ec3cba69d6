//! Model value object representing a chat-completion model name

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known chat-completion models (Value Object)
///
/// The named variants are the suggestions offered for each provider; any other
/// name is carried through as [`Model::Custom`]. Azure deployments use their
/// own naming (`gpt-35-turbo`), so the same family can appear twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // OpenAI models
    Gpt35Turbo,
    Gpt4,
    Gpt4TurboPreview,
    Gpt40125Preview,
    // Azure OpenAI deployment names
    AzureGpt35Turbo,
    Gpt4Turbo,
    Gpt432k,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gpt4 => "gpt-4",
            Model::Gpt4TurboPreview => "gpt-4-turbo-preview",
            Model::Gpt40125Preview => "gpt-4-0125-preview",
            Model::AzureGpt35Turbo => "gpt-35-turbo",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Gpt432k => "gpt-4-32k",
            Model::Custom(s) => s,
        }
    }

    /// Models suggested for the standard OpenAI API
    pub fn openai_models() -> Vec<Model> {
        vec![
            Model::Gpt35Turbo,
            Model::Gpt4,
            Model::Gpt4TurboPreview,
            Model::Gpt40125Preview,
        ]
    }

    /// Models suggested for Azure OpenAI deployments
    pub fn azure_models() -> Vec<Model> {
        vec![
            Model::AzureGpt35Turbo,
            Model::Gpt4,
            Model::Gpt4Turbo,
            Model::Gpt432k,
        ]
    }

    /// Check if this is a user-supplied model name
    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (gpt-3.5-turbo)
    fn default() -> Self {
        Model::Gpt35Turbo
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            "gpt-4" => Model::Gpt4,
            "gpt-4-turbo-preview" => Model::Gpt4TurboPreview,
            "gpt-4-0125-preview" => Model::Gpt40125Preview,
            "gpt-35-turbo" => Model::AzureGpt35Turbo,
            "gpt-4-turbo" => Model::Gpt4Turbo,
            "gpt-4-32k" => Model::Gpt432k,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
