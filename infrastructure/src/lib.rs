//! Infrastructure layer for crew-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: completion API clients, configuration file
//! loading and saving, and the JSONL conversation log.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    AZURE_ENDPOINT_ENV, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileProviderConfig, TomlSettingsStore,
};
pub use logging::JsonlConversationLogger;
pub use providers::{
    ProviderAdapter,
    azure::{AzureOpenAiAdapter, DEFAULT_AZURE_ENDPOINT},
    openai::{DEFAULT_OPENAI_BASE_URL, OpenAiAdapter},
    routing::RoutingGateway,
};
