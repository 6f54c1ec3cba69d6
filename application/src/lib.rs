//! Application layer for crew-advisor
//!
//! This crate contains use cases, port definitions, the session context and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::AdviceParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{ChatCompletionRequest, GatewayError, LlmGateway},
    progress::{AdviceProgressNotifier, NoProgress},
    settings_store::{ConfigPersistError, SettingsStore},
};
pub use session::{
    AdvisorSession,
    history::{HistoryEntry, HistoryStore},
};
pub use use_cases::request_advice::{AdviceError, AdviceOutcome, RequestAdviceUseCase};
