//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these.

pub mod conversation_logger;
pub mod llm_gateway;
pub mod progress;
pub mod settings_store;
