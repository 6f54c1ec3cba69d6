//! Domain layer for crew-advisor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Goal
//!
//! A free-text description of the agent-based system the user wants to build.
//! Goals shorter than [`MIN_GOAL_CHARS`] characters are rejected up front.
//!
//! ## AdviceRecord
//!
//! The four-field structure (agents, tasks, tools, workflow) the model is
//! asked to return. Model output is not guaranteed to match, so it is recovered
//! by a [`PayloadExtractor`] running an ordered list of extraction strategies.

pub mod advice;
pub mod config;
pub mod core;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use advice::{
    entities::{AdviceRecord, AgentSpec, REQUIRED_FIELDS, TaskSpec, ToolSpec},
    extraction::{
        BraceSpan, DirectJson, Extracted, ExtractionError, ExtractionStrategy, FencedBlock,
        PayloadExtractor,
    },
};
pub use config::OutputFormat;
pub use core::{
    error::GoalError,
    goal::{Goal, MIN_GOAL_CHARS},
    model::Model,
};
pub use prompt::{AdvisorPrompt, GoalTemplate, UnknownTemplate};
pub use providers::{
    DEFAULT_AZURE_API_VERSION, ModelNameTransform, ProviderKind, ProviderSettings,
    UnknownProvider,
};
pub use session::entities::{Message, Role};
