//! Advice domain.
//!
//! - [`entities::AdviceRecord`]: the agents/tasks/tools/workflow structure
//! - [`extraction::PayloadExtractor`]: recovers a record from raw model text

pub mod entities;
pub mod extraction;
