//! Chat session domain.
//!
//! - [`entities::Message`]: a single message sent to a chat-completion API
//! - [`entities::Role`]: who a message is from

pub mod entities;
