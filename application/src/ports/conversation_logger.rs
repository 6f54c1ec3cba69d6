//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording what was sent to the
//! provider and what came back (`advice_request`, `advice_response`,
//! `advice_extracted`, `extraction_failed`, `request_failed`).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! exchange in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event for logging.
///
/// The timestamp is added by the logger when the event is written.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "advice_request", "extraction_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; a write failure must never abort
/// an advice request.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
