//! Progress notification port
//!
//! Defines the interface for reporting an in-flight advice request.

use advisor_domain::ProviderKind;

/// Callback for progress updates while a request is outstanding
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait AdviceProgressNotifier: Send + Sync {
    /// Called right before the completion request is sent
    fn on_request_start(&self, provider: ProviderKind, model: &str);

    /// Called once the provider has answered or failed
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AdviceProgressNotifier for NoProgress {
    fn on_request_start(&self, _provider: ProviderKind, _model: &str) {}
    fn on_request_complete(&self, _success: bool) {}
}
