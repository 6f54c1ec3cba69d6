//! Session context
//!
//! [`AdvisorSession`] owns everything that lives for one run: the provider
//! settings in effect, the recommendation history, and the last advice
//! (the one `/export` writes).

pub mod history;

use advisor_domain::{AdviceRecord, Goal, Model, ProviderKind, ProviderSettings};
use history::{HistoryEntry, HistoryStore};
use tracing::debug;

#[derive(Debug, Default)]
pub struct AdvisorSession {
    settings: ProviderSettings,
    history: HistoryStore,
    last_advice: Option<AdviceRecord>,
}

impl AdvisorSession {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            settings,
            history: HistoryStore::new(),
            last_advice: None,
        }
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn last_advice(&self) -> Option<&AdviceRecord> {
        self.last_advice.as_ref()
    }

    /// Switch provider. Model and name transform go back to the new
    /// provider's defaults; the credential and endpoint are kept.
    pub fn set_provider(&mut self, kind: ProviderKind) {
        if self.settings.kind == kind {
            return;
        }
        debug!("Switching provider {} -> {}", self.settings.kind, kind);
        self.settings.kind = kind;
        self.settings.model = kind.default_model();
        self.settings.name_transform = kind.default_name_transform();
    }

    pub fn set_model(&mut self, model: Model) {
        self.settings.model = model;
    }

    pub fn set_credential(&mut self, api_key: impl Into<String>) {
        self.settings.api_key = api_key.into().trim().to_string();
    }

    /// `None` (or a blank string) clears the override.
    pub fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.settings.endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
    }

    /// Append a successful recommendation and make it the export target.
    pub fn record(&mut self, goal: Goal, advice: AdviceRecord) -> &HistoryEntry {
        self.last_advice = Some(advice.clone());
        self.history.record(goal, advice)
    }
}
