//! Request Advice use case.
//!
//! One submission end to end: validate the goal, send a single
//! chat-completion request, recover an [`AdviceRecord`] from the reply and
//! record it in the session history.

use crate::config::AdviceParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{ChatCompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::AdviceProgressNotifier;
use crate::session::AdvisorSession;
use advisor_domain::util::preview;
use advisor_domain::{
    AdviceRecord, AdvisorPrompt, ExtractionError, Goal, GoalError, PayloadExtractor, ProviderKind,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while requesting advice.
///
/// None of these are fatal; the caller reports them and keeps going.
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error(transparent)]
    Validation(#[from] GoalError),

    #[error("{source}")]
    Request {
        provider: ProviderKind,
        model: String,
        #[source]
        source: GatewayError,
    },

    #[error("{source}")]
    Extraction {
        /// Model output exactly as received
        raw: String,
        #[source]
        source: ExtractionError,
    },
}

impl AdviceError {
    /// Multi-line explanation suitable for showing to the user.
    ///
    /// Request failures list the usual causes together with the provider
    /// and model in effect.
    pub fn diagnostic(&self) -> String {
        match self {
            AdviceError::Validation(e) => e.to_string(),
            AdviceError::Request {
                provider,
                model,
                source,
            } => format!(
                "Error: {source}\n\n\
                 Please ensure:\n\
                 1. Your API key is valid\n\
                 2. You have selected the correct API type (OpenAI or Azure)\n\
                 3. You have access to the selected model ({model})\n\
                 4. Your API key has sufficient credits\n\n\
                 Current settings:\n\
                 - API Type: {provider}\n\
                 - Model: {model}",
                provider = provider.display_name(),
            ),
            AdviceError::Extraction { source, .. } => {
                format!("Error: {source}. Showing the raw response instead.")
            }
        }
    }

    /// Raw model output, when the request succeeded but extraction did not
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AdviceError::Extraction { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct AdviceOutcome {
    pub record: AdviceRecord,
    /// Text returned by the provider
    pub raw: String,
    /// Extraction strategy that produced `record`
    pub strategy: &'static str,
    /// Sequence number of the new history entry
    pub sequence: usize,
}

/// Use case for turning a goal into a recommendation.
pub struct RequestAdviceUseCase {
    gateway: Arc<dyn LlmGateway>,
    extractor: Arc<PayloadExtractor>,
    params: AdviceParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for RequestAdviceUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            extractor: self.extractor.clone(),
            params: self.params.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl RequestAdviceUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            extractor: Arc::new(PayloadExtractor::default()),
            params: AdviceParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run one submission against the session's current settings.
    ///
    /// The goal is validated before anything is sent; a too-short goal never
    /// reaches the gateway. Only successful extractions are recorded.
    pub async fn execute(
        &self,
        session: &mut AdvisorSession,
        goal_text: &str,
        progress: &dyn AdviceProgressNotifier,
    ) -> Result<AdviceOutcome, AdviceError> {
        let goal = Goal::new(goal_text)?;
        let settings = session.settings().clone();
        let model = settings.model.to_string();

        info!(
            "Requesting advice from {} ({}): {}",
            settings.kind,
            model,
            preview(goal.content(), 80)
        );

        let request_error = |source: GatewayError| AdviceError::Request {
            provider: settings.kind,
            model: model.clone(),
            source,
        };

        if !settings.has_credential() {
            warn!("No API key configured for {}", settings.kind);
            return Err(request_error(GatewayError::MissingCredential(
                settings.kind.display_name().to_string(),
            )));
        }

        let request = ChatCompletionRequest::new(
            settings.wire_model_name(),
            AdvisorPrompt::messages(&goal),
            &self.params,
        );
        self.conversation_logger.log(ConversationEvent::new(
            "advice_request",
            json!({
                "provider": settings.kind.as_str(),
                "model": request.model,
                "goal": goal.content(),
            }),
        ));

        progress.on_request_start(settings.kind, &request.model);
        let result = self.gateway.complete(&settings, &request).await;
        progress.on_request_complete(result.is_ok());

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Advice request failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "request_failed",
                    json!({
                        "provider": settings.kind.as_str(),
                        "model": request.model,
                        "error": e.to_string(),
                    }),
                ));
                return Err(request_error(e));
            }
        };

        debug!("Received {} bytes: {}", raw.len(), preview(&raw, 120));
        self.conversation_logger.log(ConversationEvent::new(
            "advice_response",
            json!({ "model": request.model, "bytes": raw.len(), "text": raw }),
        ));

        let extracted = match self.extractor.extract(&raw) {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!("Could not extract advice: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "extraction_failed",
                    json!({ "error": e.to_string() }),
                ));
                return Err(AdviceError::Extraction { raw, source: e });
            }
        };

        let record = extracted.record;
        let sequence = session.record(goal, record.clone()).sequence;
        info!(
            "Extracted advice #{} via {} ({} agents, {} tasks, {} tools)",
            sequence,
            extracted.strategy,
            record.agents.len(),
            record.tasks.len(),
            record.tools.len()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "advice_extracted",
            json!({
                "sequence": sequence,
                "strategy": extracted.strategy,
                "agents": record.agents.len(),
                "tasks": record.tasks.len(),
                "tools": record.tools.len(),
                "workflow_steps": record.workflow.len(),
            }),
        ));

        Ok(AdviceOutcome {
            record,
            raw,
            strategy: extracted.strategy,
            sequence,
        })
    }
}
