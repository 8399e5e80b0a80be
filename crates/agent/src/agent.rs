//! The agent orchestrator: classify → build context → complete → format.

use std::sync::Arc;

use tracing::{debug, info, warn};
use trasa_core::{
    AgentRequest, AgentResponse, ChatProvider, Classification, CompletionOptions, Error,
};
use trasa_dictionaries::DictionaryStore;

use crate::classifier::IntentClassifier;
use crate::context::ContextBuilder;
use crate::formatter::ResponseFormatter;

/// The composed pipeline behind the single externally consumed operation.
///
/// Explicitly constructed and passed by reference — there is no process-wide
/// instance. Concurrent `process` calls share only the read-only dictionary
/// store behind the classifier.
pub struct Agent {
    classifier: IntentClassifier,
    context: ContextBuilder,
    formatter: ResponseFormatter,
    provider: Arc<dyn ChatProvider>,
    options: CompletionOptions,
}

impl Agent {
    /// Create an agent over the given store and completion provider.
    pub fn new(store: Arc<DictionaryStore>, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            classifier: IntentClassifier::new(store),
            context: ContextBuilder::new(),
            formatter: ResponseFormatter::new(),
            provider,
            options: CompletionOptions::default(),
        }
    }

    /// Override the completion options (model, temperature, max tokens).
    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    /// Process a request end to end. Never raises: every failure is
    /// converted into a `success: false` response.
    pub async fn process(&self, request: &AgentRequest) -> AgentResponse {
        match self.try_process(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Agent request failed");
                self.formatter.format_error(&e)
            }
        }
    }

    /// Classification without the remote call.
    pub fn classify_only(&self, user_message: &str) -> Classification {
        self.classifier.classify(user_message)
    }

    async fn try_process(&self, request: &AgentRequest) -> Result<AgentResponse, Error> {
        let dict_match = self.classifier.best_match(&request.user_message);

        match &dict_match {
            Some(m) => info!(
                category = %m.category,
                subcategory = %m.subcategory,
                confidence = m.confidence,
                "Processing classified request"
            ),
            None => info!(kind = ?request.kind, "Processing unclassified request"),
        }

        let messages = self.context.build(request, dict_match.as_ref());
        debug!(messages = messages.len(), "Context built");

        let completion = self.provider.complete(&messages, &self.options).await?;

        Ok(self.formatter.format(
            &completion,
            dict_match.as_ref().map(|m| m.category.as_str()),
            dict_match.as_ref().map(|m| m.subcategory.as_str()),
        ))
    }
}
