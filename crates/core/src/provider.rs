//! ChatProvider trait — the abstraction over chat-completion backends.
//!
//! A provider sends an ordered list of role-tagged messages to an LLM
//! endpoint and returns the raw text completion. One non-blocking round
//! trip, no internal retry — retry policy, if any, belongs to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::ChatMessage;

/// Tunables for a single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// The model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Temperature (0.0 = deterministic)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    500
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// The chat-completion backend contract.
///
/// The agent orchestrator calls `complete()` without knowing which provider
/// is behind it — pure polymorphism, which is also what makes the pipeline
/// testable with a mock.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// A human-readable name for this provider (e.g. "openai").
    fn name(&self) -> &str;

    /// Send the messages and return the raw text completion.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> std::result::Result<String, ProviderError>;

    /// Streaming completion. No backend implements this yet; the default
    /// fails immediately rather than hanging or silently falling back.
    async fn stream(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> std::result::Result<String, ProviderError> {
        Err(ProviderError::NotImplemented(format!(
            "Provider '{}' does not support streaming completions",
            self.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubProvider;

    #[async_trait]
    impl ChatProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<String, ProviderError> {
            Ok("ok".into())
        }
    }

    #[test]
    fn options_defaults() {
        let opts = CompletionOptions::default();
        assert_eq!(opts.model, "gpt-4o-mini");
        assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(opts.max_tokens, 500);
    }

    #[tokio::test]
    async fn stream_fails_fast_by_default() {
        let provider = StubProvider;
        let err = provider
            .stream(&[], &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotImplemented(_)));
    }
}
