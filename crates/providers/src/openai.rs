//! OpenAI-compatible chat-completion client.
//!
//! Works with any endpoint exposing `/v1/chat/completions` in the OpenAI
//! shape. One non-blocking round trip per call; no retries — the caller
//! owns any retry or timeout policy beyond the transport default.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use trasa_core::error::ProviderError;
use trasa_core::message::{ChatMessage, Role};
use trasa_core::provider::{ChatProvider, CompletionOptions};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// An OpenAI-compatible completion provider.
pub struct OpenAiProvider {
    name: String,
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider against a custom endpoint.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            client,
        }
    }

    /// Create an OpenAI provider (convenience constructor).
    pub fn openai(api_key: Option<String>) -> Self {
        Self::new("openai", DEFAULT_BASE_URL, api_key)
    }

    /// Create an OpenAI provider with the credential resolved from the
    /// environment (`TRASA_API_KEY`, then `OPENAI_API_KEY`).
    pub fn from_env() -> Self {
        let key = std::env::var("TRASA_API_KEY")
            .ok()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        Self::openai(key)
    }

    /// Whether a credential is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Pull the provider's error message out of a failure body, falling
    /// back to a generic message when the body has no recognizable shape.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|e| e.error.map(|inner| inner.message))
            .unwrap_or_else(|| "Unknown error".into())
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> std::result::Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            ProviderError::NotConfigured("OpenAI API key is not configured".into())
        })?;

        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": options.model,
            "messages": messages,
            "temperature": options.temperature,
            "max_tokens": options.max_tokens,
        });

        debug!(provider = %self.name, model = %options.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(ProviderError::Api {
                status_code: status,
                message: Self::error_message(&error_body),
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| ProviderError::Api {
                status_code: status,
                message: format!("Failed to parse response: {e}"),
            })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Api {
                status_code: status,
                message: "No choices in response".into(),
            })?;

        if choice.message.role.is_some_and(|r| r != Role::Assistant) {
            warn!(role = ?choice.message.role, "Completion choice has unexpected role");
        }

        Ok(choice.message.content.unwrap_or_default())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    role: Option<Role>,

    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_constructor() {
        let provider = OpenAiProvider::openai(Some("sk-test".into()));
        assert_eq!(provider.name(), "openai");
        assert!(provider.base_url.contains("api.openai.com"));
        assert!(provider.is_configured());
    }

    #[test]
    fn empty_key_counts_as_unconfigured() {
        let provider = OpenAiProvider::openai(Some(String::new()));
        assert!(!provider.is_configured());
    }

    #[tokio::test]
    async fn complete_without_key_is_a_configuration_error() {
        let provider = OpenAiProvider::openai(None);
        let err = provider
            .complete(
                &[ChatMessage::user("hej")],
                &CompletionOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn stream_is_not_implemented() {
        let provider = OpenAiProvider::openai(Some("sk-test".into()));
        let err = provider
            .stream(&[ChatMessage::user("hej")], &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotImplemented(_)));
    }

    #[test]
    fn parse_success_response() {
        let data = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "Dzień dobry!" } }
            ]
        }"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices[0].message.role, Some(Role::Assistant));
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Dzień dobry!")
        );
    }

    #[test]
    fn error_message_extracted_from_provider_shape() {
        let body = r#"{ "error": { "message": "Rate limit reached", "type": "rate_limit" } }"#;
        assert_eq!(OpenAiProvider::error_message(body), "Rate limit reached");
    }

    #[test]
    fn error_message_falls_back_on_garbage() {
        assert_eq!(OpenAiProvider::error_message("<html>"), "Unknown error");
        assert_eq!(OpenAiProvider::error_message("{}"), "Unknown error");
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let provider = OpenAiProvider::new("custom", "http://localhost:8080/v1/", None);
        assert_eq!(provider.base_url, "http://localhost:8080/v1");
    }
}
