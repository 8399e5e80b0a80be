//! Error types for the Trasa domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Trasa operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Errors raised by a chat-completion provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No credential was available when the request was attempted.
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// The remote endpoint returned a non-success status.
    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    /// The request never completed at the transport level.
    #[error("Network error: {0}")]
    Network(String),

    /// The invoked capability has no implementation. Fails fast, never hangs.
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_status() {
        let err = Error::Provider(ProviderError::Api {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn not_configured_names_the_missing_credential() {
        let err = ProviderError::NotConfigured("OpenAI API key is not configured".into());
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn config_error_carries_the_message() {
        let err = Error::Config {
            message: "temperature must be between 0.0 and 2.0".into(),
        };
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn not_implemented_is_explicit() {
        let err = ProviderError::NotImplemented("streaming completions".into());
        assert!(err.to_string().contains("Not implemented"));
    }
}
