//! Core domain types for the Trasa agent pipeline.
//!
//! Everything that flows between the classifier, the context builder, the
//! completion provider, and the response formatter is defined here:
//!
//! - [`dictionary`] — static category definitions the classifier scores against
//! - [`message`] — role-tagged chat messages sent to the completion provider
//! - [`request`] — the agent's external request/response contract
//! - [`provider`] — the trait every chat-completion backend implements
//! - [`error`] — the error taxonomy

pub mod dictionary;
pub mod error;
pub mod message;
pub mod provider;
pub mod request;

pub use dictionary::{Classification, Dictionary, DictionaryMatch, Trigger};
pub use error::{Error, ProviderError};
pub use message::{ChatMessage, Role};
pub use provider::{ChatProvider, CompletionOptions};
pub use request::{
    ActionKind, AgentAction, AgentContext, AgentRequest, AgentResponse, RequestKind,
};
