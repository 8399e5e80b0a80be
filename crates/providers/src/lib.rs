//! Chat-completion provider implementations for Trasa.
//!
//! All providers implement the `trasa_core::ChatProvider` trait; the agent
//! orchestrator is constructed against the trait, never a concrete client.

pub mod openai;

pub use openai::OpenAiProvider;
