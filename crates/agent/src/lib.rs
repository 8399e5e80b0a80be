//! The Trasa agent pipeline — classification, context, completion, formatting.
//!
//! One request flows through four stages:
//!
//! 1. **Classify** the user message against the dictionary store
//! 2. **Build context**: system instruction + enriched user turn
//! 3. **Complete** via the injected chat provider
//! 4. **Format** the raw completion into the caller-facing response
//!
//! Failures at any stage are converted into a `success: false` response;
//! nothing escapes [`Agent::process`] as an unhandled fault.

pub mod agent;
pub mod classifier;
pub mod context;
pub mod formatter;

pub use agent::Agent;
pub use classifier::IntentClassifier;
pub use context::ContextBuilder;
pub use formatter::ResponseFormatter;
