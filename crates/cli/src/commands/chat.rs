//! `trasa chat` — Send a single message through the full pipeline.

use std::sync::Arc;

use trasa_agent::Agent;
use trasa_config::AppConfig;
use trasa_core::{AgentRequest, Error, RequestKind};
use trasa_dictionaries::DictionaryStore;
use trasa_providers::OpenAiProvider;

pub async fn run(message: String, kind: RequestKind) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| Error::Config {
        message: e.to_string(),
    })?;

    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    TRASA_API_KEY   (generic)");
        eprintln!("    OPENAI_API_KEY  (for OpenAI direct)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let provider = Arc::new(OpenAiProvider::openai(config.api_key.clone()));
    let agent = Agent::new(Arc::new(DictionaryStore::builtin()), provider)
        .with_options(config.completion_options());

    let request = AgentRequest {
        kind,
        user_message: message,
        context: None,
    };

    let response = agent.process(&request).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
