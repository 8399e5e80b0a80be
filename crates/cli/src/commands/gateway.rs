//! `trasa gateway` — Start the HTTP API server.

use tracing::warn;
use trasa_config::AppConfig;
use trasa_core::Error;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| Error::Config {
        message: e.to_string(),
    })?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("Trasa Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    if !config.has_api_key() {
        warn!("No API key configured; /api/chat will return errors");
    }

    trasa_gateway::serve(config).await?;

    Ok(())
}
