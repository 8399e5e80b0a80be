//! Trasa CLI — the main entry point.
//!
//! Commands:
//! - `classify` — Classify a message against the built-in dictionaries
//! - `chat`     — Send a single message through the full agent pipeline
//! - `gateway`  — Start the HTTP API server

use clap::{Parser, Subcommand};

use trasa_core::RequestKind;

mod commands;

#[derive(Parser)]
#[command(name = "trasa", about = "Trasa — map assistant agent", version, author)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a message without calling the completion provider
    Classify {
        /// The message to classify
        message: String,
    },

    /// Send a single message through the agent
    Chat {
        /// The message to send
        message: String,

        /// Request type (incident, route, emergency, assistant, analytics)
        #[arg(short = 't', long = "type", default_value = "assistant")]
        kind: RequestKind,
    },

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Classify { message } => commands::classify::run(&message)?,
        Commands::Chat { message, kind } => commands::chat::run(message, kind).await?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
    }

    Ok(())
}
