//! HTTP gateway — the thin boundary in front of the agent pipeline.
//!
//! Endpoints:
//!
//! - `POST /api/chat`   — Process a user message through the agent
//! - `GET  /api/health` — Liveness check
//!
//! The handler validates the request shape and credential availability,
//! then delegates to the shared [`Agent`]. The agent itself never raises;
//! only this boundary decides status codes.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use trasa_agent::Agent;
use trasa_config::AppConfig;
use trasa_core::{AgentContext, AgentRequest, AgentResponse, RequestKind};
use trasa_dictionaries::DictionaryStore;
use trasa_providers::OpenAiProvider;

/// Shared state for the gateway.
pub struct GatewayState {
    pub agent: Arc<Agent>,
    /// Whether a provider credential was available at startup.
    pub configured: bool,
}

pub type SharedState = Arc<GatewayState>;

/// Build the gateway router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the state and serve until shutdown.
pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let provider = Arc::new(OpenAiProvider::openai(config.api_key.clone()));
    let configured = provider.is_configured();

    let agent = Arc::new(
        Agent::new(Arc::new(DictionaryStore::builtin()), provider)
            .with_options(config.completion_options()),
    );

    let state = Arc::new(GatewayState { agent, configured });

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Gateway listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ── Request / Response types ──────────────────────────────────────────────

/// Inbound chat body. Fields are optional so presence can be validated
/// explicitly with a 400 instead of a deserialization rejection.
#[derive(Deserialize)]
struct ChatRequestBody {
    #[serde(rename = "type")]
    kind: Option<RequestKind>,

    #[serde(rename = "userMessage")]
    user_message: Option<String>,

    #[serde(default)]
    context: Option<AgentContext>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn chat_handler(
    State(state): State<SharedState>,
    Json(body): Json<ChatRequestBody>,
) -> Result<Json<AgentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (kind, user_message) = match (body.kind, body.user_message) {
        (Some(kind), Some(msg)) if !msg.trim().is_empty() => (kind, msg),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing required fields: userMessage, type".into(),
                }),
            ));
        }
    };

    if !state.configured {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "OpenAI API key not configured".into(),
            }),
        ));
    }

    info!(kind = ?kind, "api/chat request");

    let request = AgentRequest {
        kind,
        user_message,
        context: body.context,
    };

    Ok(Json(state.agent.process(&request).await))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "AI agent API is running",
    })
}
