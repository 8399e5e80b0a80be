//! The agent's external request/response contract.
//!
//! A caller (HTTP boundary, CLI, tests) supplies an [`AgentRequest`] — a free
//! text message plus a declared request type and optional situational context
//! — and consumes an [`AgentResponse`]: the formatted completion, suggested
//! follow-ups, and actionable affordances.

use serde::{Deserialize, Serialize};

/// The request type declared by the caller. Drives the fallback system
/// prompt when classification finds no match.
///
/// Unrecognized wire values deserialize to [`RequestKind::Assistant`] —
/// callers sending a type this build does not know still get the generic
/// assistant treatment rather than a rejection. The strict parse lives in
/// [`FromStr`](std::str::FromStr), used where a typo should be an error
/// (CLI flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Incident,
    Route,
    Emergency,
    Assistant,
    Analytics,
}

impl<'de> Deserialize<'de> for RequestKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(value.parse().unwrap_or(Self::Assistant))
    }
}

impl std::str::FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incident" => Ok(Self::Incident),
            "route" => Ok(Self::Route),
            "emergency" => Ok(Self::Emergency),
            "assistant" => Ok(Self::Assistant),
            "analytics" => Ok(Self::Analytics),
            other => Err(format!("unknown request type: {other}")),
        }
    }
}

/// Situational metadata the caller may attach to a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentContext {
    /// Latitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    /// Unix timestamp in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Free-form extra fields (user id, session id, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The inbound request processed by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Declared request type
    #[serde(rename = "type")]
    pub kind: RequestKind,

    /// Raw user message text
    #[serde(rename = "userMessage")]
    pub user_message: String,

    /// Optional situational context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<AgentContext>,
}

/// The kind of actionable affordance attached to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Navigate,
    Call,
    Report,
    Share,
}

/// An actionable affordance the UI can render as a button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,

    /// Display label
    pub label: String,

    /// Action-specific payload
    pub payload: serde_json::Value,
}

/// The outbound response produced by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    /// False when processing failed and `message` describes the error
    pub success: bool,

    /// The formatted completion text (or error description)
    pub message: String,

    /// At most 3 suggested follow-ups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,

    /// Ordered actionable affordances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<AgentAction>>,
}
