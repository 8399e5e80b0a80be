//! Response post-processing.
//!
//! Turns the raw completion text plus classification metadata into the
//! structured [`AgentResponse`]: trimmed message, up to three extracted
//! suggestions, and the category-driven action list.

use serde_json::json;
use trasa_core::{ActionKind, AgentAction, AgentResponse, Error};

/// Maximum number of suggestions extracted from a completion.
const MAX_SUGGESTIONS: usize = 3;

/// The emergency number placed in the fixed call action.
const EMERGENCY_NUMBER: &str = "112";

/// Formats completions and errors into the caller-facing response shape.
#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a successful completion.
    pub fn format(
        &self,
        raw: &str,
        category: Option<&str>,
        subcategory: Option<&str>,
    ) -> AgentResponse {
        AgentResponse {
            success: true,
            message: raw.trim().to_string(),
            suggestions: Some(Self::extract_suggestions(raw)),
            actions: Some(Self::generate_actions(category, subcategory)),
        }
    }

    /// Format a failure. Always two canned retry hints, never actions.
    pub fn format_error(&self, error: &Error) -> AgentResponse {
        AgentResponse {
            success: false,
            message: format!("Wystąpił błąd: {error}"),
            suggestions: Some(vec![
                "Spróbuj ponownie".into(),
                "Sprawdź połączenie internetowe".into(),
            ]),
            actions: None,
        }
    }

    /// A line qualifies as a suggestion when it opens with a bullet marker
    /// followed by whitespace, or ends with a question mark. The first
    /// `MAX_SUGGESTIONS` qualifying lines are kept in original order.
    fn extract_suggestions(raw: &str) -> Vec<String> {
        raw.lines()
            .filter(|line| Self::leading_bullet(line).is_some() || line.ends_with('?'))
            .map(|line| Self::strip_bullet(line).trim().to_string())
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// The bullet marker char, if the line opens with one plus whitespace.
    fn leading_bullet(line: &str) -> Option<char> {
        let mut chars = line.chars();
        match chars.next() {
            Some(marker @ ('-' | '•' | '*'))
                if chars.next().is_some_and(|c| c.is_whitespace()) =>
            {
                Some(marker)
            }
            _ => None,
        }
    }

    /// Remove a leading bullet marker and the single whitespace after it.
    fn strip_bullet(line: &str) -> &str {
        match Self::leading_bullet(line) {
            Some(marker) => {
                let rest = &line[marker.len_utf8()..];
                let ws = rest.chars().next().map(char::len_utf8).unwrap_or(0);
                &rest[ws..]
            }
            None => line,
        }
    }

    /// Fixed action rules, evaluated in order; all applicable rules fire.
    /// The generic share action is always appended last.
    fn generate_actions(category: Option<&str>, subcategory: Option<&str>) -> Vec<AgentAction> {
        let mut actions = Vec::new();

        if category == Some("emergency") {
            actions.push(AgentAction {
                kind: ActionKind::Call,
                label: format!("📞 Zadzwoń {EMERGENCY_NUMBER}"),
                payload: json!({ "number": EMERGENCY_NUMBER }),
            });
        }

        if category == Some("incidents") && subcategory == Some("accident") {
            actions.push(AgentAction {
                kind: ActionKind::Report,
                label: "🚨 Zgłoś do służb".into(),
                payload: json!({ "type": "accident" }),
            });
        }

        if category == Some("routes") {
            actions.push(AgentAction {
                kind: ActionKind::Navigate,
                label: "🗺️ Pokaż na mapie".into(),
                payload: json!({}),
            });
        }

        actions.push(AgentAction {
            kind: ActionKind::Share,
            label: "📤 Udostępnij".into(),
            payload: json!({}),
        });

        actions
    }
}
