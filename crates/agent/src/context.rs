//! Prompt assembly for the completion provider.
//!
//! Pure, deterministic string building — no I/O. Every request turns into
//! exactly two messages: a system instruction and an enriched user turn.

use chrono::{Local, TimeZone};
use trasa_core::{AgentRequest, ChatMessage, DictionaryMatch, RequestKind};

/// Builds the two-message prompt from a request and an optional match.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder;

impl ContextBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Produce `[system, user]` for the completion request.
    pub fn build(
        &self,
        request: &AgentRequest,
        dict_match: Option<&DictionaryMatch>,
    ) -> Vec<ChatMessage> {
        let system = match dict_match {
            Some(m) => self.build_system_prompt(m, request),
            None => Self::default_system_prompt(request.kind).to_string(),
        };

        vec![
            ChatMessage::system(system),
            ChatMessage::user(self.build_user_message(request, dict_match)),
        ]
    }

    /// The matched trigger's prompt, enriched with situational context.
    fn build_system_prompt(&self, m: &DictionaryMatch, request: &AgentRequest) -> String {
        let mut prompt = m.trigger.system_prompt.clone();

        if let Some(ctx) = &request.context {
            if let (Some(lat), Some(lng)) = (ctx.lat, ctx.lng) {
                prompt.push_str(&format!(
                    "\n\nLokalizacja użytkownika: {:.4}, {:.4}",
                    lat, lng
                ));
            }

            if let Some(ts) = ctx.timestamp {
                if let Some(when) = Local.timestamp_millis_opt(ts).single() {
                    prompt.push_str(&format!(
                        "\n\nCzas zgłoszenia: {}",
                        when.format("%d.%m.%Y, %H:%M:%S")
                    ));
                }
            }
        }

        if !m.trigger.questions.is_empty() {
            let list: Vec<String> = m
                .trigger
                .questions
                .iter()
                .map(|q| format!("- {q}"))
                .collect();
            prompt.push_str(&format!(
                "\n\nSugerowane pytania do użytkownika:\n{}",
                list.join("\n")
            ));
        }

        prompt
    }

    /// The raw user message, annotated with the detected intent when matched.
    fn build_user_message(
        &self,
        request: &AgentRequest,
        dict_match: Option<&DictionaryMatch>,
    ) -> String {
        let mut message = request.user_message.clone();

        if let Some(m) = dict_match {
            // .round(), not {:.0}: ties go away from zero, so 62.5 -> 63.
            message.push_str(&format!(
                "\n\n[Wykryto: {}/{}, Pewność: {}%]",
                m.category,
                m.subcategory,
                (m.confidence * 100.0).round()
            ));
        }

        message
    }

    /// Canned fallback prompt per declared request type.
    fn default_system_prompt(kind: RequestKind) -> &'static str {
        match kind {
            RequestKind::Incident => {
                "Jesteś pomocnym asystentem do zgłaszania incydentów drogowych."
            }
            RequestKind::Route => "Jesteś asystentem nawigacji pomagającym w planowaniu tras.",
            RequestKind::Emergency => {
                "Jesteś asystentem w sytuacjach awaryjnych. Priorytet to bezpieczeństwo."
            }
            RequestKind::Assistant => "Jesteś pomocnym asystentem aplikacji mapowej.",
            RequestKind::Analytics => "Jesteś asystentem analizującym dane o incydentach.",
        }
    }
}
