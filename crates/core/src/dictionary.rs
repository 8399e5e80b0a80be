//! Dictionary domain types.
//!
//! A `Dictionary` groups one top-level category: a coarse trigger list that
//! gates the whole category, and an ordered set of subcategory triggers with
//! their own keywords, prompt templates, and priorities.
//!
//! Dictionaries are immutable after load. The classifier iterates them in
//! insertion order, and subcategories in declaration order — that order is
//! the tie-break for equal confidence scores, so it must stay deterministic.

use serde::{Deserialize, Serialize};

/// A subcategory definition: keywords to score, the prompt template to use
/// when it wins, optional follow-up questions, and a priority bias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    /// Unique key within the owning dictionary (e.g. "accident")
    pub key: String,

    /// Case-insensitive substrings searched for in the user message.
    /// Non-empty — confidence divides by the keyword count.
    pub keywords: Vec<String>,

    /// Used verbatim as the base of the LLM system instruction
    #[serde(rename = "systemPrompt")]
    pub system_prompt: String,

    /// Follow-up questions appended to the system prompt when non-empty
    #[serde(default)]
    pub questions: Vec<String>,

    /// Biases confidence upward; defaults to 1 when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

impl Trigger {
    /// The effective priority (1 when unset).
    pub fn priority(&self) -> f64 {
        self.priority.unwrap_or(1.0)
    }
}

/// One top-level category with its trigger gate and subcategories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    /// Globally unique category identifier (e.g. "incidents")
    pub category: String,

    /// Coarse gate: the message must contain at least one of these
    /// (case-insensitive substring) before any subcategory is scored.
    /// A dictionary with zero triggers never matches.
    pub triggers: Vec<String>,

    /// Subcategory definitions, in declaration order
    pub subcategories: Vec<Trigger>,
}

impl Dictionary {
    /// Look up a subcategory trigger by key.
    pub fn trigger(&self, key: &str) -> Option<&Trigger> {
        self.subcategories.iter().find(|t| t.key == key)
    }
}

/// The lightweight result of scoring a message against the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Winning category, or "unknown" when nothing matched
    pub category: String,

    /// Winning subcategory key; absent means "no match"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Clamped to [0, 1]
    pub confidence: f64,

    /// The winning trigger's full keyword list (not just the matched subset)
    pub keywords: Vec<String>,
}

impl Classification {
    /// The sentinel returned when no dictionary matched.
    pub fn unknown() -> Self {
        Self {
            category: "unknown".into(),
            subcategory: None,
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category == "unknown"
    }
}

/// A resolved match: classification plus the concrete winning trigger,
/// produced per request and never persisted.
#[derive(Debug, Clone)]
pub struct DictionaryMatch {
    pub category: String,
    pub subcategory: String,
    pub confidence: f64,
    pub trigger: Trigger,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        serde_json::from_str(
            r#"{
                "category": "incidents",
                "triggers": ["wypadek", "kolizja"],
                "subcategories": [
                    {
                        "key": "accident",
                        "keywords": ["wypadek", "zderzenie"],
                        "systemPrompt": "Jesteś asystentem do zgłaszania wypadków.",
                        "questions": ["Gdzie dokładnie?"],
                        "priority": 3
                    },
                    {
                        "key": "congestion",
                        "keywords": ["korek"],
                        "systemPrompt": "Jesteś asystentem ruchu drogowego."
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_camel_case_prompt_field() {
        let dict = sample_dictionary();
        assert_eq!(dict.category, "incidents");
        assert_eq!(dict.subcategories[0].system_prompt.len() > 0, true);
    }

    #[test]
    fn priority_defaults_to_one() {
        let dict = sample_dictionary();
        assert_eq!(dict.subcategories[0].priority(), 3.0);
        assert_eq!(dict.subcategories[1].priority(), 1.0);
    }

    #[test]
    fn trigger_lookup_by_key() {
        let dict = sample_dictionary();
        assert!(dict.trigger("accident").is_some());
        assert!(dict.trigger("missing").is_none());
    }

    #[test]
    fn unknown_classification_shape() {
        let c = Classification::unknown();
        assert!(c.is_unknown());
        assert_eq!(c.confidence, 0.0);
        assert!(c.subcategory.is_none());
        assert!(c.keywords.is_empty());

        // subcategory field is omitted entirely when absent
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("subcategory"));
    }
}
