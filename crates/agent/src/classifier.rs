//! Keyword-driven intent classification.
//!
//! Scoring is a two-stage gate, and the stages are independent on purpose:
//!
//! 1. A dictionary is only considered when at least one of its coarse
//!    `triggers` occurs in the normalized message.
//! 2. Within a gated dictionary, each subcategory scores by how many of its
//!    keywords occur in the message.
//!
//! A message that contains subcategory keywords but none of the dictionary's
//! triggers therefore still classifies as "unknown". Do not collapse this
//! into single-stage keyword scoring.

use std::sync::Arc;

use tracing::debug;
use trasa_core::{Classification, DictionaryMatch};
use trasa_dictionaries::DictionaryStore;

/// Scores a message against the dictionary store.
///
/// Holds only a shared reference to the read-only store; concurrent
/// classifications share no mutable state.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    store: Arc<DictionaryStore>,
}

/// A scored (category, subcategory) candidate, pre-sort.
struct Candidate<'a> {
    category: &'a str,
    subcategory: &'a str,
    confidence: f64,
    keywords: &'a [String],
}

impl IntentClassifier {
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self { store }
    }

    /// Classify a message into the best-scoring category/subcategory pair.
    pub fn classify(&self, user_message: &str) -> Classification {
        let normalized = user_message.to_lowercase();
        let normalized = normalized.trim();

        let mut candidates: Vec<Candidate<'_>> = Vec::new();

        for dict in self.store.all() {
            // Coarse gate: any main trigger present?
            let gated = dict
                .triggers
                .iter()
                .any(|t| normalized.contains(&t.to_lowercase()));
            if !gated {
                continue;
            }

            for sub in &dict.subcategories {
                let matched = sub
                    .keywords
                    .iter()
                    .filter(|k| normalized.contains(&k.to_lowercase()))
                    .count();

                if matched > 0 {
                    let confidence =
                        Self::confidence(matched, sub.keywords.len(), sub.priority());
                    candidates.push(Candidate {
                        category: &dict.category,
                        subcategory: &sub.key,
                        confidence,
                        keywords: &sub.keywords,
                    });
                }
            }
        }

        // Stable sort: ties keep store insertion order.
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        match candidates.first() {
            Some(best) => {
                debug!(
                    category = best.category,
                    subcategory = best.subcategory,
                    confidence = best.confidence,
                    "Intent classified"
                );
                Classification {
                    category: best.category.to_string(),
                    subcategory: Some(best.subcategory.to_string()),
                    confidence: best.confidence,
                    keywords: best.keywords.to_vec(),
                }
            }
            None => {
                debug!("No dictionary matched; classification is unknown");
                Classification::unknown()
            }
        }
    }

    /// Re-derive the winning dictionary/trigger pair for downstream use.
    ///
    /// `None` iff classification is "unknown" or carries no subcategory.
    pub fn best_match(&self, user_message: &str) -> Option<DictionaryMatch> {
        let classification = self.classify(user_message);

        if classification.is_unknown() {
            return None;
        }

        let dict = self.store.get(&classification.category)?;
        let subcategory = classification.subcategory?;
        let trigger = dict.trigger(&subcategory)?;

        Some(DictionaryMatch {
            category: classification.category,
            subcategory,
            confidence: classification.confidence,
            trigger: trigger.clone(),
        })
    }

    /// `min(1.0, matched/total + priority * 0.1)` — clamped, not normalized,
    /// so a single hit on a high-priority subcategory can saturate.
    fn confidence(matched: usize, total: usize, priority: f64) -> f64 {
        let base = matched as f64 / total as f64;
        (base + priority * 0.1).min(1.0)
    }
}
