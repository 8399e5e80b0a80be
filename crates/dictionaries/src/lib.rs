//! Dictionary Store — static, load-once category definitions.
//!
//! The three built-in dictionaries (incidents, routes, emergency) are
//! embedded at compile time from `data/*.json` and parsed once at startup.
//! The store is read-only afterwards: concurrent requests share it without
//! locking.
//!
//! Malformed built-in data is a startup-fatal configuration error, not a
//! runtime failure; custom data loaded through [`DictionaryStore::from_json`]
//! reports errors through [`StoreError`] instead.

use thiserror::Error;
use trasa_core::Dictionary;

const INCIDENTS: &str = include_str!("../data/incidents.json");
const ROUTES: &str = include_str!("../data/routes.json");
const EMERGENCY: &str = include_str!("../data/emergency.json");

/// Errors raised while loading dictionary data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to parse dictionary data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate dictionary category: {0}")]
    DuplicateCategory(String),
}

/// The immutable collection of loaded dictionaries, in insertion order.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    dictionaries: Vec<Dictionary>,
}

impl DictionaryStore {
    /// Load the built-in dictionaries. The embedded data is known good at
    /// compile time, so a parse failure here aborts startup.
    pub fn builtin() -> Self {
        Self::from_json(&[INCIDENTS, ROUTES, EMERGENCY])
            .expect("Built-in dictionary data is malformed")
    }

    /// Load dictionaries from raw JSON documents, preserving the given order.
    pub fn from_json(documents: &[&str]) -> Result<Self, StoreError> {
        let mut dictionaries = Vec::with_capacity(documents.len());

        for doc in documents {
            let dict: Dictionary = serde_json::from_str(doc)?;
            if dictionaries
                .iter()
                .any(|d: &Dictionary| d.category == dict.category)
            {
                return Err(StoreError::DuplicateCategory(dict.category));
            }
            dictionaries.push(dict);
        }

        Ok(Self { dictionaries })
    }

    /// All dictionaries, in insertion order.
    pub fn all(&self) -> &[Dictionary] {
        &self.dictionaries
    }

    /// Look up a dictionary by category.
    pub fn get(&self, category: &str) -> Option<&Dictionary> {
        self.dictionaries.iter().find(|d| d.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_loads_three_dictionaries_in_order() {
        let store = DictionaryStore::builtin();
        let categories: Vec<_> = store.all().iter().map(|d| d.category.as_str()).collect();
        assert_eq!(categories, vec!["incidents", "routes", "emergency"]);
    }

    #[test]
    fn builtin_categories_are_unique_and_gated() {
        let store = DictionaryStore::builtin();
        for dict in store.all() {
            assert!(!dict.triggers.is_empty(), "{} has no triggers", dict.category);
            for sub in &dict.subcategories {
                assert!(
                    !sub.keywords.is_empty(),
                    "{}/{} has no keywords",
                    dict.category,
                    sub.key
                );
            }
        }
    }

    #[test]
    fn lookup_by_category() {
        let store = DictionaryStore::builtin();
        assert!(store.get("incidents").is_some());
        assert!(store.get("emergency").is_some());
        assert!(store.get("weather").is_none());
    }

    #[test]
    fn incidents_accident_covers_wypadek() {
        let store = DictionaryStore::builtin();
        let dict = store.get("incidents").unwrap();
        let accident = dict.trigger("accident").unwrap();
        assert!(accident.keywords.iter().any(|k| k == "wypadek"));
        assert!(accident.priority() > 1.0);
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let doc = r#"{ "category": "incidents", "triggers": ["x"], "subcategories": [] }"#;
        let err = DictionaryStore::from_json(&[doc, doc]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateCategory(_)));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = DictionaryStore::from_json(&["{ not json"]).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
