//! `trasa classify` — Offline intent classification.

use std::sync::Arc;

use trasa_agent::IntentClassifier;
use trasa_dictionaries::DictionaryStore;

pub fn run(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(DictionaryStore::builtin());
    let classifier = IntentClassifier::new(store);

    let classification = classifier.classify(message);
    println!("{}", serde_json::to_string_pretty(&classification)?);

    Ok(())
}
