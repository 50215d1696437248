//! Serializable classifier state.
//!
//! [`ClassifierState`] is the flat record a classifier exports to and
//! imports from. Import validates that every required field is present
//! before any model is built; presence is checked explicitly against the
//! JSON object keys, never by truthiness, so zero counts and empty
//! collections (a freshly-constructed, never-trained model) are valid.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::config::ClassifierConfig;
use crate::error::{KritesError, Result};

/// The fields a serialized state record must contain.
pub const STATE_FIELDS: [&str; 8] = [
    "categories",
    "doc_count",
    "total_documents",
    "vocabulary",
    "vocabulary_size",
    "word_count",
    "word_frequency_count",
    "options",
];

/// A complete, order-independent snapshot of a classifier's statistical
/// state.
///
/// Round-trip equivalence holds: importing an exported record yields a model
/// observably identical to the one exported, for any reachable state
/// including the empty one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassifierState {
    /// Category registry, in registration order.
    pub categories: Vec<String>,
    /// Number of training documents per category.
    pub doc_count: HashMap<String, u64>,
    /// Number of learning calls across all categories.
    pub total_documents: u64,
    /// Distinct tokens ever observed.
    pub vocabulary: HashSet<String>,
    /// Cached cardinality of the vocabulary.
    pub vocabulary_size: usize,
    /// Total token occurrences per category.
    pub word_count: HashMap<String, u64>,
    /// Per category, cumulative count of each token.
    pub word_frequency_count: HashMap<String, HashMap<String, u64>>,
    /// The configuration the model was constructed with, minus the
    /// non-serializable tokenizer capability.
    pub options: ClassifierConfig,
}

impl ClassifierState {
    /// Serialize this state to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }

    /// Deserialize a state record from a JSON string.
    ///
    /// Fails if the input is not a JSON object or if any field named in
    /// [`STATE_FIELDS`] is absent. The error names the first missing field.
    /// Fields that are present but empty are valid.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| KritesError::serialization(format!("expected a valid JSON string: {e}")))?;

        let object = value.as_object().ok_or_else(|| {
            KritesError::serialization("expected the state record to be a JSON object")
        })?;

        for field in STATE_FIELDS {
            if !object.contains_key(field) {
                return Err(KritesError::serialization(format!(
                    "state record is missing an expected field: `{field}`"
                )));
            }
        }

        if !object["options"].is_object() {
            return Err(KritesError::configuration(
                "the `options` field of a state record must be an object",
            ));
        }

        let state: ClassifierState = serde_json::from_value(value)
            .map_err(|e| KritesError::serialization(format!("malformed state record: {e}")))?;

        Ok(state)
    }
}
