//! Classifier construction options.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;

/// Configuration for a [`NaiveBayesClassifier`](crate::classifier::NaiveBayesClassifier).
///
/// The only recognized option is a replacement tokenizer. The tokenizer is
/// an injected capability, not data: it is skipped during serialization and
/// must be re-supplied by the caller when a model with a custom tokenizer is
/// reconstructed from exported state (see
/// [`NaiveBayesClassifier::from_json_with_config`](crate::classifier::NaiveBayesClassifier::from_json_with_config)).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Replacement for the default word tokenizer.
    #[serde(skip)]
    pub tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl ClassifierConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        ClassifierConfig::default()
    }

    /// Set a custom tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Resolve the tokenizer to use: the configured one, or the default
    /// word tokenizer.
    pub fn resolve_tokenizer(&self) -> Arc<dyn Tokenizer> {
        match &self.tokenizer {
            Some(tokenizer) => Arc::clone(tokenizer),
            None => Arc::new(WordTokenizer::default()),
        }
    }
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field(
                "tokenizer",
                &self.tokenizer.as_ref().map(|t| t.name()).unwrap_or("default"),
            )
            .finish()
    }
}
