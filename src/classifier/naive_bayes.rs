//! Multinomial Naive Bayes classifier with Laplace smoothing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::frequency::FrequencyTable;
use crate::analysis::tokenizer::Tokenizer;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::state::ClassifierState;
use crate::error::Result;

/// An incremental, supervised, probabilistic text classifier.
///
/// The classifier learns from labeled documents one at a time and predicts
/// the most likely category for unseen text using multinomial Naive Bayes
/// with Laplace (add-one) smoothing. Scoring accumulates log-probabilities
/// to avoid floating-point underflow on long documents.
///
/// The model is a single mutable unit of state: [`learn`](Self::learn)
/// takes `&mut self` while [`categorize`](Self::categorize) and
/// [`export`](Self::export) take `&self`, so the borrow checker enforces
/// that a read never observes a partially applied update. Hosts that share
/// a model across threads wrap it in their own lock.
///
/// # Examples
///
/// ```
/// use krites::classifier::NaiveBayesClassifier;
///
/// # fn main() -> krites::error::Result<()> {
/// let mut classifier = NaiveBayesClassifier::new();
/// classifier.learn("amazing, awesome movie!! Yeah!!", "positive")?;
/// classifier.learn("terrible, shitty thing. Damn. Sucks!!", "negative")?;
///
/// let category = classifier.categorize("awesome, amazing!!")?;
/// assert_eq!(category.as_deref(), Some("positive"));
/// # Ok(())
/// # }
/// ```
pub struct NaiveBayesClassifier {
    /// Tokenizer resolved from the configuration.
    tokenizer: Arc<dyn Tokenizer>,
    /// The configuration the model was constructed with.
    config: ClassifierConfig,
    /// Category registry in insertion order. The order is load-bearing:
    /// scoring ties are broken in favor of the earlier-registered category.
    categories: Vec<String>,
    /// Number of training documents per category.
    doc_count: HashMap<String, u64>,
    /// Total token occurrences per category.
    word_count: HashMap<String, u64>,
    /// Per category, cumulative count of each token.
    word_frequency_count: HashMap<String, HashMap<String, u64>>,
    /// Distinct tokens ever observed across all training documents.
    vocabulary: HashSet<String>,
    /// Cached cardinality of the vocabulary, used as the smoothing
    /// denominator. Incremented exactly once per first sighting of a token,
    /// never decremented.
    vocabulary_size: usize,
    /// Number of learning calls across all categories.
    total_documents: u64,
}

impl NaiveBayesClassifier {
    /// Create a new empty classifier with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a new empty classifier with the given configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        NaiveBayesClassifier {
            tokenizer: config.resolve_tokenizer(),
            config,
            categories: Vec::new(),
            doc_count: HashMap::new(),
            word_count: HashMap::new(),
            word_frequency_count: HashMap::new(),
            vocabulary: HashSet::new(),
            vocabulary_size: 0,
            total_documents: 0,
        }
    }

    /// Learn one labeled document.
    ///
    /// Tokenizes `text`, builds its frequency table, and folds it into the
    /// model under `category`. The category is registered on first sight.
    /// Empty text still counts as a document for the category prior, it
    /// just contributes nothing to the frequency tables.
    ///
    /// Tokenization happens before any mutation, so a tokenizer failure
    /// leaves the model unmodified.
    ///
    /// Returns `&mut Self` so calls can be chained:
    ///
    /// ```
    /// use krites::classifier::NaiveBayesClassifier;
    ///
    /// # fn main() -> krites::error::Result<()> {
    /// let mut classifier = NaiveBayesClassifier::new();
    /// classifier
    ///     .learn("amazing, awesome movie!!", "positive")?
    ///     .learn("terrible, shitty thing", "negative")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn learn(&mut self, text: &str, category: &str) -> Result<&mut Self> {
        let frequency_table = FrequencyTable::from_tokens(self.tokenizer.tokenize(text)?);

        self.initialize_category(category);

        if let Some(count) = self.doc_count.get_mut(category) {
            *count += 1;
        }
        self.total_documents += 1;

        for (token, frequency_in_text) in frequency_table.iter() {
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.to_string());
                self.vocabulary_size += 1;
            }

            if let Some(frequencies) = self.word_frequency_count.get_mut(category) {
                *frequencies.entry(token.to_string()).or_insert(0) += frequency_in_text;
            }

            if let Some(count) = self.word_count.get_mut(category) {
                *count += frequency_in_text;
            }
        }

        Ok(self)
    }

    /// Predict the most likely category for the given text.
    ///
    /// Returns `Ok(None)` if no category has ever been learned (there is
    /// nothing to choose from). Otherwise returns the category with the
    /// greatest log-probability; when two categories score exactly equal,
    /// the one registered first wins.
    ///
    /// This operation is read-only.
    pub fn categorize(&self, text: &str) -> Result<Option<String>> {
        let frequency_table = FrequencyTable::from_tokens(self.tokenizer.tokenize(text)?);

        let mut max_probability = f64::NEG_INFINITY;
        let mut chosen_category = None;

        for (category, log_probability) in self.score_table(&frequency_table) {
            if log_probability > max_probability {
                max_probability = log_probability;
                chosen_category = Some(category);
            }
        }

        Ok(chosen_category)
    }

    /// Compute the per-category log-probabilities for the given text.
    ///
    /// Scores are returned in category registration order.
    /// [`categorize`](Self::categorize) is the argmax over this list.
    pub fn log_scores(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let frequency_table = FrequencyTable::from_tokens(self.tokenizer.tokenize(text)?);
        Ok(self.score_table(&frequency_table))
    }

    /// Laplace-smoothed conditional probability estimate of `token` given
    /// `category`:
    ///
    /// ```text
    /// (count_of(token, category) + 1) / (word_count[category] + vocabulary_size)
    /// ```
    ///
    /// The add-one adjustment guarantees a strictly positive probability
    /// for every token/category pair, including tokens never seen anywhere,
    /// which keeps the log-probability sum finite.
    ///
    /// `category` must already be registered in the model; internal callers
    /// only invoke this for known categories.
    pub fn token_probability(&self, token: &str, category: &str) -> f64 {
        // 0 if the token was never observed under this category
        let token_count = self
            .word_frequency_count
            .get(category)
            .and_then(|frequencies| frequencies.get(token))
            .copied()
            .unwrap_or(0);

        let category_word_count = self.word_count.get(category).copied().unwrap_or(0);

        (token_count as f64 + 1.0) / (category_word_count as f64 + self.vocabulary_size as f64)
    }

    /// Score a prebuilt frequency table against every known category, in
    /// registration order.
    fn score_table(&self, frequency_table: &FrequencyTable) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .map(|category| {
                // Category prior: out of all documents seen, how many were
                // mapped to this category. Accumulated in log-space.
                let doc_count = self.doc_count.get(category).copied().unwrap_or(0);
                let category_probability = doc_count as f64 / self.total_documents as f64;

                let mut log_probability = category_probability.ln();

                for (token, frequency_in_text) in frequency_table.iter() {
                    let token_probability = self.token_probability(token, category);
                    log_probability += frequency_in_text as f64 * token_probability.ln();
                }

                (category.clone(), log_probability)
            })
            .collect()
    }

    /// Register a category and initialize its counters if it is unseen.
    fn initialize_category(&mut self, category: &str) {
        if !self.word_frequency_count.contains_key(category) {
            self.categories.push(category.to_string());
            self.doc_count.insert(category.to_string(), 0);
            self.word_count.insert(category.to_string(), 0);
            self.word_frequency_count
                .insert(category.to_string(), HashMap::new());
        }
    }

    /// Export the full model state as a flat serializable record.
    ///
    /// The record contains every statistical field plus the configuration
    /// options (minus the non-serializable tokenizer). See
    /// [`ClassifierState`] for the import side of the contract.
    pub fn export(&self) -> ClassifierState {
        ClassifierState {
            categories: self.categories.clone(),
            doc_count: self.doc_count.clone(),
            total_documents: self.total_documents,
            vocabulary: self.vocabulary.clone(),
            vocabulary_size: self.vocabulary_size,
            word_count: self.word_count.clone(),
            word_frequency_count: self.word_frequency_count.clone(),
            options: self.config.clone(),
        }
    }

    /// Reconstruct a classifier from an exported state record.
    ///
    /// Every field is copied verbatim; nothing is recomputed. The
    /// `config` argument re-supplies the tokenizer capability, which is not
    /// part of the persisted state; pass `ClassifierConfig::default()` to
    /// use the default word tokenizer.
    pub fn import(state: ClassifierState, config: ClassifierConfig) -> Self {
        NaiveBayesClassifier {
            tokenizer: config.resolve_tokenizer(),
            config,
            categories: state.categories,
            doc_count: state.doc_count,
            word_count: state.word_count,
            word_frequency_count: state.word_frequency_count,
            vocabulary: state.vocabulary,
            vocabulary_size: state.vocabulary_size,
            total_documents: state.total_documents,
        }
    }

    /// Serialize the full model state to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        self.export().to_json()
    }

    /// Reconstruct a classifier from a JSON state record, using the default
    /// configuration.
    ///
    /// Fails with a descriptive error if the input is not valid JSON or if
    /// any required state field is missing; no partially-built model is
    /// returned.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_config(json, ClassifierConfig::default())
    }

    /// Reconstruct a classifier from a JSON state record, re-supplying a
    /// configuration (for models trained with a custom tokenizer).
    pub fn from_json_with_config(json: &str, config: ClassifierConfig) -> Result<Self> {
        let state = ClassifierState::from_json(json)?;
        Ok(Self::import(state, config))
    }

    /// The configuration this classifier was constructed with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The name of the tokenizer in use.
    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    /// Known categories, in registration order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of distinct tokens ever observed.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Check whether a token has ever been observed.
    pub fn vocabulary_contains(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    /// Number of documents learned across all categories.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Number of training documents labeled with `category` (0 if the
    /// category is unknown).
    pub fn doc_count(&self, category: &str) -> u64 {
        self.doc_count.get(category).copied().unwrap_or(0)
    }

    /// Total token occurrences folded into `category` (0 if the category is
    /// unknown).
    pub fn word_count(&self, category: &str) -> u64 {
        self.word_count.get(category).copied().unwrap_or(0)
    }

    /// Cumulative count of `token` across all documents labeled with
    /// `category` (0 if either is unknown).
    pub fn token_frequency(&self, category: &str, token: &str) -> u64 {
        self.word_frequency_count
            .get(category)
            .and_then(|frequencies| frequencies.get(token))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("tokenizer", &self.tokenizer.name())
            .field("categories", &self.categories)
            .field("vocabulary_size", &self.vocabulary_size)
            .field("total_documents", &self.total_documents)
            .finish()
    }
}
