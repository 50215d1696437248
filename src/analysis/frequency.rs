//! Per-document token frequency counting.
//!
//! A [`FrequencyTable`] maps each distinct token of one document to its
//! occurrence count within that document. It is an ephemeral structure:
//! the classifier builds one per `learn`/`categorize` call and discards it
//! afterwards, so it is never part of the persisted model state and can use
//! a fast non-serializable hash map.
//!
//! # Examples
//!
//! ```
//! use krites::analysis::frequency::FrequencyTable;
//! use krites::analysis::tokenizer::Tokenizer;
//! use krites::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let table = FrequencyTable::from_tokens(tokenizer.tokenize("a b a").unwrap());
//!
//! assert_eq!(table.count("a"), 2);
//! assert_eq!(table.count("b"), 1);
//! assert_eq!(table.count("c"), 0);
//! ```

use ahash::AHashMap;

use crate::analysis::token::TokenStream;

/// A mapping from token to its occurrence count within a single document.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty frequency table.
    pub fn new() -> Self {
        FrequencyTable {
            counts: AHashMap::new(),
        }
    }

    /// Build a frequency table from a token stream.
    ///
    /// This is a pure, total function: an empty stream yields an empty table.
    pub fn from_tokens(tokens: TokenStream) -> Self {
        let mut counts = AHashMap::new();

        for token in tokens {
            *counts.entry(token.text).or_insert(0) += 1;
        }

        FrequencyTable { counts }
    }

    /// Get the occurrence count for a token (0 if the token is absent).
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Iterate over (token, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Number of distinct tokens in the table.
    pub fn distinct_tokens(&self) -> usize {
        self.counts.len()
    }

    /// Total token occurrences in the table (the document length).
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
