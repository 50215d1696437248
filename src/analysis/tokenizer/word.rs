//! Word tokenizer implementation.
//!
//! This is the default tokenizer of the classifier. It replaces every
//! character that is neither a word character nor whitespace with a space,
//! then splits the result on runs of whitespace. The `\w` character class of
//! the `regex` crate is Unicode-aware, so letters from non-Latin scripts
//! (Cyrillic, Greek, CJK, ...) are kept as word characters rather than being
//! treated as punctuation.
//!
//! # Examples
//!
//! ```
//! use krites::analysis::token::Token;
//! use krites::analysis::tokenizer::Tokenizer;
//! use krites::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<Token> = tokenizer.tokenize("amazing, awesome!!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "amazing");
//! assert_eq!(tokens[1].text, "awesome");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{KritesError, Result};

/// A tokenizer that strips punctuation and splits on whitespace.
///
/// Anything that is not a word character (`\w`: Unicode letters, digits, and
/// underscore) or whitespace is replaced with a space before splitting, so
/// leading/trailing punctuation never produces empty tokens.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// Matches every character that is neither a word character nor whitespace
    punctuation: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[^\w\s]")
            .map_err(|e| KritesError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            punctuation: Arc::new(regex),
        })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let sanitized = self.punctuation.replace_all(text, " ");

        let tokens: Vec<Token> = sanitized
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
