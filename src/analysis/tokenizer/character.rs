//! Character tokenizer implementation.
//!
//! Splits text into individual characters, skipping whitespace. This is
//! useful for scripts without word separators and for training classifiers
//! on short codes or identifiers.
//!
//! # Examples
//!
//! ```
//! use krites::analysis::token::Token;
//! use krites::analysis::tokenizer::Tokenizer;
//! use krites::analysis::tokenizer::character::CharacterTokenizer;
//!
//! let tokenizer = CharacterTokenizer::new();
//! let tokens: Vec<Token> = tokenizer.tokenize("abcd").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "a");
//! assert_eq!(tokens[3].text, "d");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits one token per non-whitespace character.
#[derive(Clone, Debug, Default)]
pub struct CharacterTokenizer;

impl CharacterTokenizer {
    /// Create a new character tokenizer.
    pub fn new() -> Self {
        CharacterTokenizer
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, c)| Token::new(c.to_string(), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "character"
    }
}
