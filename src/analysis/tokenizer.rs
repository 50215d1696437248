//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// A tokenizer is an injected capability of the classifier: it is supplied
/// at construction time and is not part of the persisted model state. A
/// custom tokenizer must be re-supplied when a model is reconstructed from
/// its serialized state.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod character;
pub mod unicode_word;
pub mod whitespace;
pub mod word;

// Re-export all tokenizers for convenient access
pub use character::CharacterTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;
