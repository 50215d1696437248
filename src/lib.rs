//! # Krites
//!
//! An incremental multinomial Naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Incremental (online) supervised learning
//! - Laplace (add-one) smoothed log-space scoring
//! - Pluggable tokenizers
//! - Lossless JSON state export/import
//!
//! ## Example
//!
//! ```
//! use krites::classifier::NaiveBayesClassifier;
//!
//! # fn main() -> krites::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new();
//!
//! classifier
//!     .learn("amazing, awesome movie!! Yeah!!", "positive")?
//!     .learn("terrible, shitty thing. Damn. Sucks!!", "negative")?;
//!
//! let category = classifier.categorize("awesome, cool, amazing!! Yay.")?;
//! assert_eq!(category.as_deref(), Some("positive"));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;

pub mod prelude {
    pub use crate::analysis::frequency::FrequencyTable;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::classifier::{ClassifierConfig, ClassifierState, NaiveBayesClassifier};
    pub use crate::error::{KritesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
