//! Incremental multinomial Naive Bayes classification.
//!
//! This module provides the classifier model itself:
//!
//! - `NaiveBayesClassifier`: the statistical model with `learn` and
//!   `categorize` operations
//! - `ClassifierConfig`: construction options (the pluggable tokenizer)
//! - `ClassifierState`: the flat serializable record the model exports to
//!   and imports from
//!
//! # Example
//!
//! ```
//! use krites::classifier::NaiveBayesClassifier;
//!
//! # fn main() -> krites::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier
//!     .learn("Chinese Beijing Chinese", "chinese")?
//!     .learn("Tokyo Japan Chinese", "japanese")?;
//!
//! let category = classifier.categorize("Beijing Beijing")?;
//! assert_eq!(category.as_deref(), Some("chinese"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod naive_bayes;
pub mod state;

pub use config::ClassifierConfig;
pub use naive_bayes::NaiveBayesClassifier;
pub use state::{ClassifierState, STATE_FIELDS};
