//! Text analysis module for Krites.
//!
//! This module provides the text analysis functionality that feeds the
//! classifier: tokenization and per-document frequency counting.

pub mod frequency;
pub mod token;
pub mod tokenizer;
