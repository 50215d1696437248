//! Error types for the Krites library.
//!
//! All errors are represented by the [`KritesError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use krites::error::{KritesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KritesError::configuration("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Krites operations.
///
/// This enum represents all possible errors that can occur in the Krites
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum KritesError {
    /// I/O errors (reading or writing persisted state, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (invalid construction options)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// State serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KritesError.
pub type Result<T> = std::result::Result<T, KritesError>;

impl KritesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KritesError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        KritesError::Configuration(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        KritesError::SerializationError(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KritesError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = KritesError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = KritesError::configuration("Test configuration error");
        assert_eq!(
            error.to_string(),
            "Configuration error: Test configuration error"
        );

        let error = KritesError::serialization("Test serialization error");
        assert_eq!(
            error.to_string(),
            "Serialization error: Test serialization error"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let krites_error = KritesError::from(io_error);

        match krites_error {
            KritesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
