//! Error types for the Parrot library.
//!
//! This module provides comprehensive error handling for all Parrot operations.
//! All errors are represented by the [`ParrotError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use parrot::error::{ParrotError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(ParrotError::invalid_argument("Invalid input"))
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

/// The main error type for Parrot operations.
///
/// This enum represents all possible errors that can occur in the Parrot library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum ParrotError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, cleaning, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon-related errors (loading, lookup)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Document extraction errors
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Upload handling errors
    #[error("Upload error: {0}")]
    Upload(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ParrotError.
pub type Result<T> = std::result::Result<T, ParrotError>;

impl ParrotError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ParrotError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        ParrotError::Lexicon(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ParrotError::Lexicon(msg.into()) // Parse errors come from lexicon files
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        ParrotError::Extraction(msg.into())
    }

    /// Create a new upload error.
    pub fn upload<S: Into<String>>(msg: S) -> Self {
        ParrotError::Upload(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ParrotError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ParrotError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        ParrotError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ParrotError::Other(format!("Not found: {}", msg.into()))
    }
}
