//! Plain-text extraction.

use std::path::Path;

use super::DocumentExtractor;

use crate::error::{ParrotError, Result};

/// Reads `.txt` files as UTF-8.
#[derive(Clone, Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain-text extractor.
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            ParrotError::extraction(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
