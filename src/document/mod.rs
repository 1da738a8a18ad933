//! Document text extraction.
//!
//! This module provides a [`DocumentExtractor`] trait and per-format
//! implementations that pull plain text out of uploaded files. Extractors
//! are thin boundary collaborators: the paraphrasing core only ever sees
//! the extracted string.

use std::path::Path;

use crate::error::Result;

pub mod pdf;
pub mod text;

// Re-export all extractors for convenient access
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

/// A trait for extracting the full plain-text content of a document file.
pub trait DocumentExtractor: Send + Sync {
    /// Extract the document's text, pages concatenated.
    ///
    /// Fails if the document is malformed or its text cannot be decoded.
    /// An extraction that succeeds but yields blank text is reported as an
    /// empty document by the caller, not here.
    fn extract(&self, path: &Path) -> Result<String>;

    /// Get the name of this extractor (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Pick an extractor for a file based on its extension.
///
/// Returns `None` for unknown or missing extensions.
pub fn extractor_for(path: &Path) -> Option<Box<dyn DocumentExtractor>> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "pdf" => Some(Box::new(PdfExtractor::new())),
        "txt" | "text" => Some(Box::new(PlainTextExtractor::new())),
        _ => None,
    }
}
