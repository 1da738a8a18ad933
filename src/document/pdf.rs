//! PDF text extraction.

use std::path::Path;

use log::debug;

use super::DocumentExtractor;

use crate::error::{ParrotError, Result};

/// Extracts text from PDF files via the `pdf-extract` crate.
///
/// Page texts are concatenated in order. Encrypted, scanned, or corrupted
/// PDFs surface as extraction errors.
#[derive(Clone, Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        PdfExtractor
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let text = pdf_extract::extract_text(path).map_err(|e| {
            ParrotError::extraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(
            "extracted {} bytes of text from '{}'",
            text.len(),
            path.display()
        );
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
