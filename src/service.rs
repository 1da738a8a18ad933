//! Paraphrasing service: the boundary where uploads become paraphrases.
//!
//! The service wires the upload gateway, document extractors, and the
//! paraphraser together. Its contract with any presentation layer is
//! deliberately small: a request produces either one human-readable error
//! string or four text strings (the original plus the three variants).

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ParrotConfig;
use crate::document::extractor_for;
use crate::lexicon::Lexicon;
use crate::paraphrase::paraphraser::{ParaphraseSet, Paraphraser};
use crate::upload::{UploadError, UploadGateway};

/// Conditions recovered at the service boundary.
///
/// None of these propagate as a crash; each renders as a single
/// human-readable message. The transformation layer itself has no error
/// taxonomy: unknown words, empty strings, and lexicon misses all fall back
/// to the original token.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request lacked a file or a filename.
    #[error("No file uploaded.")]
    NoFileProvided,

    /// The file's extension is not on the allow-list.
    #[error("Invalid file format. Allowed formats: {allowed}.")]
    UnsupportedFormat { allowed: String },

    /// The payload exceeds the configured size limit.
    #[error("File too large: {size} bytes (limit {limit} bytes).")]
    PayloadTooLarge { size: u64, limit: u64 },

    /// The extractor failed or the document had no extractable text.
    #[error("No text found in the uploaded document.")]
    ExtractionFailed,

    /// Extraction succeeded but yielded blank text.
    #[error("The document contains no text to paraphrase.")]
    EmptyDocument,

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// The original text and its three paraphrased variants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParaphraseResponse {
    pub original: String,
    pub easy: String,
    pub medium: String,
    pub hard: String,
}

impl ParaphraseResponse {
    fn new(original: String, set: ParaphraseSet) -> Self {
        ParaphraseResponse {
            original,
            easy: set.easy,
            medium: set.medium,
            hard: set.hard,
        }
    }
}

/// Orchestrates upload validation, extraction, and paraphrasing.
///
/// Stateless across requests: the only shared values are the read-only
/// configuration, the stopword set, and the lexicon handle, all safe for
/// unsynchronized concurrent reads.
#[derive(Clone)]
pub struct ParaphraseService {
    config: Arc<ParrotConfig>,
    gateway: UploadGateway,
    paraphraser: Paraphraser,
}

impl ParaphraseService {
    /// Create a service over a configuration and a lexicon.
    pub fn new(config: Arc<ParrotConfig>, lexicon: Arc<dyn Lexicon>) -> Self {
        ParaphraseService {
            gateway: UploadGateway::new(config.clone()),
            paraphraser: Paraphraser::new(lexicon),
            config,
        }
    }

    /// Get the service configuration.
    pub fn config(&self) -> &ParrotConfig {
        &self.config
    }

    /// Get the paraphraser.
    pub fn paraphraser(&self) -> &Paraphraser {
        &self.paraphraser
    }

    /// Accept an uploaded file (filename plus raw bytes), store it, and run
    /// the full pipeline on it.
    pub fn process_upload<R: Rng + ?Sized>(
        &self,
        filename: &str,
        bytes: &[u8],
        rng: &mut R,
    ) -> Result<ParaphraseResponse, ServiceError> {
        let stored = self
            .gateway
            .store(filename, bytes)
            .map_err(|e| self.map_upload_error(e))?;
        self.process_file(&stored, rng)
    }

    /// Run extraction and paraphrasing on a document already on disk.
    pub fn process_file<R: Rng + ?Sized>(
        &self,
        path: &Path,
        rng: &mut R,
    ) -> Result<ParaphraseResponse, ServiceError> {
        let extractor = extractor_for(path).ok_or_else(|| ServiceError::UnsupportedFormat {
            allowed: self.config.allowed_extensions.join(", "),
        })?;

        let original = extractor.extract(path).map_err(|e| {
            debug!("extraction failed for '{}': {}", path.display(), e);
            ServiceError::ExtractionFailed
        })?;
        let original = original.trim().to_string();
        if original.is_empty() {
            return Err(ServiceError::EmptyDocument);
        }

        info!(
            "paraphrasing '{}' ({} tokens)",
            path.display(),
            original.split_whitespace().count()
        );

        let set = self
            .paraphraser
            .paraphrase_all(&original, rng)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(ParaphraseResponse::new(original, set))
    }

    fn map_upload_error(&self, error: UploadError) -> ServiceError {
        match error {
            UploadError::NoFileProvided => ServiceError::NoFileProvided,
            UploadError::UnsupportedFormat { .. } => ServiceError::UnsupportedFormat {
                allowed: self.config.allowed_extensions.join(", "),
            },
            UploadError::PayloadTooLarge { size, limit } => {
                ServiceError::PayloadTooLarge { size, limit }
            }
            UploadError::Storage(e) => ServiceError::Internal(e.to_string()),
        }
    }
}

impl std::fmt::Debug for ParaphraseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParaphraseService")
            .field("config", &self.config)
            .finish()
    }
}
