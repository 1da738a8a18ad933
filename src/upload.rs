//! Upload gateway: validation and scoped storage of incoming documents.
//!
//! The gateway rejects bad uploads before any core logic runs: missing or
//! empty filenames, extensions outside the allow-list, and oversized
//! payloads. Accepted files are written under the configured upload
//! directory with a sanitized, uuid-prefixed name.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;
use uuid::Uuid;

use crate::config::ParrotConfig;

/// Why an upload was rejected or could not be stored.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The request lacked a file or a filename.
    #[error("no file provided")]
    NoFileProvided,

    /// The file's extension is not on the allow-list.
    #[error("unsupported format '{extension}'")]
    UnsupportedFormat { extension: String },

    /// The payload exceeds the configured size limit.
    #[error("payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: u64, limit: u64 },

    /// The file could not be written to the upload directory.
    #[error("failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
}

/// Validates uploads and stores them under a scoped directory.
#[derive(Clone, Debug)]
pub struct UploadGateway {
    config: Arc<ParrotConfig>,
}

impl UploadGateway {
    /// Create a gateway over the given configuration.
    pub fn new(config: Arc<ParrotConfig>) -> Self {
        UploadGateway { config }
    }

    /// Validate a (filename, size) pair without storing anything.
    pub fn validate(&self, filename: &str, size: u64) -> Result<(), UploadError> {
        if filename.trim().is_empty() {
            return Err(UploadError::NoFileProvided);
        }

        let extension = PathBuf::from(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !self.config.is_allowed_extension(&extension) {
            warn!("rejected upload '{filename}': extension '{extension}' not allowed");
            return Err(UploadError::UnsupportedFormat { extension });
        }

        if size > self.config.max_upload_bytes {
            warn!("rejected upload '{filename}': {size} bytes over limit");
            return Err(UploadError::PayloadTooLarge {
                size,
                limit: self.config.max_upload_bytes,
            });
        }

        Ok(())
    }

    /// Validate and store an upload, returning the stored path.
    pub fn store(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, UploadError> {
        self.validate(filename, bytes.len() as u64)?;

        std::fs::create_dir_all(&self.config.upload_dir)?;

        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(filename));
        let path = self.config.upload_dir.join(stored_name);
        std::fs::write(&path, bytes)?;
        debug!("stored upload '{}' at '{}'", filename, path.display());

        Ok(path)
    }
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Path separators and anything outside `[A-Za-z0-9._-]` become `_`, so a
/// stored name can never escape the upload directory.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
