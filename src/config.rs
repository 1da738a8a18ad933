//! Process-wide configuration for the paraphrasing service.
//!
//! All runtime knobs (upload directory, size limit, extension allow-list,
//! lexicon location) live in a single immutable [`ParrotConfig`] value that
//! is built once at startup and shared by reference. There is no global
//! mutable state.

use std::path::{Path, PathBuf};

/// Default maximum upload size in bytes (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Default extensions accepted by the upload gateway.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Configuration for the paraphrasing service.
#[derive(Clone, Debug)]
pub struct ParrotConfig {
    /// Directory where uploaded files are stored before extraction.
    pub upload_dir: PathBuf,

    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: u64,

    /// Lowercased file extensions accepted by the upload gateway.
    pub allowed_extensions: Vec<String>,

    /// Optional path to a lexicon file; `None` uses the bundled lexicon.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for ParrotConfig {
    fn default() -> Self {
        ParrotConfig {
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            lexicon_path: None,
        }
    }
}

impl ParrotConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upload directory.
    pub fn with_upload_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.upload_dir = dir.into();
        self
    }

    /// Set the maximum upload size in bytes.
    pub fn with_max_upload_bytes(mut self, bytes: u64) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Set the accepted file extensions (stored lowercased).
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        self
    }

    /// Set the lexicon file path.
    pub fn with_lexicon_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Check whether a file extension is on the allow-list (case-insensitive).
    pub fn is_allowed_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.allowed_extensions.iter().any(|e| *e == extension)
    }

    /// Check whether a path carries an allowed extension.
    pub fn is_allowed_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.is_allowed_extension(e))
    }
}
