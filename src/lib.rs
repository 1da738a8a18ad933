//! # Parrot
//!
//! A synonym-based document paraphrasing library for Rust.
//!
//! Parrot extracts plain text from a document and produces three paraphrased
//! variants of it by substituting words with synonyms drawn from a lexical
//! database, at increasing levels of semantic divergence.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable text analysis pipeline (tokenizer, word cleaner, stopwords)
//! - File-backed synonym lexicon with morphological fallback
//! - Three difficulty levels: easy, medium, hard
//! - Deterministic output with a seedable random source
//! - PDF and plain-text document extraction

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod paraphrase;
pub mod service;
pub mod upload;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
