//! Synonym lexicon for Parrot.
//!
//! A lexicon maps words to ordered groups of synonymous words (synsets),
//! most common sense first. The paraphraser only ever consumes the
//! flattened candidate view: one canonical lemma per synset, in the
//! database's own commonality order.

use crate::error::Result;

pub mod cache;
pub mod memory;
pub mod synset;

// Re-export commonly used types
pub use cache::CachedLexicon;
pub use memory::InMemoryLexicon;
pub use synset::Synset;

/// Trait for synonym databases.
///
/// Lookups are treated as fallible: a file- or network-backed lexicon may
/// fail at query time. Callers that must never fail (the synonym selector)
/// map any error to the passthrough fallback.
pub trait Lexicon: Send + Sync {
    /// All synsets recorded for a word, in commonality order.
    ///
    /// Returns an empty vector if the word is unknown.
    fn synsets(&self, word: &str) -> Result<Vec<Synset>>;

    /// The flattened candidate set for a word: the canonical lemma of each
    /// synset, in the database's default ordering (most common first).
    fn candidates(&self, word: &str) -> Result<Vec<String>> {
        Ok(self
            .synsets(word)?
            .iter()
            .filter_map(|s| s.canonical().map(|l| l.to_string()))
            .collect())
    }

    /// Get the name of this lexicon (for debugging and configuration).
    fn name(&self) -> &'static str;
}
