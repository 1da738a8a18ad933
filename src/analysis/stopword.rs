//! Stopword set implementation.
//!
//! Stopwords are common function words ("the", "and", "of") that the
//! paraphraser never substitutes, so that sentence structure survives the
//! rewrite. The default list is loaded once at process start and shared
//! read-only; membership tests are case-insensitive.
//!
//! # Examples
//!
//! ```
//! use parrot::analysis::stopword::StopwordSet;
//!
//! let stopwords = StopwordSet::new();
//! assert!(stopwords.contains("the"));
//! assert!(stopwords.contains("The"));
//! assert!(!stopwords.contains("feline"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default English stopword list.
///
/// Common function words excluded from synonym substitution.
const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "that", "it", "for", "on", "with", "as", "by", "an",
    "be", "at", "this", "from", "was", "is", "were", "are", "have", "has", "had", "will",
    "shall", "should", "may", "might", "could", "can", "i", "you", "he", "she", "they", "we",
    "which", "who", "what", "where", "when", "why", "how", "not", "up", "down", "all", "any",
    "each", "few", "more", "most", "some", "these", "those", "here", "there", "too", "very",
    "much", "so", "just", "like", "than", "about", "into", "after", "before", "during",
    "while", "such", "no", "yes", "or", "nor", "but",
];

/// Default stopwords as a HashSet.
pub static DEFAULT_STOPWORD_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_STOPWORDS.iter().map(|&s| s.to_string()).collect());

/// A fixed, immutable set of words excluded from substitution.
///
/// The set is shared via `Arc` and never mutated after construction, so it
/// is safe for unsynchronized concurrent reads.
#[derive(Clone, Debug)]
pub struct StopwordSet {
    words: Arc<HashSet<String>>,
}

impl StopwordSet {
    /// Create a stopword set with the default English word list.
    pub fn new() -> Self {
        StopwordSet {
            words: Arc::new(DEFAULT_STOPWORD_SET.clone()),
        }
    }

    /// Create a stopword set from a custom word list (stored lowercased).
    ///
    /// # Examples
    ///
    /// ```
    /// use parrot::analysis::stopword::StopwordSet;
    ///
    /// let stopwords = StopwordSet::from_words(vec!["foo", "Bar"]);
    /// assert!(stopwords.contains("BAR"));
    /// assert_eq!(stopwords.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        StopwordSet {
            words: Arc::new(words),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new()
    }
}
