//! Memoizing lexicon wrapper.
//!
//! Candidate lookups are pure for a fixed lexicon snapshot, so their
//! results can be cached keyed by the (cleaned) query word. File-backed
//! lexicons pay the lookup cost once per distinct word instead of once per
//! occurrence.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::lexicon::synset::Synset;

/// A lexicon wrapper that memoizes candidate lookups.
#[derive(Debug)]
pub struct CachedLexicon<L: Lexicon> {
    inner: L,
    candidates: RwLock<AHashMap<String, Vec<String>>>,
}

impl<L: Lexicon> CachedLexicon<L> {
    /// Wrap a lexicon with a candidate cache.
    pub fn new(inner: L) -> Self {
        CachedLexicon {
            inner,
            candidates: RwLock::new(AHashMap::new()),
        }
    }

    /// Number of cached candidate sets.
    pub fn cached_len(&self) -> usize {
        self.candidates.read().len()
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        self.candidates.write().clear();
    }

    /// Get a reference to the wrapped lexicon.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Lexicon> Lexicon for CachedLexicon<L> {
    fn synsets(&self, word: &str) -> Result<Vec<Synset>> {
        // Synset views are rare (CLI introspection only); not cached.
        self.inner.synsets(word)
    }

    fn candidates(&self, word: &str) -> Result<Vec<String>> {
        if let Some(cached) = self.candidates.read().get(word) {
            return Ok(cached.clone());
        }

        let computed = self.inner.candidates(word)?;
        self.candidates
            .write()
            .insert(word.to_string(), computed.clone());
        Ok(computed)
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::memory::InMemoryLexicon;

    fn sample() -> CachedLexicon<InMemoryLexicon> {
        CachedLexicon::new(InMemoryLexicon::from_entries([(
            "cat",
            vec![vec!["feline"], vec!["tomcat"]],
        )]))
    }

    #[test]
    fn test_cache_fills_on_lookup() {
        let lexicon = sample();
        assert_eq!(lexicon.cached_len(), 0);

        let first = lexicon.candidates("cat").unwrap();
        assert_eq!(first, ["feline", "tomcat"]);
        assert_eq!(lexicon.cached_len(), 1);

        let second = lexicon.candidates("cat").unwrap();
        assert_eq!(first, second);
        assert_eq!(lexicon.cached_len(), 1);
    }

    #[test]
    fn test_misses_are_cached_too() {
        let lexicon = sample();
        assert!(lexicon.candidates("dog").unwrap().is_empty());
        assert_eq!(lexicon.cached_len(), 1);
    }

    #[test]
    fn test_clear() {
        let lexicon = sample();
        lexicon.candidates("cat").unwrap();
        lexicon.clear();
        assert_eq!(lexicon.cached_len(), 0);
    }
}
