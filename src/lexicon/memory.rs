//! In-memory synonym lexicon with JSON file loading.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error::{ParrotError, Result};
use crate::lexicon::Lexicon;
use crate::lexicon::synset::Synset;

/// Inflection suffixes tried, longest first, when a word has no direct entry.
const INFLECTION_SUFFIXES: &[&str] = &["ies", "ied", "ing", "es", "ed", "s"];

/// An in-memory synonym lexicon.
///
/// Maps lowercased words to their synsets, in commonality order (most
/// common sense first). When a word has no direct entry, lookup retries
/// with common inflection suffixes stripped, so "cats" and "running" find
/// the entries for "cat" and "runn"-less bases where one exists.
///
/// # File format
///
/// A JSON object mapping each word to an array of synsets, each synset an
/// array of lemmas:
///
/// ```json
/// {
///   "cat": [["feline", "felid"], ["tomcat"], ["pussycat"]]
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryLexicon {
    entries: HashMap<String, Vec<Synset>>,
}

impl InMemoryLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        InMemoryLexicon {
            entries: HashMap::new(),
        }
    }

    /// Build a lexicon from (word, synset lemma lists) entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Vec<S>>)>,
        S: Into<String>,
    {
        let mut lexicon = Self::new();
        for (word, groups) in entries {
            lexicon.insert(word, groups);
        }
        lexicon
    }

    /// Load a lexicon from a JSON file.
    ///
    /// See the type-level documentation for the expected format.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParrotError::lexicon(format!(
                "Failed to read lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content).map_err(|e| {
            ParrotError::parse(format!(
                "Failed to parse lexicon JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a lexicon from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Vec<String>>> = serde_json::from_str(content)?;
        let lexicon = Self::from_entries(raw);
        debug!("loaded lexicon with {} entries", lexicon.len());
        Ok(lexicon)
    }

    /// Insert a word with its synset lemma lists, replacing any prior entry.
    pub fn insert<S: Into<String>>(&mut self, word: S, groups: Vec<Vec<S>>) {
        let word = word.into().to_lowercase();
        let synsets = groups
            .into_iter()
            .map(Synset::new)
            .filter(|s| !s.is_empty())
            .collect();
        self.entries.insert(word, synsets);
    }

    /// Get the number of words with entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct lookup, no morphological fallback.
    fn direct(&self, word: &str) -> Option<&Vec<Synset>> {
        self.entries.get(word)
    }

    /// Strip one inflection suffix, longest first.
    ///
    /// The remaining base must keep at least three characters, otherwise
    /// short words would collapse ("is" -> "i").
    fn strip_inflection(word: &str) -> Option<&str> {
        for suffix in INFLECTION_SUFFIXES {
            if word.len() > suffix.len() + 2 && word.ends_with(suffix) {
                return Some(&word[..word.len() - suffix.len()]);
            }
        }
        None
    }
}

impl Lexicon for InMemoryLexicon {
    fn synsets(&self, word: &str) -> Result<Vec<Synset>> {
        let word = word.to_lowercase();

        if let Some(synsets) = self.direct(&word) {
            return Ok(synsets.clone());
        }

        // Morphological relative: retry with an inflection suffix stripped.
        if let Some(base) = Self::strip_inflection(&word)
            && let Some(synsets) = self.direct(base)
        {
            debug!("lexicon hit for '{word}' via base '{base}'");
            return Ok(synsets.clone());
        }

        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryLexicon {
        InMemoryLexicon::from_entries([
            ("cat", vec![vec!["feline"], vec!["tomcat"], vec!["pussycat"]]),
            ("big", vec![vec!["large", "sizable"], vec!["huge"]]),
        ])
    }

    #[test]
    fn test_direct_lookup() {
        let lexicon = sample();
        let candidates = lexicon.candidates("cat").unwrap();
        assert_eq!(candidates, ["feline", "tomcat", "pussycat"]);
    }

    #[test]
    fn test_unknown_word_is_empty() {
        let lexicon = sample();
        assert!(lexicon.candidates("zyzzyva").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = sample();
        assert_eq!(lexicon.candidates("Cat").unwrap().len(), 3);
        assert_eq!(lexicon.candidates("BIG").unwrap().len(), 2);
    }

    #[test]
    fn test_morphological_fallback() {
        let lexicon = sample();
        // "cats" has no entry; the "s" suffix is stripped and "cat" matches.
        let candidates = lexicon.candidates("cats").unwrap();
        assert_eq!(candidates, ["feline", "tomcat", "pussycat"]);
    }

    #[test]
    fn test_fallback_keeps_short_words_intact() {
        let lexicon = InMemoryLexicon::from_entries([("i", vec![vec!["me"]])]);
        // "is" must not be stripped down to "i".
        assert!(lexicon.candidates("is").unwrap().is_empty());
    }

    #[test]
    fn test_candidates_are_canonical_lemmas() {
        let lexicon = sample();
        // "sizable" is a secondary lemma of the first sense, not a candidate.
        assert_eq!(lexicon.candidates("big").unwrap(), ["large", "huge"]);
    }

    #[test]
    fn test_from_json_str() {
        let lexicon = InMemoryLexicon::from_json_str(
            r#"{"cat": [["feline"], ["tomcat"]], "sat": []}"#,
        )
        .unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.candidates("cat").unwrap(), ["feline", "tomcat"]);
        assert!(lexicon.candidates("sat").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = InMemoryLexicon::load_from_file("no/such/lexicon.json").unwrap_err();
        assert!(err.to_string().contains("no/such/lexicon.json"));
    }

    #[test]
    fn test_multi_word_lemmas_are_joined() {
        let lexicon =
            InMemoryLexicon::from_entries([("cat", vec![vec!["domestic cat"], vec!["tomcat"]])]);
        assert_eq!(lexicon.candidates("cat").unwrap()[0], "domestic_cat");
    }
}
