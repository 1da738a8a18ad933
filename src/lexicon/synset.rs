//! Synset: one recorded sense of a word.

use serde::{Deserialize, Serialize};

/// An ordered group of lemmas recorded for one sense of a word.
///
/// The first lemma is the canonical surface form for the sense. Lemmas
/// never contain whitespace: multi-word entries are stored with `_` joining
/// the parts, so substituting a lemma for a token can never change the
/// whitespace token count of the text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Synset {
    lemmas: Vec<String>,
}

impl Synset {
    /// Create a synset from lemmas, dropping empties and normalizing any
    /// internal whitespace to `_`.
    pub fn new<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lemmas = lemmas
            .into_iter()
            .map(|s| normalize_lemma(&s.into()))
            .filter(|s| !s.is_empty())
            .collect();
        Synset { lemmas }
    }

    /// The canonical (first) lemma of this synset, if any.
    pub fn canonical(&self) -> Option<&str> {
        self.lemmas.first().map(|s| s.as_str())
    }

    /// All lemmas, canonical first.
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Get the number of lemmas.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// Check if the synset has no lemmas.
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

/// Join whitespace-separated parts of a lemma with `_`.
fn normalize_lemma(lemma: &str) -> String {
    lemma.split_whitespace().collect::<Vec<_>>().join("_")
}
