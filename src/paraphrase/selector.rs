//! Synonym selection.
//!
//! The selector is a total function: every input, including punctuation-only
//! tokens, stopwords, unknown words, and lexicon failures, has a defined
//! fallback (return the original token unchanged). It never errors.

use std::sync::Arc;

use log::debug;
use rand::Rng;

use crate::analysis::clean::WordCleaner;
use crate::analysis::stopword::StopwordSet;
use crate::lexicon::Lexicon;
use crate::paraphrase::level::DifficultyLevel;

/// Picks a replacement word for a token according to a difficulty level.
///
/// The random source is an explicit parameter so callers can pin outputs
/// with a seeded generator. `Easy` never consumes entropy.
///
/// # Substitution policy
///
/// When a substitution happens, the token's stripped leading and trailing
/// punctuation is reattached to the replacement, and a leading-uppercase
/// core carries its casing onto it ("Cat," -> "Feline,"). Fallbacks return
/// the original token verbatim.
#[derive(Clone)]
pub struct SynonymSelector {
    lexicon: Arc<dyn Lexicon>,
    stopwords: StopwordSet,
    cleaner: WordCleaner,
}

impl SynonymSelector {
    /// Create a selector with the default stopword set.
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        SynonymSelector {
            lexicon,
            stopwords: StopwordSet::new(),
            cleaner: WordCleaner::new(),
        }
    }

    /// Replace the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Get the lexicon this selector draws from.
    pub fn lexicon(&self) -> &Arc<dyn Lexicon> {
        &self.lexicon
    }

    /// Select a replacement for `word` at the given level, or return `word`
    /// unchanged.
    pub fn select<R: Rng + ?Sized>(
        &self,
        word: &str,
        level: DifficultyLevel,
        rng: &mut R,
    ) -> String {
        let cleaned = self.cleaner.clean(word);

        // Skip stopwords and empty words
        if cleaned.is_empty() || self.stopwords.contains(&cleaned) {
            return word.to_string();
        }

        let candidates = match self.lexicon.candidates(&cleaned) {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!("lexicon lookup failed for '{cleaned}': {e}");
                return word.to_string();
            }
        };
        if candidates.is_empty() {
            return word.to_string();
        }

        let replacement = match level {
            DifficultyLevel::Easy => &candidates[0],
            DifficultyLevel::Medium if candidates.len() >= 2 => {
                &candidates[rng.random_range(1..candidates.len())]
            }
            DifficultyLevel::Hard if candidates.len() >= 3 => {
                &candidates[rng.random_range(2..candidates.len())]
            }
            // Too few candidates for the level
            _ => return word.to_string(),
        };

        self.rewrap(word, replacement)
    }

    /// Reattach the original token's affixes and leading case to a
    /// replacement word.
    fn rewrap(&self, original: &str, replacement: &str) -> String {
        let (prefix, core, suffix) = self.cleaner.split_affixes(original);

        let cased = if core.chars().next().is_some_and(char::is_uppercase) {
            capitalize(replacement)
        } else {
            replacement.to_string()
        };

        format!("{prefix}{cased}{suffix}")
    }
}

impl std::fmt::Debug for SynonymSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymSelector")
            .field("lexicon", &self.lexicon.name())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::lexicon::memory::InMemoryLexicon;

    fn selector() -> SynonymSelector {
        let lexicon = InMemoryLexicon::from_entries([
            ("cat", vec![vec!["feline"], vec!["tomcat"], vec!["pussycat"]]),
            ("big", vec![vec!["large"], vec!["huge"]]),
            ("run", vec![vec!["sprint"]]),
        ]);
        SynonymSelector::new(Arc::new(lexicon))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_easy_takes_most_common() {
        let selector = selector();
        let mut rng = rng();
        assert_eq!(
            selector.select("cat", DifficultyLevel::Easy, &mut rng),
            "feline"
        );
    }

    #[test]
    fn test_easy_is_deterministic() {
        let selector = selector();
        let mut rng = rng();
        let first = selector.select("cat", DifficultyLevel::Easy, &mut rng);
        for _ in 0..50 {
            assert_eq!(selector.select("cat", DifficultyLevel::Easy, &mut rng), first);
        }
    }

    #[test]
    fn test_medium_never_draws_most_common() {
        let selector = selector();
        let mut rng = rng();
        for _ in 0..200 {
            let picked = selector.select("cat", DifficultyLevel::Medium, &mut rng);
            assert!(picked == "tomcat" || picked == "pussycat", "got {picked}");
        }
    }

    #[test]
    fn test_hard_skips_two_most_common() {
        let selector = selector();
        let mut rng = rng();
        for _ in 0..200 {
            assert_eq!(
                selector.select("cat", DifficultyLevel::Hard, &mut rng),
                "pussycat"
            );
        }
    }

    #[test]
    fn test_too_few_candidates_fall_back() {
        let selector = selector();
        let mut rng = rng();
        // "run" has one candidate: medium and hard pass it through.
        assert_eq!(selector.select("run", DifficultyLevel::Medium, &mut rng), "run");
        assert_eq!(selector.select("run", DifficultyLevel::Hard, &mut rng), "run");
        // "big" has two: hard still passes through.
        assert_eq!(selector.select("big", DifficultyLevel::Hard, &mut rng), "big");
    }

    #[test]
    fn test_stopword_passthrough() {
        let selector = selector();
        let mut rng = rng();
        for level in DifficultyLevel::ALL {
            assert_eq!(selector.select("the", level, &mut rng), "the");
            assert_eq!(selector.select("The", level, &mut rng), "The");
        }
    }

    #[test]
    fn test_empty_and_punctuation_passthrough() {
        let selector = selector();
        let mut rng = rng();
        for level in DifficultyLevel::ALL {
            assert_eq!(selector.select("", level, &mut rng), "");
            assert_eq!(selector.select("!!!", level, &mut rng), "!!!");
        }
    }

    #[test]
    fn test_unknown_word_passthrough() {
        let selector = selector();
        let mut rng = rng();
        for level in DifficultyLevel::ALL {
            assert_eq!(selector.select("zyzzyva", level, &mut rng), "zyzzyva");
        }
    }

    #[test]
    fn test_punctuation_reattached_on_substitution() {
        let selector = selector();
        let mut rng = rng();
        assert_eq!(
            selector.select("cat!", DifficultyLevel::Easy, &mut rng),
            "feline!"
        );
        assert_eq!(
            selector.select("(cat)", DifficultyLevel::Easy, &mut rng),
            "(feline)"
        );
    }

    #[test]
    fn test_leading_case_carried_on_substitution() {
        let selector = selector();
        let mut rng = rng();
        assert_eq!(
            selector.select("Cat,", DifficultyLevel::Easy, &mut rng),
            "Feline,"
        );
        // Fallback keeps the original verbatim, casing included.
        assert_eq!(
            selector.select("Zyzzyva,", DifficultyLevel::Easy, &mut rng),
            "Zyzzyva,"
        );
    }

    #[test]
    fn test_lexicon_failure_falls_back() {
        struct FailingLexicon;
        impl Lexicon for FailingLexicon {
            fn synsets(
                &self,
                _word: &str,
            ) -> crate::error::Result<Vec<crate::lexicon::synset::Synset>> {
                Err(crate::error::ParrotError::lexicon("backend unavailable"))
            }
            fn name(&self) -> &'static str {
                "failing"
            }
        }

        let selector = SynonymSelector::new(Arc::new(FailingLexicon));
        let mut rng = rng();
        assert_eq!(selector.select("cat", DifficultyLevel::Easy, &mut rng), "cat");
    }
}
