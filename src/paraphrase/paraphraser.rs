//! Paraphraser: whitespace tokenization, per-token substitution, reassembly.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::paraphrase::level::DifficultyLevel;
use crate::paraphrase::selector::SynonymSelector;

/// The three paraphrased variants produced from one input text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaphraseSet {
    pub easy: String,
    pub medium: String,
    pub hard: String,
}

impl ParaphraseSet {
    /// Get the variant for a level.
    pub fn get(&self, level: DifficultyLevel) -> &str {
        match level {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Medium => &self.medium,
            DifficultyLevel::Hard => &self.hard,
        }
    }
}

/// Rewrites text by substituting synonyms token by token.
///
/// Tokens are whitespace-delimited; the original whitespace structure is
/// discarded and output tokens are rejoined with single spaces. There is no
/// cross-token state: each token's outcome depends only on its own value,
/// the level, and (for medium/hard) random draws independent of other
/// tokens. The number of output tokens always equals the number of input
/// tokens.
#[derive(Clone)]
pub struct Paraphraser {
    tokenizer: Arc<dyn Tokenizer>,
    selector: SynonymSelector,
}

impl Paraphraser {
    /// Create a paraphraser over the given lexicon, with the whitespace
    /// tokenizer and default stopwords.
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Paraphraser {
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            selector: SynonymSelector::new(lexicon),
        }
    }

    /// Create a paraphraser from a preconfigured selector.
    pub fn with_selector(selector: SynonymSelector) -> Self {
        Paraphraser {
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            selector,
        }
    }

    /// Get the selector used by this paraphraser.
    pub fn selector(&self) -> &SynonymSelector {
        &self.selector
    }

    /// Paraphrase `text` at one difficulty level.
    pub fn paraphrase<R: Rng + ?Sized>(
        &self,
        text: &str,
        level: DifficultyLevel,
        rng: &mut R,
    ) -> Result<String> {
        let tokens = self.tokenizer.tokenize(text)?;
        let words: Vec<String> = tokens
            .map(|token| self.selector.select(&token.text, level, rng))
            .collect();
        Ok(words.join(" "))
    }

    /// Paraphrase `text` at all three levels, sequentially (easy, medium,
    /// hard), each a full independent traversal of the token sequence.
    pub fn paraphrase_all<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<ParaphraseSet> {
        Ok(ParaphraseSet {
            easy: self.paraphrase(text, DifficultyLevel::Easy, rng)?,
            medium: self.paraphrase(text, DifficultyLevel::Medium, rng)?,
            hard: self.paraphrase(text, DifficultyLevel::Hard, rng)?,
        })
    }
}

impl std::fmt::Debug for Paraphraser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paraphraser")
            .field("tokenizer", &self.tokenizer.name())
            .field("selector", &self.selector)
            .finish()
    }
}
