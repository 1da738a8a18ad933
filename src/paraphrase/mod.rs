//! Paraphrasing pipeline for Parrot.
//!
//! Control flow: raw text -> tokenize on whitespace -> for each token:
//! clean -> stopword/empty check -> lexicon lookup -> level-based selection
//! -> substitute-or-passthrough -> rejoin with single spaces.

pub mod level;
pub mod paraphraser;
pub mod selector;

// Re-export commonly used types
pub use level::DifficultyLevel;
pub use paraphraser::{ParaphraseSet, Paraphraser};
pub use selector::SynonymSelector;
