//! Word cleaning for lexicon lookup.
//!
//! Lookup keys must be bare words: punctuation attached to a token
//! ("running!", "(cat") would never match a lexicon entry. The cleaner
//! strips those characters, and also exposes the stripped affixes so a
//! substituted word can be rewrapped in them.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex literal"));

/// Removes punctuation from tokens so they can be used as lookup keys.
///
/// `clean` is deterministic and pure: the same input always produces the
/// same output and nothing else is touched. Both input and output may be
/// empty.
#[derive(Clone, Debug, Default)]
pub struct WordCleaner;

impl WordCleaner {
    /// Create a new word cleaner.
    pub fn new() -> Self {
        WordCleaner
    }

    /// Remove every character that is not a word character or whitespace.
    pub fn clean(&self, token: &str) -> String {
        NON_WORD.replace_all(token, "").into_owned()
    }

    /// Split a token into leading punctuation, core, and trailing punctuation.
    ///
    /// The core runs from the first to the last word character; interior
    /// punctuation ("don't") stays inside the core. A token with no word
    /// characters has an empty core and is returned entirely as prefix.
    pub fn split_affixes<'a>(&self, token: &'a str) -> (&'a str, &'a str, &'a str) {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';

        let Some(first) = token.find(is_word) else {
            return (token, "", "");
        };
        let last_start = token.rfind(is_word).unwrap_or(first);
        let last_end = last_start
            + token[last_start..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(0);

        (&token[..first], &token[first..last_end], &token[last_end..])
    }
}
