//! Token filtering: drops empty words and stop words.

use std::collections::HashSet;

use crate::types::Token;

/// Words excluded from the index by default.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "the", "to", "with", "is", "are", "be", "was", "were", "these", "those", "who", "what",
    "where", "why", "how", "which",
];

/// A fixed set of lowercase stop words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// A set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from arbitrary words. Words are lowercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether `word` is a stop word. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }
}

/// Applies the not-empty and not-stop-word predicates to tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    stop_words: StopWords,
}

impl TokenFilter {
    /// Filter that drops empty words and the given stop words.
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// The stop-word set this filter owns.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// The token's word is non-empty.
    pub fn is_not_empty(&self, token: &Token) -> bool {
        !token.word.is_empty()
    }

    /// The token's word is not in the stop-word set.
    pub fn is_not_stop_word(&self, token: &Token) -> bool {
        !self.stop_words.contains(&token.word)
    }

    /// Whether the token passes both predicates.
    pub fn accepts(&self, token: &Token) -> bool {
        self.is_not_empty(token) && self.is_not_stop_word(token)
    }

    /// Keep only accepted tokens, in their original order.
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter().filter(|t| self.accepts(t)).collect()
    }
}
