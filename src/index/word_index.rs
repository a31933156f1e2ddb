//! Word index mapping each distinct word to the line ranges it occurs on.

use serde::Serialize;

use crate::engine::{group_tokens, pages_to_ranges, TokenFilter, Tokenizer};
use crate::io::reader::lines_from_str;
use crate::types::{IndexResult, Line, LineRange};

/// One word and the ranges of lines it appears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub word: String,
    pub ranges: Vec<LineRange>,
}

/// The finished index: entries sorted by word, one entry per word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordIndex {
    entries: Vec<IndexEntry>,
}

impl WordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, sorted by word.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Look up a word. The query is lowercased before searching.
    pub fn get(&self, word: &str) -> Option<&[LineRange]> {
        let key = word.to_lowercase();
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(key.as_str()))
            .ok()
            .map(|pos| self.entries[pos].ranges.as_slice())
    }

    /// Whether the word (in any case) is in the index.
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Iterate over entries in word order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a WordIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Runs the indexing stages over a document.
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    tokenizer: Tokenizer,
    filter: TokenFilter,
}

impl Indexer {
    /// Indexer with the default tokenizer and stop-word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexer with an explicit tokenizer and filter.
    pub fn with_parts(tokenizer: Tokenizer, filter: TokenFilter) -> Self {
        Self { tokenizer, filter }
    }

    /// The tokenizer used for stage 1.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The filter used for stage 2.
    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    /// Build the index from numbered lines.
    pub fn index_lines(&self, lines: &[Line]) -> WordIndex {
        let tokens = self.tokenizer.tokenize_lines(lines);
        log::debug!("tokenized {} lines into {} tokens", lines.len(), tokens.len());

        let tokens = self.filter.filter(tokens);
        log::debug!("{} tokens left after filtering", tokens.len());

        let groups = group_tokens(tokens);
        log::debug!("grouped into {} distinct words", groups.len());

        let entries = groups
            .into_iter()
            .map(|group| IndexEntry {
                ranges: pages_to_ranges(&group.lines),
                word: group.word,
            })
            .collect();

        WordIndex { entries }
    }

    /// Build the index from in-memory text, numbering lines from 1.
    pub fn index_text(&self, text: &str) -> IndexResult<WordIndex> {
        Ok(self.index_lines(&lines_from_str(text)?))
    }
}
