//! Sorting tokens by word and grouping their line numbers.

use crate::types::Token;

/// Every line a word was seen on, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub word: String,
    pub lines: Vec<u32>,
}

/// Stable sort by word. Tokens with equal words keep their input order.
pub fn sort_tokens(mut tokens: Vec<Token>) -> Vec<Token> {
    tokens.sort_by(|a, b| a.word.cmp(&b.word));
    tokens
}

/// Merge runs of equal words in an already sorted token list.
///
/// Single linear pass; a word that appears in two separate runs (input not
/// sorted) yields two groups.
pub fn group_sorted(tokens: Vec<Token>) -> Vec<WordGroup> {
    let mut groups: Vec<WordGroup> = Vec::new();

    for token in tokens {
        match groups.last_mut() {
            Some(group) if group.word == token.word => group.lines.push(token.line),
            _ => groups.push(WordGroup {
                word: token.word,
                lines: vec![token.line],
            }),
        }
    }

    groups
}

/// Sort then group.
pub fn group_tokens(tokens: Vec<Token>) -> Vec<WordGroup> {
    group_sorted(sort_tokens(tokens))
}
