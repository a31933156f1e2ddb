//! Line tokenizer: splits text on a fixed delimiter set and lowercases words.

use crate::types::{Line, Token};

/// Characters that separate words.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '.', ',', ';', '/', '\\', '-', '?', '!'];

/// What to do with a single character left after the last delimiter of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Emit it like any other word.
    #[default]
    KeepTrailing,
    /// Drop it. Matches the output of older indexers that lost the final
    /// character of a line when it stood alone after a delimiter.
    DropSingleTrailing,
}

/// Tokenizer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub delimiters: Vec<char>,
    pub boundary: BoundaryPolicy,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            boundary: BoundaryPolicy::default(),
        }
    }
}

/// Deterministic tokenizer for document lines.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the default delimiters and boundary policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with custom delimiters or boundary policy.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Shorthand for the default config with a different boundary policy.
    pub fn with_boundary(boundary: BoundaryPolicy) -> Self {
        Self::with_config(TokenizerConfig {
            boundary,
            ..TokenizerConfig::default()
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Whether `c` separates words.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.config.delimiters.contains(&c)
    }

    /// Tokenize one line into lowercase words, left to right.
    pub fn tokenize_line(&self, text: &str, line: u32) -> Vec<Token> {
        let mut tokens: Vec<Token> = text
            .split(|c: char| self.is_delimiter(c))
            .filter(|word| !word.is_empty())
            .map(|word| Token::new(word.to_lowercase(), line))
            .collect();

        if self.config.boundary == BoundaryPolicy::DropSingleTrailing
            && self.ends_with_lone_char(text)
        {
            tokens.pop();
        }

        tokens
    }

    /// Tokenize every line in order.
    pub fn tokenize_lines(&self, lines: &[Line]) -> Vec<Token> {
        let mut tokens = Vec::new();
        for line in lines {
            tokens.extend(self.tokenize_line(&line.text, line.number));
        }
        tokens
    }

    /// True when the line ends in `<delimiter><one non-delimiter char>`.
    fn ends_with_lone_char(&self, text: &str) -> bool {
        let mut rev = text.chars().rev();
        match (rev.next(), rev.next()) {
            (Some(last), Some(before)) => !self.is_delimiter(last) && self.is_delimiter(before),
            _ => false,
        }
    }
}
