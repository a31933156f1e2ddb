//! Lines of input and the word tokens extracted from them.

/// A single line of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: u32,
    /// Raw text with the line terminator stripped.
    pub text: String,
}

impl Line {
    /// Create a line from its number and text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// A normalized word together with the line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub line: u32,
}

impl Token {
    /// Create a token. The word is expected to be normalized already.
    pub fn new(word: impl Into<String>, line: u32) -> Self {
        Self {
            word: word.into(),
            line,
        }
    }
}
