//! The indexing stages: tokenize, filter, sort and group, compress.

pub mod filter;
pub mod grouper;
pub mod ranges;
pub mod tokenizer;

pub use filter::{StopWords, TokenFilter, DEFAULT_STOP_WORDS};
pub use grouper::{group_sorted, group_tokens, sort_tokens, WordGroup};
pub use ranges::{flatten_ranges, is_minimal, pages_to_ranges};
pub use tokenizer::{BoundaryPolicy, Tokenizer, TokenizerConfig, DEFAULT_DELIMITERS};
