//! The word index and the indexer that builds it.

pub mod word_index;

pub use word_index::{IndexEntry, Indexer, WordIndex};
