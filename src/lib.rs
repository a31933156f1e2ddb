//! Word-occurrence index for text documents.
//!
//! For every distinct word in a document, records the lines it appears on,
//! compressed into closed ranges:
//!
//! ```text
//! brown                : [2,2]
//! fox                  : [1,2]
//! quick                : [1,2]
//! ```
//!
//! The pipeline is tokenize → filter → sort → group → compress. All stages
//! run in memory over the fully read document.

pub mod engine;
pub mod index;
pub mod io;
pub mod types;

use std::path::Path;

pub use engine::{
    flatten_ranges, group_sorted, group_tokens, is_minimal, pages_to_ranges, sort_tokens,
    BoundaryPolicy, StopWords, TokenFilter, Tokenizer, TokenizerConfig, WordGroup,
    DEFAULT_DELIMITERS, DEFAULT_STOP_WORDS,
};
pub use index::{IndexEntry, Indexer, WordIndex};
pub use io::{
    line_number, lines_from_str, read_lines, render, write_report, ReportFormat, ReportOptions,
    DEFAULT_WORD_WIDTH,
};
pub use types::{IndexError, IndexResult, Line, LineRange, Token};

/// Index the file at `path` and print the text report to stdout.
pub fn create_index(path: impl AsRef<Path>) -> IndexResult<()> {
    create_index_with(
        path,
        &Indexer::new(),
        &ReportOptions::default(),
        std::io::stdout().lock(),
    )
}

/// Index the file at `path` and write the report to `out`.
///
/// Nothing is written unless the file was read and the report fully
/// rendered.
pub fn create_index_with(
    path: impl AsRef<Path>,
    indexer: &Indexer,
    options: &ReportOptions,
    out: impl std::io::Write,
) -> IndexResult<()> {
    let lines = read_lines(path)?;
    let index = indexer.index_lines(&lines);
    log::info!("indexed {} distinct words", index.len());
    write_report(&index, options, out)
}
