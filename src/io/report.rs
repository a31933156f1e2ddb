//! Rendering a word index as a text or JSON report.

use std::fmt::Write as _;
use std::io::Write;

use crate::index::WordIndex;
use crate::types::IndexResult;

/// Column width the word is padded to in text reports.
pub const DEFAULT_WORD_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `word                 : [1,2],[4,4]`, one line per word.
    #[default]
    Text,
    /// Pretty-printed JSON array of `{ "word", "ranges" }` objects.
    Json,
}

/// How a report is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Words shorter than this are left-aligned and padded. Longer words
    /// are written in full.
    pub word_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            word_width: DEFAULT_WORD_WIDTH,
        }
    }
}

/// Render the whole report into a string.
pub fn render(index: &WordIndex, options: &ReportOptions) -> IndexResult<String> {
    match options.format {
        ReportFormat::Text => Ok(render_text(index, options.word_width)),
        ReportFormat::Json => {
            let mut out = serde_json::to_string_pretty(index)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(index: &WordIndex, width: usize) -> String {
    let mut out = String::new();
    for entry in index {
        let ranges: Vec<String> = entry.ranges.iter().map(|r| r.to_string()).collect();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<width$} : {}",
            entry.word,
            ranges.join(","),
            width = width
        );
    }
    out
}

/// Render the report, then write it to `out` in one call.
pub fn write_report(
    index: &WordIndex,
    options: &ReportOptions,
    mut out: impl Write,
) -> IndexResult<()> {
    let report = render(index, options)?;
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
