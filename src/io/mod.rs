//! Input and output at the edges of the pipeline.

pub mod reader;
pub mod report;

pub use reader::{line_number, lines_from_str, read_lines};
pub use report::{render, write_report, ReportFormat, ReportOptions, DEFAULT_WORD_WIDTH};
