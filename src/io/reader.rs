//! Reading documents into numbered lines.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::types::{IndexError, IndexResult, Line};

/// Read a file fully and split it into numbered lines.
///
/// `\n` and `\r\n` terminators are stripped. A terminator at the very end
/// of the file does not produce an extra empty line. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD; only a file that cannot be read
/// at all is an error.
pub fn read_lines(path: impl AsRef<Path>) -> IndexResult<Vec<Line>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!(
            "{} contains invalid UTF-8; replaced with U+FFFD",
            path.display()
        );
    }

    let lines = lines_from_str(&text)?;
    log::info!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split in-memory text into lines numbered from 1.
///
/// Fails only if the text has more lines than a `u32` line number can hold.
pub fn lines_from_str(text: &str) -> IndexResult<Vec<Line>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| Ok(Line::new(line_number(i)?, line)))
        .collect()
}

/// 1-based line number for the line at 0-based position `index`.
pub fn line_number(index: usize) -> IndexResult<u32> {
    index
        .checked_add(1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(IndexError::TooManyLines)
}
