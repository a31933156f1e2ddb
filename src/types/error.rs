//! Error types for the indexing pipeline.

use std::path::PathBuf;

/// Errors that can occur while reading a document or writing its report.
///
/// The indexing stages themselves never fail; every error here comes from
/// the I/O edges of the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document has more than {} lines", u32::MAX)]
    TooManyLines,

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IndexResult<T> = Result<T, IndexError>;
