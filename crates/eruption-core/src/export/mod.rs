//! Post-submission views: recap table and JSON snapshot.

mod recap;
mod snapshot;

pub use recap::*;
pub use snapshot::*;

use thiserror::Error;

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export file name is not a plain file name: {0}")]
    UnsafeFileName(String),

    #[error("Export is not valid UTF-8: {0}")]
    Encoding(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
