use std::io;

use thiserror::Error;

/// Errors surfaced while fetching rows from a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "csv")]
    #[error("malformed delimited data: {0}")]
    Csv(#[from] csv::Error),

    /// Source-specific fetch failure (e.g. an unreachable endpoint).
    #[error("fetch error: {0}")]
    Fetch(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
