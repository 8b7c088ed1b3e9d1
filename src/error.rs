use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`Catalog`](crate::Catalog) operations.
///
/// Missing ids are not errors; lookups report them as `None` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The operation needs more records than the catalog holds.
    #[error("catalog holds {actual} records but at least {required} are required")]
    NotEnoughRecords { required: usize, actual: usize },
}

/// Errors raised while a [`Loader`](crate::Loader) produces the initial records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read movie source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed movie source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the bundled [`Reporter`](crate::Reporter) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("report buffer poisoned")]
    BufferPoisoned,
    #[error("failed to render movie: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialize(err.to_string())
    }
}
