use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading sources, writing the store, or reading aggregates.
#[derive(Debug, Error)]
pub enum Error {
    /// A keyed lookup or aggregate matched zero rows.
    #[error("not found: {0}")]
    NotFound(String),

    /// A required field or geometry is missing or unusable in an input source.
    #[error("malformed source {source_name}: {reason}")]
    MalformedSource { source_name: String, reason: String },

    /// The store rejected a batch; the enclosing transaction was rolled back.
    #[error("{operation} failed for {target}: {source}")]
    WriteFailure {
        operation: &'static str,
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Any other store error (schema, connection, reads).
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// A stored geometry blob could not be encoded or decoded.
    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wraps any failure raised while ingesting one city.
    #[error("ingesting {city}: {source}")]
    Ingest {
        city: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedSource { source_name: source_name.into(), reason: reason.into() }
    }

    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound(what.into())
    }

    /// Returns true for `NotFound`, looking through `Ingest` wrappers.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Ingest { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
