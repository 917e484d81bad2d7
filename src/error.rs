//! Error taxonomy for the ingestion pipeline.
//!
//! Every variant is fatal: the run aborts on the first error, with whatever
//! was already uploaded left in place (no rollback across the batch).

use std::path::PathBuf;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Missing or invalid local configuration (e.g. the API credential).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote document-library service rejected a call, or the call
    /// never completed (transport failure).
    #[error("remote service error during {stage}: {message}")]
    RemoteService {
        stage: &'static str,
        message: String,
    },

    /// A local file or directory could not be read.
    #[error("local I/O error for {path}: {source}")]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub fn remote(stage: &'static str, message: impl Into<String>) -> Self {
        IngestError::RemoteService {
            stage,
            message: message.into(),
        }
    }

    pub fn local_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestError::LocalIo {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
