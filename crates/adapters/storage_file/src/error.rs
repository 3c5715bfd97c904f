//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use dashpush_domain::error::DashError;

/// Errors originating from the file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    /// Reading, writing or renaming the snapshot file failed.
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be (de)serialized.
    #[error("invalid snapshot document in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<FileStoreError> for DashError {
    fn from(err: FileStoreError) -> Self {
        Self::Storage(Box::new(err))
    }
}
