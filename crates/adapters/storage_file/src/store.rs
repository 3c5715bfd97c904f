//! [`SnapshotStore`] backed by a JSON file and an in-memory cache.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use dashpush_app::ports::SnapshotStore;
use dashpush_domain::error::DashError;
use dashpush_domain::snapshot::Snapshot;

use crate::error::FileStoreError;

/// File-backed snapshot store.
///
/// Reads are served from memory and never block each other. A write holds
/// the lock for the whole flush, so concurrent writers are serialized and
/// the last one to acquire the lock wins.
pub struct FileSnapshotStore {
    path: PathBuf,
    cache: RwLock<Option<Snapshot>>,
}

impl FileSnapshotStore {
    /// Open the store at `path`, loading any snapshot already on disk.
    ///
    /// A missing file means no snapshot has been written yet. A file that
    /// cannot be read or parsed is logged and treated the same way; the
    /// next write replaces it.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = match load(&path).await {
            Ok(Some(snapshot)) => {
                tracing::info!(path = %path.display(), received_at = %snapshot.received_at, "loaded snapshot");
                Some(snapshot)
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "no snapshot on disk yet");
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %DashError::from(err).detail(), "ignoring unreadable snapshot");
                None
            }
        };

        Self {
            path,
            cache: RwLock::new(initial),
        }
    }

    /// Location of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, snapshot: &Snapshot) -> Result<(), FileStoreError> {
        let body = serde_json::to_vec_pretty(snapshot).map_err(|source| FileStoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| FileStoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp = temp_path(&self.path);
        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|source| FileStoreError::Io {
                path: tmp.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(FileStoreError::Io {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    async fn get(&self) -> Result<Option<Snapshot>, DashError> {
        Ok(self.cache.read().await.clone())
    }

    async fn put(&self, snapshot: Snapshot) -> Result<(), DashError> {
        let mut slot = self.cache.write().await;
        self.flush(&snapshot).await?;
        tracing::debug!(path = %self.path.display(), "snapshot flushed");
        *slot = Some(snapshot);
        Ok(())
    }
}

async fn load(path: &Path) -> Result<Option<Snapshot>, FileStoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(FileStoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| FileStoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Sibling path used while writing, e.g. `dashboard.json.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
