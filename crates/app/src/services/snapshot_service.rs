//! Snapshot service — authorized writes and lenient reads of the snapshot.

use dashpush_domain::error::DashError;
use dashpush_domain::snapshot::{Payload, Snapshot, SnapshotContent};
use dashpush_domain::time::{Timestamp, now};

use crate::guard::IngressGuard;
use crate::ports::SnapshotStore;

/// Acknowledgement of an accepted write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    /// Receipt time stamped on the stored snapshot.
    pub timestamp: Timestamp,
}

/// Application service guarding and persisting the dashboard snapshot.
pub struct SnapshotService<S> {
    store: S,
    guard: IngressGuard,
}

impl<S: SnapshotStore> SnapshotService<S> {
    /// Create a new service backed by the given store and guard.
    pub fn new(store: S, guard: IngressGuard) -> Self {
        Self { store, guard }
    }

    /// Replace the current snapshot with `payload`.
    ///
    /// The credential is checked before anything else, and the payload is
    /// fully parsed before the store is touched, so a rejected write never
    /// alters the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Unauthorized`] for a bad credential,
    /// [`DashError::MalformedPayload`] when the payload does not parse, or a
    /// storage error propagated from the store.
    pub async fn update(&self, credential: Option<&str>, payload: Payload) -> Result<Ack, DashError> {
        if let Err(err) = self.guard.check(credential) {
            tracing::warn!("rejected snapshot update with bad credential");
            return Err(err);
        }

        let content = payload.into_content()?;
        let kind = match &content {
            SnapshotContent::Metrics(metrics) => {
                tracing::debug!(metrics = metrics.len(), "parsed metrics payload");
                "metrics"
            }
            SnapshotContent::Html(html) => {
                tracing::debug!(bytes = html.len(), "received html payload");
                "html"
            }
        };

        let timestamp = now();
        self.store.put(Snapshot::new(content, timestamp)).await?;
        tracing::info!(kind, %timestamp, "snapshot updated");

        Ok(Ack { timestamp })
    }

    /// Return the current snapshot, or `None` if there is none yet.
    ///
    /// A store that cannot be read is treated the same as an empty one.
    pub async fn current(&self) -> Option<Snapshot> {
        match self.store.get().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err.detail(), "snapshot unreadable, treating as absent");
                None
            }
        }
    }
}
