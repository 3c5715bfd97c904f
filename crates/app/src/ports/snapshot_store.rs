//! Snapshot store port — persistence of the single current snapshot.

use std::future::Future;

use dashpush_domain::error::DashError;
use dashpush_domain::snapshot::Snapshot;

/// Holds at most one [`Snapshot`].
///
/// Implementations must allow many concurrent `get` calls and make every
/// `put` replace the previous snapshot wholesale (last write wins).
pub trait SnapshotStore {
    /// Return a copy of the current snapshot, or `None` before the first write.
    fn get(&self) -> impl Future<Output = Result<Option<Snapshot>, DashError>> + Send;

    /// Durably replace the current snapshot.
    fn put(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), DashError>> + Send;
}

impl<T: SnapshotStore + Send + Sync> SnapshotStore for std::sync::Arc<T> {
    fn get(&self) -> impl Future<Output = Result<Option<Snapshot>, DashError>> + Send {
        (**self).get()
    }

    fn put(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), DashError>> + Send {
        (**self).put(snapshot)
    }
}
