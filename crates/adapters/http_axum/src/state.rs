//! Shared application state for axum handlers.

use std::sync::Arc;

use dashpush_app::ports::SnapshotStore;
use dashpush_app::services::snapshot_service::SnapshotService;

use crate::render::ViewConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the snapshot store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Guarded snapshot reads and writes.
    pub snapshot_service: Arc<SnapshotService<S>>,
    /// Theme and refresh settings for rendered pages.
    pub view: Arc<ViewConfig>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            snapshot_service: Arc::clone(&self.snapshot_service),
            view: Arc::clone(&self.view),
        }
    }
}

impl<S> AppState<S>
where
    S: SnapshotStore + Send + Sync + 'static,
{
    /// Create a new application state from a service and view settings.
    pub fn new(snapshot_service: SnapshotService<S>, view: ViewConfig) -> Self {
        Self {
            snapshot_service: Arc::new(snapshot_service),
            view: Arc::new(view),
        }
    }
}
