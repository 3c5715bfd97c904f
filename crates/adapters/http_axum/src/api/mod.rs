//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod update;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;

use dashpush_app::ports::SnapshotStore;

use crate::state::AppState;

/// Largest accepted `/update` body.
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Build the API sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SnapshotStore + Send + Sync + 'static,
{
    Router::new().route(
        "/update",
        post(update::update::<S>).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
    )
}
