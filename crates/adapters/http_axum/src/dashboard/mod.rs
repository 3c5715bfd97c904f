//! Server-side rendered HTML pages: the index and one page per widget.

pub mod index;
pub mod widgets;

use axum::Router;
use axum::routing::get;

use dashpush_app::ports::SnapshotStore;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SnapshotStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::index::<S>))
        .route("/{kind}", get(widgets::widget::<S>))
}
