//! Dashboard index — widget directory and last update time.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use dashpush_app::ports::SnapshotStore;

use crate::render::render_index;
use crate::state::AppState;

/// `GET /` — the stored HTML document when the last push was HTML,
/// otherwise the status page.
pub async fn index<S>(State(state): State<AppState<S>>) -> Response
where
    S: SnapshotStore + Send + Sync + 'static,
{
    let snapshot = state.snapshot_service.current().await;
    if let Some(html) = snapshot.as_ref().and_then(|snapshot| snapshot.html()) {
        return Html(html.to_string()).into_response();
    }
    render_index(snapshot.as_ref(), &state.view).into_response()
}
