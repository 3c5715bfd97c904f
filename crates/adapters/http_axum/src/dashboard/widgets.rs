//! Widget pages.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use dashpush_app::ports::SnapshotStore;
use dashpush_domain::widget::WidgetKind;

use crate::render::{NotFoundPage, WidgetPage, render_not_found, render_widget};
use crate::state::AppState;

/// Possible responses from the widget endpoint.
pub enum WidgetResponse {
    Ok(WidgetPage),
    NotFound(NotFoundPage),
}

impl IntoResponse for WidgetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => page.into_response(),
            Self::NotFound(page) => page.into_response(),
        }
    }
}

/// `GET /{kind}` — render one widget from the current snapshot.
pub async fn widget<S>(
    State(state): State<AppState<S>>,
    Path(kind): Path<String>,
) -> WidgetResponse
where
    S: SnapshotStore + Send + Sync + 'static,
{
    let Ok(kind) = kind.parse::<WidgetKind>() else {
        tracing::debug!(kind = %kind, "unknown widget requested");
        return WidgetResponse::NotFound(render_not_found(&kind, &state.view));
    };
    let snapshot = state.snapshot_service.current().await;
    WidgetResponse::Ok(render_widget(kind, snapshot.as_ref(), &state.view))
}
