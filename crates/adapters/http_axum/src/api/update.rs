//! `POST /update` — push a new snapshot.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dashpush_app::ports::SnapshotStore;
use dashpush_domain::snapshot::Payload;
use dashpush_domain::time::to_iso;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned for an accepted write.
#[derive(Serialize)]
pub struct UpdateBody {
    pub success: bool,
    pub timestamp: String,
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<UpdateBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /update`
///
/// `text/html` bodies are stored verbatim; anything else is parsed as a
/// JSON object.
pub async fn update<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    S: SnapshotStore + Send + Sync + 'static,
{
    let credential = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let text = String::from_utf8_lossy(&body).into_owned();
    let payload = if is_html(&headers) {
        Payload::Html(text)
    } else {
        Payload::Text(text)
    };

    let ack = state.snapshot_service.update(credential, payload).await?;
    Ok(UpdateResponse::Ok(Json(UpdateBody {
        success: true,
        timestamp: to_iso(ack.timestamp),
    })))
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("text/html"))
}
