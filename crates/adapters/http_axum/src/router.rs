//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use dashpush_app::ports::SnapshotStore;
use dashpush_domain::time::{now, to_iso};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the update API and the dashboard pages. A [`CatchPanicLayer`]
/// turns a panicking handler into a `500` so the server keeps serving, and a
/// [`TraceLayer`] logs each HTTP request/response at the `DEBUG` level using
/// the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: SnapshotStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    time: String,
}

async fn health_check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        time: to_iso(now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewConfig;
    use axum::body::Body;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use axum::http::{Request, StatusCode};
    use dashpush_app::guard::IngressGuard;
    use dashpush_app::services::snapshot_service::SnapshotService;
    use dashpush_domain::error::DashError;
    use dashpush_domain::snapshot::Snapshot;
    use http_body_util::BodyExt;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubStore {
        slot: Mutex<Option<Snapshot>>,
    }

    impl SnapshotStore for StubStore {
        async fn get(&self) -> Result<Option<Snapshot>, DashError> {
            Ok(self.slot.lock().unwrap().clone())
        }
        async fn put(&self, snapshot: Snapshot) -> Result<(), DashError> {
            *self.slot.lock().unwrap() = Some(snapshot);
            Ok(())
        }
    }

    struct FullDiskStore;

    impl SnapshotStore for FullDiskStore {
        async fn get(&self) -> Result<Option<Snapshot>, DashError> {
            Ok(None)
        }
        async fn put(&self, _snapshot: Snapshot) -> Result<(), DashError> {
            Err(DashError::Storage(Box::new(std::io::Error::other(
                "no space left on device",
            ))))
        }
    }

    fn test_state<S: SnapshotStore + Send + Sync + 'static>(store: S) -> AppState<S> {
        AppState::new(
            SnapshotService::new(store, IngressGuard::new("secret")),
            ViewConfig::default(),
        )
    }

    fn post_update(auth: Option<&str>, content_type: &str, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/update")
            .header(CONTENT_TYPE, content_type);
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state(StubStore::default()));

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert!(body["time"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn should_accept_authorized_json_update() {
        let app = build(test_state(StubStore::default()));

        let response = app
            .oneshot(post_update(
                Some("Bearer secret"),
                "application/json",
                r#"{"abandonment_rate": 15}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn should_reject_update_without_bearer() {
        let app = build(test_state(StubStore::default()));

        let response = app
            .oneshot(post_update(None, "application/json", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn should_reject_malformed_json_with_400() {
        let app = build(test_state(StubStore::default()));

        let response = app
            .oneshot(post_update(
                Some("Bearer secret"),
                "application/json",
                "{oops",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn should_report_storage_failure_with_500() {
        let app = build(test_state(FullDiskStore));

        let response = app
            .oneshot(post_update(Some("Bearer secret"), "application/json", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("no space left on device")
        );
    }

    #[tokio::test]
    async fn should_accept_update_above_default_axum_limit() {
        let app = build(test_state(StubStore::default()));
        let notes = "a".repeat(3 * 1024 * 1024);
        let body = format!(r#"{{"notes": "{notes}"}}"#);

        let response = app
            .oneshot(post_update(Some("Bearer secret"), "application/json", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_update_above_body_limit_with_413() {
        let state = test_state(StubStore::default());
        let body = "a".repeat(crate::api::MAX_BODY_BYTES + 1);

        let response = build(state.clone())
            .oneshot(post_update(Some("Bearer secret"), "application/json", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(state.snapshot_service.current().await.is_none());
    }

    #[tokio::test]
    async fn should_render_placeholder_widget_before_first_update() {
        let app = build(test_state(StubStore::default()));

        let response = app.oneshot(get("/abandon-rate")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Waiting for data"));
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_widget() {
        let app = build(test_state(StubStore::default()));

        let response = app.oneshot(get("/pie-chart")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_render_widget_after_update() {
        let state = test_state(StubStore::default());

        let response = build(state.clone())
            .oneshot(post_update(
                Some("Bearer secret"),
                "application/json",
                r#"{"abandonment_rate": 45}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = build(state).oneshot(get("/abandon-rate")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains(">45%<"));
        assert!(html.contains(">Needs Attention<"));
    }

    #[tokio::test]
    async fn should_serve_stored_html_document_on_index() {
        let state = test_state(StubStore::default());

        build(state.clone())
            .oneshot(post_update(
                Some("Bearer secret"),
                "text/html",
                "<html><body>pushed</body></html>",
            ))
            .await
            .unwrap();

        let response = build(state).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "<html><body>pushed</body></html>"
        );
    }

    #[tokio::test]
    async fn should_render_status_index_without_snapshot() {
        let app = build(test_state(StubStore::default()));

        let response = app.oneshot(get("/")).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains("Waiting for first data update"));
        assert!(html.contains(r#"href="/full-funnel""#));
    }
}
