//! # dashpush-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Accept **snapshot pushes** on `POST /update` (bearer-guarded, JSON or
//!   raw HTML body)
//! - Serve **server-side-rendered HTML widgets** at `GET /{kind}`, one per
//!   [`WidgetKind`](dashpush_domain::widget::WidgetKind), sized to fill an
//!   embedding iframe and auto-refreshed with
//!   `<meta http-equiv="refresh">`
//! - Serve the index page at `GET /` and liveness at `GET /health`
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `dashpush-app` (for the port trait and service) and
//! `dashpush-domain` (for domain types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod router;
pub mod state;
