//! HTTP router.
//!
//! Triage routes are mounted both at their current paths and at the legacy
//! `/api/...` paths older clients still call. Triage responses are never
//! cached.

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the full router over a shared `ApiContext`.
pub fn api_router(ctx: ApiContext) -> Router {
    let triage = Router::new()
        .route("/triage", post(endpoints::triage::normal))
        .route("/triage/deep", post(endpoints::triage::deep))
        .route("/guidance/deep-explicit", post(endpoints::guidance::deep_explicit))
        .route("/api/help", post(endpoints::triage::normal))
        .route("/api/help/deep", post(endpoints::triage::deep))
        .route("/api/deep-guidance", post(endpoints::guidance::deep_explicit))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/situations", get(endpoints::situations::list))
        .route("/api/situations", get(endpoints::situations::list))
        .route("/guides", get(endpoints::guides::list))
        .route("/guides/refresh", post(endpoints::guides::refresh))
        .merge(triage)
        .with_state(ctx)
}
