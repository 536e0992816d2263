//! HTTP application wiring (Axum router + middleware).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per route group)
//! - `dto.rs`: query-parameter DTOs
//!
//! `build_app` is shared by both entry points: the local development
//! server (`main.rs`) and the Lambda adapter (`bin/lambda.rs`). It runs
//! once per process (once per cold start on Lambda) and the resulting
//! router is reused for every request after that.

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub mod dto;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by both binaries).
pub fn build_app() -> Router {
    let app = Router::new()
        .merge(routes::numbers::router())
        .merge(routes::names::router());
    tracing::info!("routes mounted");

    // Any method, any header, credentials allowed, origin mirrored back.
    // tower-http rejects a literal `*` origin combined with credentials,
    // so the mirrored form is the permissive-with-credentials policy.
    let app = app.layer(ServiceBuilder::new().layer(CorsLayer::very_permissive()));
    tracing::info!("origins set");

    app
}
