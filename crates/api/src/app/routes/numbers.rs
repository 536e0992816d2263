//! Number routes: `GET /nothing` and `GET /adder`.

use axum::{
    body::Bytes,
    extract::Query,
    http::{request::Parts, StatusCode},
    routing::get,
    Router,
};

use combiner_core::combine_numbers;

use crate::app::dto::AdderParams;

use super::{log_payload, log_request};

pub fn router() -> Router {
    Router::new()
        .route("/nothing", get(nothing))
        .route("/adder", get(adder))
}

/// Log-only endpoint; no domain call.
pub async fn nothing(parts: Parts, payload: Bytes) -> StatusCode {
    tracing::info!("nothing");
    log_payload(&payload);
    log_request(&parts);

    StatusCode::OK
}

pub async fn adder(
    Query(params): Query<AdderParams>,
    parts: Parts,
    payload: Bytes,
) -> StatusCode {
    tracing::info!("adder");
    log_payload(&payload);
    tracing::info!(number = params.number, "number");

    let result = combine_numbers(params.number);

    tracing::info!("back in adder");
    tracing::info!(result, "result");
    log_request(&parts);

    StatusCode::OK
}
