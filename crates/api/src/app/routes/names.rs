//! Name routes: `GET /item` and `GET /names`.

use axum::{
    body::Bytes,
    extract::Query,
    http::{request::Parts, StatusCode},
    routing::get,
    Router,
};

use combiner_core::combine_names;

use crate::app::dto::NamesParams;

use super::{log_payload, log_request};

pub fn router() -> Router {
    Router::new()
        .route("/item", get(item))
        .route("/names", get(names))
}

/// Log-only endpoint; no domain call.
pub async fn item(parts: Parts, payload: Bytes) -> StatusCode {
    tracing::info!("item");
    log_payload(&payload);
    log_request(&parts);

    StatusCode::OK
}

pub async fn names(
    Query(params): Query<NamesParams>,
    parts: Parts,
    payload: Bytes,
) -> StatusCode {
    tracing::info!("names");
    log_payload(&payload);
    tracing::info!(first_name = %params.first_name, "first_name");
    tracing::info!(last_name = %params.last_name, "last_name");

    let full_name = combine_names(&params.first_name, &params.last_name);

    tracing::info!("back in names");
    tracing::info!(full_name = %full_name, "full_name");
    log_request(&parts);

    StatusCode::OK
}
