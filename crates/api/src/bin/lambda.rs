//! AWS Lambda entry point.
//!
//! Each invocation event becomes one request/response cycle against the
//! same router the local server mounts. Logger and routes are built once
//! per cold start and reused across warm invocations.

use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _guard = combiner_observability::init();

    let app = combiner_api::app::build_app();
    tracing::info!("handler set");

    lambda_http::run(app).await
}
