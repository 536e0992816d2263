//! Local development server: loopback only, fixed port.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = combiner_observability::init();

    let app = combiner_api::app::build_app();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
