use client_service::config::Config;
use client_service::services::books_api::HttpBooksApi;
use client_service::AppState;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("client_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let books_api = HttpBooksApi::new(config.books_api_url.clone(), config.request_timeout)?;
    info!(
        "Using books service at {} (timeout {:?})",
        books_api.base_url(),
        config.request_timeout
    );

    let state = AppState::new(Arc::new(books_api))?;
    let app = client_service::app(state);

    let addr = config.addr();
    info!("Client service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Client service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
